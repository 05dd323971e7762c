mod assignee_response;
mod label_response;

pub use assignee_response::AssigneeResponse;
pub use label_response::LabelResponse;
