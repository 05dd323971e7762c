mod issue_update_request;

pub use issue_update_request::IssueUpdateRequest;
