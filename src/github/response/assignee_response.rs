use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AssigneeResponse {
    pub login: String,
}
