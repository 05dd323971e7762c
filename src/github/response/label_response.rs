use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LabelResponse {
    pub name: String,
}
