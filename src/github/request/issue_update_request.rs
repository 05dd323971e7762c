use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IssueUpdateRequest {
    pub assignee: String,
    pub labels: Vec<String>,
}

impl IssueUpdateRequest {
    pub fn new(assignee: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into(),
            labels: vec![label.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_single_label_list() {
        let request = IssueUpdateRequest::new("carol", "needs-review");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "assignee": "carol", "labels": ["needs-review"] })
        );
    }
}
