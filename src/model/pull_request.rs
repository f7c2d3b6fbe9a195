use serde_json::Value;

use crate::model::Result;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct PullRequest {
    pub id: i64,
    pub title: String,
}

// Create
impl PullRequest {
    pub fn new(id: i64, title: impl ToString) -> Self {
        Self {
            id,
            title: title.to_string(),
        }
    }
}

// Parser
impl PullRequest {
    /// Parses the `value` array of a pull-request list response.
    pub fn parse_list(details: &Value) -> Result<Vec<Self>> {
        let Some(elements) = details["value"].as_array() else {
            return Err("Not found 'value' field".into());
        };
        let mut result = Vec::new();
        for element in elements {
            let Some(id) = element["pullRequestId"].as_i64() else {
                return Err("Not found 'pullRequestId' field".into());
            };
            let Some(title) = element["title"].as_str() else {
                return Err("Not found 'title' field".into());
            };
            result.push(Self::new(id, title));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_list_keeps_response_order() {
        let details = json!({
            "count": 2,
            "value": [
                {"pullRequestId": 42, "title": "Add login page", "status": "completed"},
                {"pullRequestId": 7, "title": "Fix header", "status": "completed"}
            ]
        });
        let pull_requests = PullRequest::parse_list(&details).unwrap();
        assert_eq!(pull_requests.len(), 2);
        assert_eq!(pull_requests[0], PullRequest::new(42, "Add login page"));
        assert_eq!(pull_requests[1], PullRequest::new(7, "Fix header"));
    }

    #[test]
    fn parse_empty_list() {
        let details = json!({"count": 0, "value": []});
        assert!(PullRequest::parse_list(&details).unwrap().is_empty());
    }

    #[test]
    fn missing_value_field_is_an_error() {
        let details = json!({"count": 0});
        assert!(PullRequest::parse_list(&details).is_err());
    }

    #[test]
    fn missing_title_is_an_error() {
        let details = json!({"value": [{"pullRequestId": 1}]});
        assert!(PullRequest::parse_list(&details).is_err());
    }
}
