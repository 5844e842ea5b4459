use serde::{Deserialize, Serialize};

/// `message` is either a single string or a list of validation messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    One(String),
    Many(Vec<String>),
}

/// Error body returned by the API for 4xx/5xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<ApiMessage>,
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn messages(&self) -> Vec<String> {
        match &self.message {
            Some(ApiMessage::One(message)) => vec![message.clone()],
            Some(ApiMessage::Many(messages)) => messages.clone(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_of_validation_messages() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"statusCode":400,"message":["Username must be at least 2 characters"],"error":"Bad Request"}"#,
        )
        .unwrap();
        assert_eq!(body.status_code, Some(400));
        assert_eq!(body.messages(), vec!["Username must be at least 2 characters"]);
    }

    #[test]
    fn single_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Too Many Requests"}"#).unwrap();
        assert_eq!(body.messages(), vec!["Too Many Requests"]);
    }

    #[test]
    fn empty_body() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.messages().is_empty());
    }
}
