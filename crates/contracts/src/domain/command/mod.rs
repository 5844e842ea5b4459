use serde::{Deserialize, Serialize};

/// Answer of the remote command resolver for a free-form terminal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub command: String,
    pub response: Vec<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolver_payload() {
        let json = r#"{
            "_id": "64f0",
            "command": "help",
            "response": ["reviews", "evaluate"],
            "created_at": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-03-15T14:02:26.123Z"
        }"#;
        let parsed: CommandResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.command, "help");
        assert_eq!(parsed.response, vec!["reviews", "evaluate"]);
    }

    #[test]
    fn only_response_is_required() {
        let parsed: CommandResponse = serde_json::from_str(r#"{"response":[]}"#).unwrap();
        assert!(parsed.response.is_empty());
        assert!(parsed.id.is_empty());
    }
}
