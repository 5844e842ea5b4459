use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{self, ReviewViolation};

// ============================================================================
// Review
// ============================================================================

/// Visitor review as returned by `GET /review`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub username: String,
    pub comment: String,
    pub stars: f64,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl Review {
    /// Stars rendered the way the API stores them: `4`, `4.5`.
    pub fn stars_label(&self) -> String {
        format_stars(self.stars)
    }
}

/// `4.0` → `"4"`, `4.5` → `"4.5"`
pub fn format_stars(stars: f64) -> String {
    if stars.fract() == 0.0 {
        format!("{}", stars as i64)
    } else {
        format!("{}", stars)
    }
}

// ============================================================================
// Create request
// ============================================================================

/// Body of `POST /review`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub username: String,
    pub comment: String,
    pub stars: f64,
}

impl CreateReviewRequest {
    /// Builds a request with trimmed text fields.
    pub fn new(username: &str, comment: &str, stars: f64) -> Self {
        Self {
            username: username.trim().to_string(),
            comment: comment.trim().to_string(),
            stars,
        }
    }

    /// Same rules the API enforces; the first violation wins.
    pub fn validate(&self) -> Result<(), ReviewViolation> {
        validation::validate(&self.username, &self.comment, self.stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_review_with_snake_case_timestamp() {
        let json = r#"{
            "_id": "1",
            "username": "gabriel",
            "comment": "Great portfolio!",
            "stars": 4.5,
            "created_at": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-03-15T14:02:26.123Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.username, "gabriel");
        assert!(review.created_at.is_some());
        assert_eq!(review.stars_label(), "4.5");
    }

    #[test]
    fn parses_review_with_camel_case_timestamp() {
        let json = r#"{"username":"ana","comment":"nice","stars":5,"createdAt":"2024-01-01T00:00:00Z"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(review.created_at.is_some());
        assert_eq!(review.stars_label(), "5");
    }

    #[test]
    fn create_request_trims_text() {
        let request = CreateReviewRequest::new("  ana ", " a long enough comment ", 3.0);
        assert_eq!(request.username, "ana");
        assert_eq!(request.comment, "a long enough comment");
    }
}
