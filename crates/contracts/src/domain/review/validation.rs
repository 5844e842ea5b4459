//! Review schema shared with the API: it rejects the same payloads with HTTP 400.

pub const USERNAME_MIN_LEN: usize = 2;
pub const COMMENT_MIN_LEN: usize = 10;
pub const STARS_MIN: f64 = 0.5;
pub const STARS_MAX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewViolation {
    UsernameTooShort,
    CommentTooShort,
    StarsTooLow,
    StarsTooHigh,
}

impl ReviewViolation {
    /// Message the API uses for the same rule.
    pub fn api_message(&self) -> String {
        match self {
            ReviewViolation::UsernameTooShort => {
                format!("Username must be at least {} characters", USERNAME_MIN_LEN)
            }
            ReviewViolation::CommentTooShort => {
                format!("Comment must be at least {} characters", COMMENT_MIN_LEN)
            }
            ReviewViolation::StarsTooLow => format!("Stars must be at least {}", STARS_MIN),
            ReviewViolation::StarsTooHigh => format!("Stars must not exceed {}", STARS_MAX),
        }
    }
}

pub fn validate(username: &str, comment: &str, stars: f64) -> Result<(), ReviewViolation> {
    if username.trim().chars().count() < USERNAME_MIN_LEN {
        return Err(ReviewViolation::UsernameTooShort);
    }
    if comment.trim().chars().count() < COMMENT_MIN_LEN {
        return Err(ReviewViolation::CommentTooShort);
    }
    if stars < STARS_MIN {
        return Err(ReviewViolation::StarsTooLow);
    }
    if stars > STARS_MAX {
        return Err(ReviewViolation::StarsTooHigh);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_review() {
        assert_eq!(validate("ana", "really liked it", 4.5), Ok(()));
    }

    #[test]
    fn rejects_in_field_order() {
        assert_eq!(validate("a", "short", 9.0), Err(ReviewViolation::UsernameTooShort));
        assert_eq!(validate("ana", "short", 9.0), Err(ReviewViolation::CommentTooShort));
        assert_eq!(validate("ana", "really liked it", 0.0), Err(ReviewViolation::StarsTooLow));
        assert_eq!(validate("ana", "really liked it", 5.5), Err(ReviewViolation::StarsTooHigh));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(validate("çã", "ótimo sítio!", 1.0), Ok(()));
    }

    #[test]
    fn api_messages_match_server_wording() {
        assert!(ReviewViolation::UsernameTooShort
            .api_message()
            .starts_with("Username must be at least"));
        assert!(ReviewViolation::StarsTooHigh
            .api_message()
            .starts_with("Stars must not exceed"));
    }
}
