//! Localized text around reviews: terminal listing lines and form errors.

use contracts::domain::review::{Review, ReviewViolation};

use crate::shared::date_utils::{format_locale_datetime, to_local};
use crate::shared::error::ServiceError;
use crate::shared::i18n::{t, Language};

/// Message key for a failed `POST /review`.
pub fn error_key(error: &ServiceError) -> String {
    match error {
        ServiceError::Validation { messages } => match messages.first() {
            Some(m) if m.starts_with("Username must be at least") => {
                "rating.errors.usernameMin".to_string()
            }
            Some(m) if m.starts_with("Comment must be at least") => {
                "rating.errors.commentMin".to_string()
            }
            Some(m) if m.starts_with("Stars must not exceed") => {
                "rating.errors.starsMax".to_string()
            }
            Some(m) => m.clone(),
            None => "rating.errors.unknownError".to_string(),
        },
        ServiceError::RateLimited => "rating.errors.tooManyRequests".to_string(),
        ServiceError::Server { .. } => "rating.errors.serverError".to_string(),
        ServiceError::Network(_) => "rating.errors.networkError".to_string(),
        _ => "rating.errors.unknownError".to_string(),
    }
}

/// User-facing text for a failed submission. Unmapped API messages are shown as is.
pub fn error_message(lang: Language, error: &ServiceError) -> String {
    let key = error_key(error);
    match t(lang, &key) {
        "" => key,
        text => text.to_string(),
    }
}

/// Message key for a client-side validation failure.
pub fn violation_key(violation: ReviewViolation) -> &'static str {
    match violation {
        ReviewViolation::UsernameTooShort => "rating.errors.usernameMin",
        ReviewViolation::CommentTooShort => "rating.errors.commentMin",
        ReviewViolation::StarsTooLow => "rating.error",
        ReviewViolation::StarsTooHigh => "rating.errors.starsMax",
    }
}

pub fn star_label_key(stars: f64) -> String {
    format!("terminal.rating.{}", contracts::domain::review::format_stars(stars))
}

/// `{date} - [{username}] {comment} {Rating}: {stars} - {label}`
pub fn review_line(lang: Language, review: &Review) -> String {
    let date = review
        .created_at
        .as_ref()
        .map(|created| format_locale_datetime(&to_local(created), lang))
        .unwrap_or_else(|| "--".to_string());

    format!(
        "{} - [{}] {} {}: {} - {}",
        date,
        review.username,
        review.comment,
        t(lang, "terminal.info.feedback"),
        review.stars_label(),
        t(lang, &star_label_key(review.stars)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn validation_messages_map_to_keys() {
        let err = ServiceError::Validation {
            messages: vec!["Comment must be at least 10 characters".into()],
        };
        assert_eq!(error_key(&err), "rating.errors.commentMin");

        let err = ServiceError::Validation {
            messages: vec!["Username must be at least 2 characters".into(), "x".into()],
        };
        assert_eq!(error_key(&err), "rating.errors.usernameMin");

        let err = ServiceError::Validation {
            messages: vec!["Stars must not exceed 5".into()],
        };
        assert_eq!(error_key(&err), "rating.errors.starsMax");
    }

    #[test]
    fn unknown_validation_message_is_shown_verbatim() {
        let err = ServiceError::Validation {
            messages: vec!["Comment contains profanity".into()],
        };
        assert_eq!(error_message(Language::En, &err), "Comment contains profanity");
    }

    #[test]
    fn status_errors_map_to_keys() {
        assert_eq!(error_key(&ServiceError::RateLimited), "rating.errors.tooManyRequests");
        assert_eq!(
            error_key(&ServiceError::Server { status: 503 }),
            "rating.errors.serverError"
        );
        assert_eq!(
            error_key(&ServiceError::Network("offline".into())),
            "rating.errors.networkError"
        );
        assert_eq!(
            error_key(&ServiceError::Http { status: 404 }),
            "rating.errors.unknownError"
        );
        assert_eq!(
            error_message(Language::En, &ServiceError::RateLimited),
            "Too many attempts. Please wait a moment."
        );
    }

    #[test]
    fn review_line_contains_every_part() {
        let review = Review {
            id: "1".into(),
            username: "ana".into(),
            comment: "Great portfolio".into(),
            stars: 4.5,
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()),
            updated_at: None,
        };
        let line = review_line(Language::En, &review);
        assert!(line.contains(" - [ana] Great portfolio Rating: 4.5 - Excellent"), "{}", line);
        assert!(line.contains("2024"), "{}", line);
    }

    #[test]
    fn review_without_date_uses_placeholder() {
        let review = Review {
            id: String::new(),
            username: "bob".into(),
            comment: "Nice".into(),
            stars: 3.0,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(
            review_line(Language::Pt, &review),
            "-- - [bob] Nice Avaliação: 3 - Ok+"
        );
    }
}
