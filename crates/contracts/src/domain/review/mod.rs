pub mod aggregate;
pub mod validation;

pub use aggregate::{format_stars, CreateReviewRequest, Review};
pub use validation::{ReviewViolation, COMMENT_MIN_LEN, STARS_MAX, STARS_MIN, USERNAME_MIN_LEN};
