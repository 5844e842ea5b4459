use contracts::domain::review::{CreateReviewRequest, Review};

use crate::shared::api_utils::{api_url, get_json, post_json};
use crate::shared::error::ServiceError;

const REVIEW_PATH: &str = "/review";

/// `GET /review`
pub async fn fetch_all() -> Result<Vec<Review>, ServiceError> {
    get_json(&api_url(REVIEW_PATH)).await
}

/// `POST /review`; the API answers with the stored review.
pub async fn create(request: &CreateReviewRequest) -> Result<Review, ServiceError> {
    post_json(&api_url(REVIEW_PATH), request).await
}
