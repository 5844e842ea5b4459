use contracts::domain::command::CommandResponse;

use crate::shared::api_utils::{api_url, get_json};
use crate::shared::error::ServiceError;

/// Ask the remote resolver to answer a free-form terminal line.
pub async fn resolve(command: &str) -> Result<CommandResponse, ServiceError> {
    let url = api_url(&command_path(command));
    get_json(&url).await
}

fn command_path(command: &str) -> String {
    format!("/command/{}", urlencoding::encode(command))
}
