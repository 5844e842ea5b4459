//! Side-effecting collaborators of the terminal dispatcher.

use async_trait::async_trait;
use contracts::domain::review::Review;

use crate::domain::{command, review};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::{ModalKind, ModalService};
use crate::shared::error::ServiceError;

#[async_trait(?Send)]
pub trait TerminalServices {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ServiceError>;

    /// Response lines for a command the local grammar does not know.
    async fn resolve(&self, command: &str) -> Result<Vec<String>, ServiceError>;

    fn open_rating(&self);

    fn navigate(&self, path: &str);
}

/// Services backed by the REST API, the rating modal and history navigation.
#[derive(Clone, Copy)]
pub struct LiveTerminalServices {
    pub global: AppGlobalContext,
    pub modals: ModalService,
}

#[async_trait(?Send)]
impl TerminalServices for LiveTerminalServices {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        review::api::fetch_all().await
    }

    async fn resolve(&self, line: &str) -> Result<Vec<String>, ServiceError> {
        command::api::resolve(line).await.map(|r| r.response)
    }

    fn open_rating(&self) {
        self.modals.show(ModalKind::Rating);
    }

    fn navigate(&self, path: &str) {
        self.global.navigate(path);
    }
}
