use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
};

/// Entity Store contract. Absence is a representable outcome at this layer
/// (`Option` / `bool`), not an error; the use-case layer turns it into
/// `AppError::NotFound`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Full unfiltered scan in insertion order.
    async fn find_all(&self) -> Result<Vec<Project>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;

    /// Appends a new record; the store assigns the id and both timestamps.
    async fn create(&self, data: NewProjectRequest) -> Result<Project, AppError>;

    /// Merges only the supplied patch fields and refreshes `updated_at`.
    /// `id` and `created_at` are immutable.
    async fn update(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> Result<Option<Project>, AppError>;

    /// Removes the record; `false` when no record matched.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
