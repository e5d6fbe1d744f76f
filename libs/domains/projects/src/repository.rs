use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProjectResult;
use crate::models::Project;

/// Repository trait for Project persistence.
///
/// Defines the data access interface; the production implementation is
/// MongoDB, tests may substitute a mock or in-memory store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a new project
    async fn create(&self, project: Project) -> ProjectResult<Project>;

    /// Get a project by id
    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>>;

    /// List projects sorted by creation time descending
    async fn list(&self, skip: u64, limit: i64) -> ProjectResult<Vec<Project>>;

    /// Count all projects in the collection
    async fn count(&self) -> ProjectResult<u64>;

    /// Replace the stored document with the same id; None if absent
    async fn replace(&self, project: Project) -> ProjectResult<Option<Project>>;

    /// Delete a project by id; false if absent
    async fn delete(&self, id: Uuid) -> ProjectResult<bool>;
}
