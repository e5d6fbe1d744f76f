//! Project Service - validation, pagination, and orchestration

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use axum_helpers::errors::validation_message;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{PageQuery, Project, ProjectInput, ProjectPage};
use crate::repository::ProjectRepository;

/// Business-logic layer over a [`ProjectRepository`].
///
/// Normalizes and validates input before any write, and normalizes
/// pagination before any list query. The repository never sees
/// an unvalidated document.
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of projects, newest first, plus the collection-wide total.
    #[instrument(skip(self))]
    pub async fn list_projects(&self, query: PageQuery) -> ProjectResult<ProjectPage> {
        let query = query.normalized();

        // Page slice and total are independent queries; run them together.
        let (items, total) = tokio::try_join!(
            self.repository.list(query.skip(), query.limit),
            self.repository.count()
        )?;

        Ok(ProjectPage {
            items,
            page: query.page,
            limit: query.limit,
            total,
        })
    }

    /// Validate and persist a new project.
    #[instrument(skip(self, input), fields(project_title = %input.title))]
    pub async fn create_project(&self, input: ProjectInput) -> ProjectResult<Project> {
        let input = self.validated(input)?;
        self.repository.create(Project::new(input)).await
    }

    /// Get a project by id.
    #[instrument(skip(self))]
    pub async fn get_project(&self, id: Uuid) -> ProjectResult<Project> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    /// Replace an existing project with a validated full document.
    ///
    /// The replacement body must satisfy the same schema as creation;
    /// `id` and `createdAt` are preserved from the stored record.
    #[instrument(skip(self, input))]
    pub async fn update_project(&self, id: Uuid, input: ProjectInput) -> ProjectResult<Project> {
        let input = self.validated(input)?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))?;
        existing.replace_with(input);

        self.repository
            .replace(existing)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    /// Delete a project.
    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: Uuid) -> ProjectResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProjectError::NotFound(id));
        }
        Ok(())
    }

    fn validated(&self, input: ProjectInput) -> ProjectResult<ProjectInput> {
        let input = input.normalized();
        input
            .validate()
            .map_err(|e| ProjectError::Validation(validation_message(&e)))?;
        Ok(input)
    }
}

impl<R: ProjectRepository> Clone for ProjectService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProjectRepository;

    fn valid_input() -> ProjectInput {
        ProjectInput {
            title: "Portfolio site".to_string(),
            description: "A personal portfolio".to_string(),
            tech_stack: vec!["rust".to_string()],
            repo_url: None,
            live_url: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn list_uses_normalized_pagination() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list()
            .withf(|skip, limit| *skip == 0 && *limit == 100)
            .returning(|_, _| Ok(vec![]));
        repo.expect_count().returning(|| Ok(42));

        let service = ProjectService::new(repo);
        // page 0 floors to 1, limit 500 clamps to 100
        let page = service
            .list_projects(PageQuery { page: 0, limit: 500 })
            .await
            .unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 100);
        assert_eq!(page.total, 42);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn list_total_reflects_collection_not_page() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list()
            .returning(|_, _| Ok(vec![Project::new(valid_input())]));
        repo.expect_count().returning(|| Ok(7));

        let service = ProjectService::new(repo);
        let page = service.list_projects(PageQuery::default()).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 7);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_touching_repo() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create().never();

        let service = ProjectService::new(repo);
        let mut input = valid_input();
        input.tech_stack = vec![];

        let err = service.create_project(input).await.unwrap_err();
        assert!(matches!(err, ProjectError::Validation(_)));
    }

    #[tokio::test]
    async fn create_trims_before_persisting() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create()
            .withf(|p| p.title == "Portfolio site" && p.tech_stack == vec!["rust".to_string()])
            .returning(|p| Ok(p));

        let service = ProjectService::new(repo);
        let mut input = valid_input();
        input.title = "  Portfolio site  ".to_string();
        input.tech_stack = vec![" rust ".to_string()];

        let created = service.create_project(input).await.unwrap();
        assert_eq!(created.title, "Portfolio site");
    }

    #[tokio::test]
    async fn get_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProjectService::new(repo);
        let err = service.get_project(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_replace().never();

        let service = ProjectService::new(repo);
        let err = service
            .update_project(Uuid::now_v7(), valid_input())
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_by_id().never();

        let service = ProjectService::new(repo);
        let mut input = valid_input();
        input.title = String::new();

        let err = service
            .update_project(Uuid::now_v7(), input)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Validation(_)));
    }

    #[tokio::test]
    async fn update_preserves_id_and_created_at() {
        let existing = Project::new(valid_input());
        let id = existing.id;
        let created_at = existing.created_at;

        let mut repo = MockProjectRepository::new();
        let lookup = existing.clone();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(lookup.clone())));
        repo.expect_replace().returning(|p| Ok(Some(p)));

        let service = ProjectService::new(repo);
        let mut input = valid_input();
        input.title = "Renamed".to_string();

        let updated = service.update_project(id, input).await.unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.title, "Renamed");
    }

    #[tokio::test]
    async fn delete_missing_project_is_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = ProjectService::new(repo);
        let err = service.delete_project(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ProjectError::NotFound(_)));
    }

    #[tokio::test]
    async fn backend_errors_propagate() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list()
            .returning(|_, _| Err(ProjectError::Backend("server selection timeout".to_string())));
        repo.expect_count().returning(|| Ok(0));

        let service = ProjectService::new(repo);
        let err = service.list_projects(PageQuery::default()).await.unwrap_err();
        assert!(matches!(err, ProjectError::Backend(_)));
    }
}
