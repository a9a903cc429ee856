use serde::Serialize;
use validator::Validate;

use crate::{
    constants::DEFAULT_FEATURED_LIMIT,
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    pagination::{PageRequest, PaginationMeta},
    query::{self, ProjectFilters},
    repositories::project::ProjectRepository,
};

#[derive(Debug, Serialize)]
pub struct ProjectListing {
    pub projects: Vec<Project>,
    pub meta: PaginationMeta,
}

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects matching the filters, one page at a time, with the
    /// pagination metadata computed over the full match count.
    pub async fn get_projects(
        &self,
        filters: &ProjectFilters,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<ProjectListing, AppError> {
        let page_request = PageRequest::normalize(page, limit);
        let records = self.project_repo.find_all().await?;
        let (projects, total) = query::query(
            &records,
            filters,
            page_request.skip(),
            page_request.limit as usize,
        );
        let meta = PaginationMeta::new(page_request.page, page_request.limit, total);

        Ok(ProjectListing { projects, meta })
    }

    /// Retrieves a single project by its ID.
    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        self.project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with ID {id} not found")))
    }

    /// First page of featured projects, list only, no metadata.
    pub async fn get_featured_projects(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<Project>, AppError> {
        let listing = self
            .get_projects(
                &ProjectFilters::featured_only(),
                Some(1),
                Some(limit.unwrap_or(DEFAULT_FEATURED_LIMIT)),
            )
            .await?;
        Ok(listing.projects)
    }

    /// Creates a new project after boundary validation.
    pub async fn create_project(&self, data: NewProjectRequest) -> Result<Project, AppError> {
        data.validate()?;
        self.project_repo.create(data).await
    }

    /// Applies a partial update; only the supplied fields are merged.
    pub async fn update_project(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        patch.validate()?;
        self.project_repo
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with ID {id} not found")))
    }

    /// Removes a project permanently.
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        if self.project_repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Project with ID {id} not found")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project::{ProjectCategory, ProjectStatus};
    use crate::repositories::project::MockProjectRepository;
    use chrono::Utc;

    fn record(id: &str, category: ProjectCategory, featured: bool) -> Project {
        let now = Utc::now();
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: "A case study.".to_string(),
            category,
            status: ProjectStatus::Completed,
            technologies: vec!["Rust".to_string()],
            image_url: None,
            demo_url: None,
            github_url: None,
            featured,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn get_projects_pages_the_filtered_matches() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                record("w1", ProjectCategory::WebDev, true),
                record("a1", ProjectCategory::AppDev, false),
                record("w2", ProjectCategory::WebDev, false),
            ])
        });
        let handler = ProjectHandler::new(repo);

        let filters = ProjectFilters {
            category: Some(ProjectCategory::WebDev),
            ..ProjectFilters::default()
        };
        let listing = handler.get_projects(&filters, Some(1), Some(1)).await.unwrap();

        assert_eq!(listing.projects.len(), 1);
        assert_eq!(listing.projects[0].id, "w1");
        assert_eq!(listing.meta.page, 1);
        assert_eq!(listing.meta.limit, 1);
        assert_eq!(listing.meta.total, 2);
        assert_eq!(listing.meta.total_pages, 2);
    }

    #[tokio::test]
    async fn get_projects_clamps_malformed_pagination() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![record("w1", ProjectCategory::WebDev, false)]));
        let handler = ProjectHandler::new(repo);

        let listing = handler
            .get_projects(&ProjectFilters::default(), Some(-3), Some(0))
            .await
            .unwrap();

        assert_eq!(listing.meta.page, 1);
        assert_eq!(listing.meta.limit, 1);
    }

    #[tokio::test]
    async fn get_project_by_id_maps_absence_to_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let handler = ProjectHandler::new(repo);

        let err = handler.get_project_by_id("missing-id").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_featured_projects_defaults_to_six() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_all().returning(|| {
            Ok((0..8)
                .map(|i| record(&format!("f{i}"), ProjectCategory::Iot, true))
                .collect())
        });
        let handler = ProjectHandler::new(repo);

        let featured = handler.get_featured_projects(None).await.unwrap();
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].id, "f0");
    }

    #[tokio::test]
    async fn get_featured_projects_filters_out_non_featured() {
        let mut repo = MockProjectRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                record("w1", ProjectCategory::WebDev, true),
                record("a1", ProjectCategory::AppDev, false),
                record("i1", ProjectCategory::Iot, true),
            ])
        });
        let handler = ProjectHandler::new(repo);

        let featured = handler.get_featured_projects(Some(10)).await.unwrap();
        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["w1", "i1"]);
    }

    #[tokio::test]
    async fn create_project_rejects_invalid_input_before_the_store() {
        // No `create` expectation: reaching the store would panic the mock.
        let repo = MockProjectRepository::new();
        let handler = ProjectHandler::new(repo);

        let request = NewProjectRequest {
            title: "Valid title".to_string(),
            description: "Valid description".to_string(),
            category: ProjectCategory::WebDev,
            status: ProjectStatus::Planned,
            technologies: vec![],
            image_url: None,
            demo_url: None,
            github_url: None,
            featured: false,
        };

        let err = handler.create_project(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn update_project_maps_absence_to_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));
        let handler = ProjectHandler::new(repo);

        let patch = UpdateProjectRequest::default();
        let err = handler.update_project("missing-id", &patch).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_project_maps_false_to_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let handler = ProjectHandler::new(repo);

        let err = handler.delete_project("missing-id").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
