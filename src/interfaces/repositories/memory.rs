use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::{
    entities::project::{new_project_id, NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
    seed::seed_projects,
};

/// In-memory mock database. A single `RwLock` serializes mutations against
/// reads; every read-modify-write happens under one write-lock acquisition,
/// so callers never observe a half-updated collection.
pub struct InMemoryProjectRepo {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectRepo {
    /// Store seeded with the fixed startup data set.
    pub fn new() -> Self {
        Self::with_projects(seed_projects())
    }

    pub fn empty() -> Self {
        Self::with_projects(Vec::new())
    }

    /// Store over an injected record set, for isolated test instances.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        InMemoryProjectRepo {
            projects: RwLock::new(projects),
        }
    }

    fn fresh_id(existing: &[Project]) -> String {
        // Re-roll while the write lock is held makes uniqueness a hard
        // guarantee rather than a probabilistic one.
        loop {
            let id = new_project_id();
            if !existing.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }
}

impl Default for InMemoryProjectRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepo {
    async fn find_all(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.read().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects.read().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, data: NewProjectRequest) -> Result<Project, AppError> {
        let mut projects = self.projects.write();
        let id = Self::fresh_id(&projects);
        let project = Project::from_request(id, data, Utc::now());
        projects.push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> Result<Option<Project>, AppError> {
        let mut projects = self.projects.write();
        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        apply_patch(project, patch);
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut projects = self.projects.write();
        match projects.iter().position(|p| p.id == id) {
            Some(index) => {
                // `Vec::remove` keeps the surviving records in order.
                projects.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Merges the supplied patch fields in place. `SetToNull` only has meaning
/// for the clearable URL fields; on required fields it is ignored, matching
/// a partial merge where "remove" is not expressible.
fn apply_patch(project: &mut Project, patch: &UpdateProjectRequest) {
    if let Some(title) = patch.title.value_ref() {
        project.title = title.clone();
    }
    if let Some(description) = patch.description.value_ref() {
        project.description = description.clone();
    }
    if let Some(category) = patch.category.value_ref() {
        project.category = *category;
    }
    if let Some(status) = patch.status.value_ref() {
        project.status = *status;
    }
    if let Some(technologies) = patch.technologies.value_ref() {
        project.technologies = technologies.clone();
    }
    if let Some(image_url) = patch.image_url.as_ref_option() {
        project.image_url = image_url.cloned();
    }
    if let Some(demo_url) = patch.demo_url.as_ref_option() {
        project.demo_url = demo_url.cloned();
    }
    if let Some(github_url) = patch.github_url.as_ref_option() {
        project.github_url = github_url.cloned();
    }
    if let Some(featured) = patch.featured.value_ref() {
        project.featured = *featured;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::option_fields::OptionField;
    use crate::entities::project::{ProjectCategory, ProjectStatus};

    fn request(title: &str) -> NewProjectRequest {
        NewProjectRequest {
            title: title.to_string(),
            description: "A case study.".to_string(),
            category: ProjectCategory::WebDev,
            status: ProjectStatus::InProgress,
            technologies: vec!["Rust".to_string(), "Actix".to_string()],
            image_url: Some("https://img.example.com/a.png".to_string()),
            demo_url: None,
            github_url: None,
            featured: false,
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let repo = InMemoryProjectRepo::empty();
        let created = repo.create(request("Round Trip")).await.unwrap();

        assert_eq!(created.created_at, created.updated_at);
        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let repo = InMemoryProjectRepo::empty();
        let first = repo.create(request("First")).await.unwrap();
        let second = repo.create(request("Second")).await.unwrap();
        let third = repo.create(request("Third")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, [first.id.as_str(), second.id.as_str(), third.id.as_str()]);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let repo = InMemoryProjectRepo::empty();
        for _ in 0..50 {
            repo.create(request("Same Title")).await.unwrap();
        }
        let all = repo.find_all().await.unwrap();
        let mut ids: Vec<String> = all.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let repo = InMemoryProjectRepo::empty();
        let created = repo.create(request("Before")).await.unwrap();

        let patch = UpdateProjectRequest {
            title: OptionField::SetToValue("After".to_string()),
            ..Default::default()
        };
        let updated = repo.update(&created.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "After");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.status, created.status);
        assert_eq!(updated.technologies, created.technologies);
        assert_eq!(updated.image_url, created.image_url);
        assert_eq!(updated.featured, created.featured);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_can_clear_a_url_field() {
        let repo = InMemoryProjectRepo::empty();
        let created = repo.create(request("Has Image")).await.unwrap();
        assert!(created.image_url.is_some());

        let patch = UpdateProjectRequest {
            image_url: OptionField::SetToNull,
            ..Default::default()
        };
        let updated = repo.update(&created.id, &patch).await.unwrap().unwrap();
        assert_eq!(updated.image_url, None);
    }

    #[tokio::test]
    async fn update_of_missing_id_leaves_the_store_unchanged() {
        let repo = InMemoryProjectRepo::empty();
        let created = repo.create(request("Only One")).await.unwrap();

        let patch = UpdateProjectRequest {
            title: OptionField::SetToValue("Changed".to_string()),
            ..Default::default()
        };
        assert!(repo.update("missing-id", &patch).await.unwrap().is_none());

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn delete_is_terminal() {
        let repo = InMemoryProjectRepo::empty();
        let first = repo.create(request("First")).await.unwrap();
        let second = repo.create(request("Second")).await.unwrap();

        assert!(repo.delete(&first.id).await.unwrap());
        assert!(repo.find_by_id(&first.id).await.unwrap().is_none());
        assert!(!repo.delete(&first.id).await.unwrap());

        // Survivors keep their relative order.
        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![second]);
    }

    #[tokio::test]
    async fn seeded_store_starts_with_the_fixed_data_set() {
        let repo = InMemoryProjectRepo::new();
        let all = repo.find_all().await.unwrap();
        assert!(!all.is_empty());
        assert!(all.iter().any(|p| p.featured));
    }
}
