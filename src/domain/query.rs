use crate::entities::project::{Project, ProjectCategory, ProjectStatus};

/// Conjunction of optional predicates narrowing a listing query. `featured`
/// is deliberately tri-state: `None` means no filtering, `Some(false)`
/// selects non-featured records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilters {
    pub category: Option<ProjectCategory>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
    pub technologies: Option<Vec<String>>,
    pub search: Option<String>,
}

impl ProjectFilters {
    pub fn featured_only() -> Self {
        ProjectFilters {
            featured: Some(true),
            ..ProjectFilters::default()
        }
    }

    /// Predicates apply in a fixed order: category, status, featured,
    /// technologies (match-any, case-sensitive), search (case-insensitive
    /// substring on title or description). The order does not change the
    /// result set; it is fixed so traces stay deterministic.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = self.category {
            if project.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if project.featured != featured {
                return false;
            }
        }
        if let Some(technologies) = &self.technologies {
            if !technologies.is_empty()
                && !technologies.iter().any(|tag| project.technologies.contains(tag))
            {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                let needle = search.to_lowercase();
                if !project.title.to_lowercase().contains(&needle)
                    && !project.description.to_lowercase().contains(&needle)
                {
                    return false;
                }
            }
        }
        true
    }
}

/// Derives the matching subset and the page slice in one pass: `total` is
/// counted before slicing, the slice is `[skip, skip+limit)` of the matches
/// in their stored order, empty when `skip >= total`.
pub fn query(
    records: &[Project],
    filters: &ProjectFilters,
    skip: usize,
    limit: usize,
) -> (Vec<Project>, usize) {
    let matched: Vec<&Project> = records.iter().filter(|p| filters.matches(p)).collect();
    let total = matched.len();
    let page = matched.into_iter().skip(skip).take(limit).cloned().collect();
    (page, total)
}
