mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, pagination, query, use_cases};
pub use infrastructure::seed;
pub use interfaces::{handlers, middlewares, repositories, routes};

use interfaces::middlewares::auth::StaticTokenCheck;
use repositories::memory::InMemoryProjectRepo;
use use_cases::projects::ProjectHandler;

pub type AppProjectHandler = ProjectHandler<InMemoryProjectRepo>;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub write_guard: StaticTokenCheck,
}

impl AppState {
    /// State backed by the seeded in-memory catalogue.
    pub fn new(config: &settings::AppConfig) -> Self {
        Self::with_repo(config, InMemoryProjectRepo::new())
    }

    /// State backed by a caller-supplied store, used by the test harness.
    pub fn with_repo(config: &settings::AppConfig, repo: InMemoryProjectRepo) -> Self {
        AppState {
            project_handler: ProjectHandler::new(repo),
            write_guard: StaticTokenCheck::new(config.admin_api_key.clone()),
        }
    }
}
