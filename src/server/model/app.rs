use sea_orm::DatabaseConnection;

use crate::server::service::github::GitHubService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub github: GitHubService,
}
