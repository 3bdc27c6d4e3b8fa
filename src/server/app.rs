//! Application assembly.
//!
//! Everything the running service depends on is passed in through [`AppOptions`], so the
//! binary and test hosts build the same application with different collaborators: the
//! binary points the GitHub client at the real API, tests point it at a fake one and turn
//! off background jobs and request tracing.

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::JobScheduler;
use tower_http::trace::TraceLayer;

use crate::server::{
    error::Error,
    model::app::AppState,
    router,
    scheduler::Scheduler,
    service::github::{GitHubConfig, GitHubService},
};

pub struct AppOptions {
    /// Connection to an already migrated database
    pub db: DatabaseConnection,
    pub github: GitHubConfig,
    /// Start the cron scheduler
    pub background_tasks: bool,
    /// Wrap the router in a `TraceLayer` emitting a span per request
    pub request_tracing: bool,
}

pub struct App {
    router: Router,
    db: DatabaseConnection,
    scheduler: Option<JobScheduler>,
}

impl App {
    /// Build the router and start background jobs if enabled.
    ///
    /// # Returns
    /// - `Ok(App)` - Application ready to serve requests
    /// - `Err(Error::GitHubError)` - GitHub client configuration is invalid
    /// - `Err(Error::SchedulerError)` - Background jobs could not be started
    pub async fn build(options: AppOptions) -> Result<Self, Error> {
        let github = GitHubService::new(&options.github)?;

        let scheduler = if options.background_tasks {
            Some(Scheduler::new(options.db.clone()).await?.start().await?)
        } else {
            None
        };

        let mut router = router::routes().with_state(AppState {
            db: options.db.clone(),
            github,
        });
        if options.request_tracing {
            router = router.layer(TraceLayer::new_for_http());
        }

        Ok(Self {
            router,
            db: options.db,
            scheduler,
        })
    }

    /// Router with state applied, ready for `axum::serve` or in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Stop background jobs and close the database pool.
    ///
    /// Both steps are attempted; the first error is returned.
    pub async fn shutdown(self) -> Result<(), Error> {
        let scheduler_result = match self.scheduler {
            Some(mut scheduler) => scheduler.shutdown().await.map_err(Error::from),
            None => Ok(()),
        };

        let db_result = self.db.close().await.map_err(Error::from);

        tracing::debug!("Application shut down");

        scheduler_result.and(db_result)
    }
}
