//! Scheduler for periodic background jobs.
//!
//! Jobs only run when the application is built with background tasks enabled; test hosts
//! leave them off so nothing touches the database between cases.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod config;
pub mod customer;

use self::{config::customer as customer_config, customer::report_customer_count};

/// Job scheduler for the application's background tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// # Returns
    /// - `Ok(JobScheduler)` - Running scheduler, to be shut down by the caller
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<JobScheduler, Error> {
        self.schedule_job(
            customer_config::COUNT_CRON_EXPRESSION,
            "customer count",
            report_customer_count,
        )
        .await?;

        self.sched.start().await?;

        Ok(self.sched)
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the count returned by `function`, or the error it failed
    /// with.
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db).await {
                        Ok(count) => tracing::info!("{}: {}", name, count),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
