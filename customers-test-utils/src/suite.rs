//! Class and collection scoped fixtures.
//!
//! A [`Fixture`] is expensive shared infrastructure: it is initialized once, hands out
//! clients to any number of cases, and is disposed once after the last case. A [`Suite`]
//! is a named list of cases, the equivalent of a test class.
//!
//! - [`run_class`] gives one suite its own fixture.
//! - [`run_collection`] shares one fixture between several suites.
//!
//! The fixture is reset before every case, so cases never see rows left behind by an
//! earlier case and never have to clean up after themselves. Cases run one at a time, each
//! on its own task so a panicking assertion fails only that case. Disposal always runs,
//! whether or not cases failed.
//!
//! ```ignore
//! async fn lists_nothing(client: TestClient) -> Result<(), TestError> { ... }
//! async fn lists_created(client: TestClient) -> Result<(), TestError> { ... }
//!
//! #[tokio::test]
//! async fn get_all_customers() -> Result<(), TestError> {
//!     suite::run_class::<CustomerApiHost>(suite!("get_all", [lists_nothing, lists_created])).await
//! }
//! ```

use std::{fmt, future::Future, pin::Pin};

use async_trait::async_trait;

use crate::error::TestError;

pub type CaseFuture = Pin<Box<dyn Future<Output = Result<(), TestError>> + Send>>;

/// Shared infrastructure with an explicit asynchronous lifecycle.
#[async_trait]
pub trait Fixture: Sized + Send + Sync {
    /// Handle passed to each case; cheap to clone.
    type Client: Clone + Send + 'static;

    async fn initialize() -> Result<Self, TestError>;

    fn create_client(&self) -> Self::Client;

    /// Return shared state to its initial condition before a case runs.
    async fn reset(&self) -> Result<(), TestError>;

    /// Release every resource held by the fixture. Must attempt every release even when an
    /// earlier one fails, returning the first error.
    async fn dispose(self) -> Result<(), TestError>;
}

/// A named test case.
pub struct Case<C> {
    name: &'static str,
    run: Box<dyn Fn(C) -> CaseFuture + Send + Sync>,
}

impl<C> Case<C> {
    pub fn new<F, Fut>(name: &'static str, case: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), TestError>> + Send + 'static,
    {
        Self {
            name,
            run: Box::new(move |client| Box::pin(case(client))),
        }
    }
}

/// A named list of cases sharing one fixture.
pub struct Suite<C> {
    name: &'static str,
    cases: Vec<Case<C>>,
}

impl<C> Suite<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cases: Vec::new(),
        }
    }

    pub fn case<F, Fut>(mut self, name: &'static str, case: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), TestError>> + Send + 'static,
    {
        self.cases.push(Case::new(name, case));
        self
    }
}

/// Build a [`Suite`] from case functions, named after the functions themselves.
#[macro_export]
macro_rules! suite {
    ($name:expr, [$($case:ident),* $(,)?]) => {
        $crate::suite::Suite::new($name)$(.case(stringify!($case), $case))*
    };
}

/// A case that returned an error, panicked, or could not be prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub suite: &'static str,
    pub case: &'static str,
    pub message: String,
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}: {}", self.suite, self.case, self.message)
    }
}

/// Run one suite against a fixture of its own.
pub async fn run_class<F: Fixture>(suite: Suite<F::Client>) -> Result<(), TestError> {
    run_collection::<F>(vec![suite]).await
}

/// Run several suites against one shared fixture, initialized once and disposed once.
///
/// # Returns
/// - `Ok(())` - Every case passed and the fixture was disposed cleanly
/// - `Err(TestError::CasesFailed)` - One or more cases failed, or disposal failed after
///   cases had already failed; every failure is listed
/// - `Err(_)` - The fixture could not be initialized, or disposal failed after every case
///   passed
pub async fn run_collection<F: Fixture>(suites: Vec<Suite<F::Client>>) -> Result<(), TestError> {
    let fixture = F::initialize().await?;

    let mut failures = run_suites(&fixture, suites).await;

    match fixture.dispose().await {
        Ok(()) if failures.is_empty() => Ok(()),
        Ok(()) => Err(TestError::CasesFailed(failures)),
        Err(err) if failures.is_empty() => Err(err),
        Err(err) => {
            failures.push(CaseFailure {
                suite: "fixture",
                case: "dispose",
                message: err.to_string(),
            });
            Err(TestError::CasesFailed(failures))
        }
    }
}

async fn run_suites<F: Fixture>(fixture: &F, suites: Vec<Suite<F::Client>>) -> Vec<CaseFailure> {
    let client = fixture.create_client();
    let mut failures = Vec::new();

    for suite in suites {
        for case in suite.cases {
            let failure = |message: String| CaseFailure {
                suite: suite.name,
                case: case.name,
                message,
            };

            if let Err(err) = fixture.reset().await {
                failures.push(failure(format!("reset before case failed: {}", err)));
                continue;
            }

            match tokio::spawn((case.run)(client.clone())).await {
                Ok(Ok(())) => tracing::debug!(suite = suite.name, case = case.name, "passed"),
                Ok(Err(err)) => failures.push(failure(err.to_string())),
                Err(join_err) if join_err.is_panic() => {
                    failures.push(failure(panic_message(join_err.into_panic())))
                }
                Err(join_err) => failures.push(failure(join_err.to_string())),
            }
        }
    }

    failures
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "case panicked".to_string()
    }
}
