//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, JobStore, UserStore};
use crate::services::{AccountService, Accounts, JobBoard, JobService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountService>,
    pub job_service: Arc<dyn JobService>,
    pub database: Arc<Database>,
    pub config: Config,
}

impl AppState {
    /// Wire the store-backed services over an open database.
    pub fn from_database(database: Arc<Database>, config: Config) -> Self {
        let connection = database.get_connection();
        let account_service = Arc::new(Accounts::new(Arc::new(UserStore::new(
            connection.clone(),
        ))));
        let job_service = Arc::new(JobBoard::new(Arc::new(JobStore::new(connection))));

        Self::new(account_service, job_service, database, config)
    }

    /// Create application state with manually injected services.
    pub fn new(
        account_service: Arc<dyn AccountService>,
        job_service: Arc<dyn JobService>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            account_service,
            job_service,
            database,
            config,
        }
    }
}
