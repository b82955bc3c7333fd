//! Job catalog service - posting and listing jobs.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{CTX_LIST_JOBS, CTX_POST_JOB};
use crate::domain::{Job, NewJob};
use crate::errors::{AppResult, StoreContext};
use crate::infra::JobRepository;

/// Job catalog service trait for dependency injection.
#[async_trait]
pub trait JobService: Send + Sync {
    /// Store a posting exactly as supplied
    async fn post_job(&self, new_job: NewJob) -> AppResult<Job>;

    /// Every posting, unfiltered
    async fn list_jobs(&self) -> AppResult<Vec<Job>>;
}

/// Concrete implementation of JobService over a job repository.
pub struct JobBoard {
    jobs: Arc<dyn JobRepository>,
}

impl JobBoard {
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl JobService for JobBoard {
    async fn post_job(&self, new_job: NewJob) -> AppResult<Job> {
        let job = self
            .jobs
            .create(Job::from_new(Uuid::new_v4(), new_job))
            .await
            .store_context(CTX_POST_JOB)?;

        tracing::info!(job_id = %job.id, "Job posted");
        Ok(job)
    }

    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        self.jobs.list().await.store_context(CTX_LIST_JOBS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockJobRepository;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn test_post_job_passes_fields_through() {
        let mut repo = MockJobRepository::new();
        repo.expect_create()
            .withf(|job| {
                job.position.as_deref() == Some("Engineer")
                    && job.company.as_deref() == Some("Acme")
                    && job.vacancies == Some(2.0)
                    && job.location.is_none()
            })
            .times(1)
            .returning(Ok);

        let job = JobBoard::new(Arc::new(repo))
            .post_job(NewJob {
                position: Some("Engineer".into()),
                company: Some("Acme".into()),
                vacancies: Some(2.0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(job.company.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_post_job_store_failure() {
        let mut repo = MockJobRepository::new();
        repo.expect_create()
            .returning(|_| Err(DbErr::Custom("write rejected".into())));

        let err = JobBoard::new(Arc::new(repo))
            .post_job(NewJob::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Store { context, .. } if context == CTX_POST_JOB));
    }

    #[tokio::test]
    async fn test_list_jobs_empty() {
        let mut repo = MockJobRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let jobs = JobBoard::new(Arc::new(repo)).list_jobs().await.unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_list_jobs_store_failure() {
        let mut repo = MockJobRepository::new();
        repo.expect_list()
            .returning(|| Err(DbErr::Custom("read timeout".into())));

        let err = JobBoard::new(Arc::new(repo)).list_jobs().await.unwrap_err();
        assert!(matches!(err, AppError::Store { context, .. } if context == CTX_LIST_JOBS));
    }
}
