//! Job repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use super::entities::job::{self, ActiveModel, Entity as JobEntity};
use crate::domain::Job;

#[cfg(test)]
use mockall::automock;

/// Job repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job posting
    async fn create(&self, job: Job) -> Result<Job, DbErr>;

    /// List every posting in insertion order
    async fn list(&self) -> Result<Vec<Job>, DbErr>;
}

/// SeaORM-backed implementation of JobRepository
pub struct JobStore {
    db: DatabaseConnection,
}

impl JobStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobStore {
    async fn create(&self, job: Job) -> Result<Job, DbErr> {
        let skills = job
            .skills
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Invalid skills: {}", e)))?;

        let active_model = ActiveModel {
            id: Set(job.id),
            position: Set(job.position),
            company: Set(job.company),
            location: Set(job.location),
            work_type: Set(job.work_type),
            skills: Set(skills),
            education: Set(job.education),
            description: Set(job.description),
            vacancies: Set(job.vacancies),
            salary: Set(job.salary),
            expected_year: Set(job.expected_year),
            posted_time: Set(job.posted_time),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Job::from(model))
    }

    async fn list(&self) -> Result<Vec<Job>, DbErr> {
        let models = JobEntity::find()
            .order_by_asc(job::Column::CreatedAt)
            .order_by_asc(job::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Job::from).collect())
    }
}
