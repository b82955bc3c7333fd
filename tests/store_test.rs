//! Repository and service tests against an in-memory SQLite store.

mod common;

use std::sync::Arc;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use job_board::domain::{NewJob, Password, User};
use job_board::errors::AppError;
use job_board::infra::{JobRepository, JobStore, UserRepository, UserStore};
use job_board::services::{AccountService, Accounts, JobBoard, JobService};

use common::test_database;

async fn accounts() -> (Accounts, Arc<UserStore>) {
    let db = test_database().await;
    let store = Arc::new(UserStore::new(db.get_connection()));
    (Accounts::new(store.clone()), store)
}

#[tokio::test]
async fn test_register_stores_exactly_one_hashed_record() {
    let (service, store) = accounts().await;

    service
        .register("Jane".into(), "jane@example.com".into(), "s3cret".into())
        .await
        .unwrap();

    let user = store
        .find_by_email("jane@example.com")
        .await
        .unwrap()
        .expect("registered user should be found");
    assert_eq!(user.name, "Jane");
    assert_ne!(user.password_hash, "s3cret");
    assert!(Password::from_hash(user.password_hash).verify("s3cret"));
}

#[tokio::test]
async fn test_duplicate_registration_keeps_single_record() {
    let db = test_database().await;
    let store = Arc::new(UserStore::new(db.get_connection()));
    let service = Accounts::new(store.clone());

    service
        .register("First".into(), "dup@example.com".into(), "one".into())
        .await
        .unwrap();
    let err = service
        .register("Second".into(), "dup@example.com".into(), "two".into())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let count = users_entity::Entity::find()
        .filter(users_entity::Column::Email.eq("dup@example.com"))
        .count(db.connection())
        .await
        .unwrap();
    assert_eq!(count, 1);

    let kept = store.find_by_email("dup@example.com").await.unwrap().unwrap();
    assert_eq!(kept.name, "First");
}

#[tokio::test]
async fn test_unique_index_rejects_duplicate_insert_as_conflict() {
    let (_, store) = accounts().await;

    store
        .create(User::new("A".into(), "race@example.com".into(), "h1".into()))
        .await
        .unwrap();

    // Second insert skips the service's lookup, as a racing request would
    let err = store
        .create(User::new("B".into(), "race@example.com".into(), "h2".into()))
        .await
        .unwrap_err();

    assert!(matches!(
        AppError::from_user_insert(err),
        AppError::Conflict(msg) if msg == "Email already registered."
    ));
}

#[tokio::test]
async fn test_register_with_missing_field_creates_nothing() {
    let db = test_database().await;
    let service = Accounts::new(Arc::new(UserStore::new(db.get_connection())));

    let err = service
        .register("".into(), "nobody@example.com".into(), "pw".into())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let count = users_entity::Entity::find()
        .count(db.connection())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_login_outcomes() {
    let (service, _) = accounts().await;
    service
        .register("Jane".into(), "jane@example.com".into(), "right".into())
        .await
        .unwrap();

    let user = service
        .login("jane@example.com".into(), "right".into())
        .await
        .unwrap();
    assert_eq!(user.email, "jane@example.com");

    let wrong = service
        .login("jane@example.com".into(), "wrong".into())
        .await
        .unwrap_err();
    assert!(matches!(wrong, AppError::InvalidCredentials));

    let unknown = service
        .login("ghost@example.com".into(), "right".into())
        .await
        .unwrap_err();
    assert!(matches!(unknown, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_posted_job_is_listed_with_exact_values() {
    let db = test_database().await;
    let service = JobBoard::new(Arc::new(JobStore::new(db.get_connection())));

    service
        .post_job(NewJob {
            position: Some("Engineer".into()),
            company: Some("Acme".into()),
            vacancies: Some(2.0),
            skills: Some(vec!["rust".into(), "sql".into()]),
            ..Default::default()
        })
        .await
        .unwrap();

    let jobs = service.list_jobs().await.unwrap();
    assert_eq!(jobs.len(), 1);

    let job = &jobs[0];
    assert_eq!(job.position.as_deref(), Some("Engineer"));
    assert_eq!(job.company.as_deref(), Some("Acme"));
    assert_eq!(job.vacancies, Some(2.0));
    assert_eq!(
        job.skills,
        Some(vec!["rust".to_string(), "sql".to_string()])
    );
    assert!(job.location.is_none());
    assert!(job.posted_time.is_none());
}

#[tokio::test]
async fn test_list_jobs_empty_store() {
    let db = test_database().await;
    let store = JobStore::new(db.get_connection());

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_jobs_returns_every_posting() {
    let db = test_database().await;
    let service = JobBoard::new(Arc::new(JobStore::new(db.get_connection())));

    for company in ["Acme", "Globex", "Initech"] {
        service
            .post_job(NewJob {
                company: Some(company.into()),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let mut companies: Vec<String> = service
        .list_jobs()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|job| job.company)
        .collect();
    companies.sort();
    assert_eq!(companies, vec!["Acme", "Globex", "Initech"]);
}

#[tokio::test]
async fn test_migration_status_reports_all_applied() {
    let db = test_database().await;

    let status = db.migration_status().await.unwrap();
    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
}

/// Minimal read-only view of the users table for counting rows.
mod users_entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub email: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
