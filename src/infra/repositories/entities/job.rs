//! Job database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Job;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub work_type: Option<String>,
    /// JSON array of skill tags
    pub skills: Option<Json>,
    pub education: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub vacancies: Option<f64>,
    pub salary: Option<String>,
    pub expected_year: Option<f64>,
    pub posted_time: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Job {
    fn from(model: Model) -> Self {
        Job {
            id: model.id,
            position: model.position,
            company: model.company,
            location: model.location,
            work_type: model.work_type,
            // Anything other than an array of strings reads back as absent
            skills: model
                .skills
                .and_then(|value| serde_json::from_value(value).ok()),
            education: model.education,
            description: model.description,
            vacancies: model.vacancies,
            salary: model.salary,
            expected_year: model.expected_year,
            posted_time: model.posted_time,
        }
    }
}
