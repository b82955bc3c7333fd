//! Job posting entity.
//!
//! Every attribute of a posting is optional; the board stores whatever
//! subset the poster supplies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::types::cast;

/// Attributes supplied when posting a job
///
/// Values are cast to each field's type the way the store would: numbers
/// and booleans become text, numeric strings become numbers, a lone tag
/// becomes a one-element list. A value that cannot be cast fails decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[serde(default, deserialize_with = "cast::text")]
    #[schema(example = "Backend Engineer")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "cast::text")]
    #[schema(example = "Acme")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "cast::text")]
    #[schema(example = "Remote")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "cast::text")]
    #[schema(example = "Full-time")]
    pub work_type: Option<String>,
    #[serde(default, deserialize_with = "cast::tags")]
    #[schema(example = json!(["rust", "postgres"]))]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "cast::text")]
    #[schema(example = "B.Sc. Computer Science")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "cast::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "cast::number")]
    #[schema(example = 2)]
    pub vacancies: Option<f64>,
    #[serde(default, deserialize_with = "cast::text")]
    #[schema(example = "80k-100k")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "cast::number")]
    #[schema(example = 2025)]
    pub expected_year: Option<f64>,
    /// RFC 3339, `YYYY-MM-DD`, or epoch milliseconds
    #[serde(default, deserialize_with = "cast::timestamp")]
    pub posted_time: Option<DateTime<Utc>>,
}

/// Stored job posting
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub work_type: Option<String>,
    pub skills: Option<Vec<String>>,
    pub education: Option<String>,
    pub description: Option<String>,
    pub vacancies: Option<f64>,
    pub salary: Option<String>,
    pub expected_year: Option<f64>,
    pub posted_time: Option<DateTime<Utc>>,
}

impl Job {
    /// Build a job record from posted attributes with a fresh id
    pub fn from_new(id: Uuid, new: NewJob) -> Self {
        Self {
            id,
            position: new.position,
            company: new.company,
            location: new.location,
            work_type: new.work_type,
            skills: new.skills,
            education: new.education,
            description: new.description,
            vacancies: new.vacancies,
            salary: new.salary,
            expected_year: new.expected_year,
            posted_time: new.posted_time,
        }
    }
}
