//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits, not on the store itself.

mod account_service;
mod job_service;

pub use account_service::{AccountService, Accounts};
pub use job_service::{JobBoard, JobService};
