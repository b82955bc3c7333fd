//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories over the `users` and `jobs` tables

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{JobRepository, JobStore, UserRepository, UserStore};

#[cfg(test)]
pub use repositories::{MockJobRepository, MockUserRepository};
