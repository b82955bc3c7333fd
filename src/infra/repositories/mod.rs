//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod job_repository;
mod user_repository;

pub use job_repository::{JobRepository, JobStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
