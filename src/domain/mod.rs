//! Domain layer - Core business entities and logic
//!
//! Entities and value objects, independent of storage and transport.

pub mod job;
pub mod password;
pub mod user;

pub use job::{Job, NewJob};
pub use password::Password;
pub use user::{User, UserResponse};
