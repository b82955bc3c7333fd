//! HTTP request handlers.

pub mod account_handler;
pub mod job_handler;

pub use account_handler::account_routes;
pub use job_handler::job_routes;
