//! Shared request and response types.

pub mod cast;
mod response;

pub use response::MessageResponse;
