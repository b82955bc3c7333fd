//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{account_handler, job_handler};
use crate::domain::{Job, NewJob, UserResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Job Board API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Board API",
        version = "0.1.0",
        description = "Account registration/login and job postings",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:10000", description = "Local development server")
    ),
    paths(
        account_handler::register,
        account_handler::login,
        job_handler::post_job,
        job_handler::list_jobs,
    ),
    components(
        schemas(
            UserResponse,
            Job,
            NewJob,
            MessageResponse,
            account_handler::RegisterRequest,
            account_handler::LoginRequest,
            account_handler::LoginResponse,
        )
    ),
    tags(
        (name = "Accounts", description = "User registration and login"),
        (name = "Jobs", description = "Job postings")
    )
)]
pub struct ApiDoc;
