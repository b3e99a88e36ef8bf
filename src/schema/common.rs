use poem_openapi::Object;
use serde::Deserialize;

#[derive(Object, Deserialize)]
pub struct BadRequestResponse {
    pub message: String,
}

#[derive(Object, Deserialize)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Object, Deserialize)]
pub struct ConflictResponse {
    pub message: String,
}

#[derive(Object, Deserialize)]
pub struct UnauthorizedResponse {
    pub message: String,
}

impl Default for UnauthorizedResponse {
    fn default() -> Self {
        Self {
            message: "invalid or missing bearer token".to_string(),
        }
    }
}

#[derive(Object, Deserialize)]
pub struct InternalServerErrorResponse {
    pub message: String,
}

impl InternalServerErrorResponse {
    /// Logs the failing step, the client only sees a generic message.
    pub fn new(module: &str, function: &str, step: &str, err: &str) -> Self {
        tracing::error!("{}.{} failed at {}: {}", module, function, step, err);
        Self {
            message: "internal server error".to_string(),
        }
    }
}
