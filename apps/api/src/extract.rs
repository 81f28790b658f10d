//! Request extractors shared by the API handlers.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejection is an `AppError`, so malformed bodies get the
/// same `{"error":{code,message}}` envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
