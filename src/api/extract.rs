use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` extractor whose rejections render as an `ErrorResponse` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
