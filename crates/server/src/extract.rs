//! Request extractors that report schema violations as [`AppError`].
//!
//! Axum's stock `Json` and `Path` rejections answer with plain-text bodies
//! and assorted 4xx codes. These wrappers route every rejection through
//! `AppError::Validation` so clients always get a 422 with a `detail` field.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
