//! HTTP plumbing for the Campus client.
//!
//! This crate provides:
//! - [`ApiClient`], a thin wrapper over `reqwest` for authenticated JSON
//!   and multipart calls against the remote API
//! - [`ApiError`], the shared error taxonomy every operation normalizes to
//! - [`Attachment`] and payload-to-form helpers for media uploads

mod client;
mod error;
mod multipart;

pub use client::ApiClient;
pub use error::{error_from_parts, ApiError, ApiResult};
pub use multipart::{form_fields, Attachment};
