//! Session management for the Campus client.
//!
//! This crate provides:
//! - [`SessionStore`], the single owned authority over the authentication
//!   token and user identity, backed by durable storage
//! - declarative credential validation run before any request is sent

mod error;
mod session;
mod validate;

pub use error::{AuthError, AuthResult};
pub use session::{Credentials, RegisterPayload, Session, SessionStore};
