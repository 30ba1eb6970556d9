//! Declarative input validation for auth submissions.
//!
//! Failures here are local: the request is never sent.

use crate::{Credentials, RegisterPayload};
use campus_api::ApiError;

const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn login_input(credentials: &Credentials) -> Result<(), ApiError> {
    email(&credentials.email)?;
    if credentials.password.is_empty() {
        return Err(ApiError::Validation("Password is required.".to_string()));
    }
    Ok(())
}

pub(crate) fn register_input(payload: &RegisterPayload) -> Result<(), ApiError> {
    if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
        return Err(ApiError::Validation(
            "First and last name are required.".to_string(),
        ));
    }
    email(&payload.email)?;
    password(&payload.password)
}

pub(crate) fn email(value: &str) -> Result<(), ApiError> {
    let well_formed = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !well_formed {
        return Err(ApiError::Validation(
            "A valid email address is required.".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn password(value: &str) -> Result<(), ApiError> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_email() {
        assert!(email("a@b.com").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(email("").is_err());
        assert!(email("no-at-sign").is_err());
        assert!(email("@missing-local.com").is_err());
        assert!(email("user@nodot").is_err());
    }

    #[test]
    fn rejects_short_password() {
        assert!(password("abc").is_err());
        assert!(password("password1").is_ok());
    }
}
