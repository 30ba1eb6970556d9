//! Session store: login, logout, and authentication state.

use crate::validate;
use crate::{AuthError, AuthResult};
use campus_api::{ApiClient, ApiError};
use campus_storage::SessionVault;
use campus_types::{Role, UserProfile};
use serde::{Deserialize, Serialize};

/// A snapshot of the authentication state.
///
/// The token alone decides authentication; the user object is advisory,
/// kept for display and role checks.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
    user: UserProfile,
}

#[derive(Serialize)]
struct ResetRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetConfirm<'a> {
    password: &'a str,
}

/// The single owned authority over the session.
///
/// Constructed once at startup and passed explicitly to every consumer;
/// nothing else reads or writes the token. Authentication checks go to the
/// vault on every call so storage-only mutations are observed.
pub struct SessionStore {
    api: ApiClient,
    vault: SessionVault,
}

impl SessionStore {
    /// Create a new session store over the given API client and vault.
    ///
    /// Any previously persisted session is picked up implicitly: the vault
    /// is the source of truth, so no explicit hydration step is needed.
    pub fn new(api: ApiClient, vault: SessionVault) -> Self {
        Self { api, vault }
    }

    /// Log in with email and password.
    ///
    /// On success the token and user profile are persisted to the vault.
    /// Invalid credentials surface as [`AuthError::InvalidCredentials`] with
    /// the server's message; connectivity failures as a network error.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<Session> {
        validate::login_input(credentials)?;

        tracing::debug!(email = %credentials.email, "Attempting login");

        let response: AuthResponse = self
            .api
            .post_json_public(
                "/apiUsers/login",
                &LoginRequest {
                    email: &credentials.email,
                    password: &credentials.password,
                },
            )
            .await
            .map_err(reject_credentials)?;

        self.persist(&response)?;
        tracing::info!(user_id = %response.user.id, "Login successful");

        Ok(Session {
            token: Some(response.token),
            user: Some(response.user),
        })
    }

    /// Register a new account.
    ///
    /// The backend issues a session on successful registration, which is
    /// persisted exactly as a login would be.
    pub async fn register(&self, payload: &RegisterPayload) -> AuthResult<Session> {
        validate::register_input(payload)?;

        tracing::debug!(email = %payload.email, "Registering account");

        let response: AuthResponse = self
            .api
            .post_json_public("/apiUsers/register", payload)
            .await?;

        self.persist(&response)?;
        tracing::info!(user_id = %response.user.id, "Registration successful");

        Ok(Session {
            token: Some(response.token),
            user: Some(response.user),
        })
    }

    /// Request a password-reset email.
    pub async fn request_password_reset(&self, email: &str) -> AuthResult<()> {
        validate::email(email)?;
        let _: serde_json::Value = self
            .api
            .post_json_public("/apiUsers/forgot-password", &ResetRequest { email })
            .await?;
        Ok(())
    }

    /// Complete a password reset with the emailed token.
    pub async fn confirm_password_reset(&self, token: &str, password: &str) -> AuthResult<()> {
        validate::password(password)?;
        let path = format!("/apiUsers/reset-password/{}", token);
        let _: serde_json::Value = self
            .api
            .post_json_public(&path, &ResetConfirm { password })
            .await?;
        Ok(())
    }

    /// Log out by clearing the persisted session. Idempotent.
    pub fn logout(&self) -> AuthResult<()> {
        self.vault.clear_session()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Whether a token is present in durable storage right now.
    ///
    /// Never cached: each call reads the vault, so a token cleared from
    /// storage outside this store is observed immediately.
    pub fn is_authenticated(&self) -> bool {
        self.vault.has_session().unwrap_or(false)
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.vault.get_token().ok().flatten()
    }

    /// The stored user profile, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.vault.get_user().ok().flatten()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        Session {
            token: self.token(),
            user: self.current_user(),
        }
    }

    /// Direct vault access, for wiring and tests.
    pub fn vault(&self) -> &SessionVault {
        &self.vault
    }

    fn persist(&self, response: &AuthResponse) -> AuthResult<()> {
        let logged_in_at = chrono::Utc::now().to_rfc3339();
        self.vault
            .set_session(&response.token, &response.user, &logged_in_at)?;
        Ok(())
    }
}

/// Map rejected login attempts onto the credentials error.
fn reject_credentials(err: ApiError) -> AuthError {
    match err {
        ApiError::Server {
            status: 400 | 401,
            message,
        } => AuthError::InvalidCredentials(message),
        other => AuthError::Api(other),
    }
}
