//! Storage key constants.

/// Storage keys used by the client
pub struct StorageKeys;

impl StorageKeys {
    /// Authentication token (opaque string issued at login)
    pub const TOKEN: &'static str = "token";

    /// Authenticated user profile (JSON)
    pub const USER_PROFILE: &'static str = "user_profile";

    /// Session metadata (JSON)
    pub const SESSION_META: &'static str = "session_meta";
}
