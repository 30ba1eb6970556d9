//! High-level API for session persistence.

use crate::{ClientStorage, StorageKeys, StorageResult};
use campus_types::UserProfile;
use serde::{Deserialize, Serialize};

/// Session metadata persisted next to the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    /// User ID the session belongs to
    pub user_id: String,
    /// When the session was established (ISO timestamp)
    pub logged_in_at: String,
}

/// High-level API for storing and retrieving the session
pub struct SessionVault {
    storage: Box<dyn ClientStorage>,
}

impl SessionVault {
    /// Create a new vault with the given storage backend
    pub fn new(storage: Box<dyn ClientStorage>) -> Self {
        Self { storage }
    }

    /// Persist a full session: token, user profile, and metadata.
    pub fn set_session(
        &self,
        token: &str,
        user: &UserProfile,
        logged_in_at: &str,
    ) -> StorageResult<()> {
        self.storage.set(StorageKeys::TOKEN, token)?;
        self.storage
            .set(StorageKeys::USER_PROFILE, &serde_json::to_string(user)?)?;
        let meta = SessionMeta {
            user_id: user.id.clone(),
            logged_in_at: logged_in_at.to_string(),
        };
        self.storage
            .set(StorageKeys::SESSION_META, &serde_json::to_string(&meta)?)?;
        tracing::debug!(user_id = %user.id, "Session persisted");
        Ok(())
    }

    /// Retrieve the token, if present.
    pub fn get_token(&self) -> StorageResult<Option<String>> {
        self.storage.get(StorageKeys::TOKEN)
    }

    /// Whether a token is currently stored.
    ///
    /// Read from the backend on every call; authentication checks must see
    /// storage-only mutations (e.g. an expired entry cleared externally).
    pub fn has_session(&self) -> StorageResult<bool> {
        self.storage.has(StorageKeys::TOKEN)
    }

    /// Retrieve the persisted user profile, if present.
    pub fn get_user(&self) -> StorageResult<Option<UserProfile>> {
        match self.storage.get(StorageKeys::USER_PROFILE)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Retrieve the session metadata, if present.
    pub fn get_meta(&self) -> StorageResult<Option<SessionMeta>> {
        match self.storage.get(StorageKeys::SESSION_META)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Remove all session entries. Idempotent.
    pub fn clear_session(&self) -> StorageResult<()> {
        self.storage.delete(StorageKeys::TOKEN)?;
        self.storage.delete(StorageKeys::USER_PROFILE)?;
        self.storage.delete(StorageKeys::SESSION_META)?;
        Ok(())
    }
}
