//! Shared fixtures for context tests.
//!
//! The API client points at a port nothing listens on, so any request that
//! does go out resolves immediately as a network error.

use campus_api::ApiClient;
use campus_auth::SessionStore;
use campus_storage::{ClientStorage, SessionVault, StorageResult};
use campus_types::{Role, UserProfile};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory storage for testing.
struct MemoryStorage {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }
}

impl ClientStorage for MemoryStorage {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.lock().unwrap().get(key).cloned())
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        Ok(self.data.lock().unwrap().remove(key).is_some())
    }
}

pub(crate) fn offline_api() -> Arc<ApiClient> {
    // Port 9 (discard) is not listening; connections are refused immediately.
    Arc::new(ApiClient::new("http://127.0.0.1:9"))
}

pub(crate) fn session_without_token() -> Arc<SessionStore> {
    let vault = SessionVault::new(Box::new(MemoryStorage::new()));
    Arc::new(SessionStore::new(ApiClient::new("http://127.0.0.1:9"), vault))
}

pub(crate) fn session_with_token() -> Arc<SessionStore> {
    let store = session_without_token();
    let user = UserProfile {
        id: "u-1".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        role: Role::Student,
        enroll_status: None,
    };
    store
        .vault()
        .set_session("tok-123", &user, "2026-01-01T00:00:00Z")
        .unwrap();
    store
}
