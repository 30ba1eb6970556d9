//! Generic context: request state plus the shared operation protocol.
//!
//! Every operation follows the same sequence: clear the previous outcome,
//! raise the loading flag, check for a stored token, run the request, then
//! record either the mutation-plus-message or the normalized error. The
//! loading flag is lowered by a guard on every exit path.

use crate::state::{Entity, ResourceState};
use campus_api::{form_fields, ApiClient, ApiError, ApiResult, Attachment};
use campus_auth::SessionStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Lowers the loading flag when an operation resolves, on any path.
struct LoadingGuard<'a, T> {
    state: &'a Mutex<ResourceState<T>>,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.loading = false;
        }
    }
}

enum Verb {
    Post,
    Put,
}

/// One entity collection with its request state and operations.
///
/// Domain contexts wrap this and supply their endpoints. Operations never
/// bubble errors to the caller; failures land in the `error` slot and the
/// collection keeps its previous contents.
pub struct ResourceContext<T> {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    state: Mutex<ResourceState<T>>,
}

impl<T: Entity> ResourceContext<T> {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            state: Mutex::new(ResourceState::default()),
        }
    }

    /// Snapshot of the collection.
    pub fn items(&self) -> Vec<T> {
        self.state.lock().unwrap().items.clone()
    }

    /// The currently selected entity, if any.
    pub fn current(&self) -> Option<T> {
        self.state.lock().unwrap().current.clone()
    }

    /// Whether an operation is in flight.
    pub fn loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    /// The error message from the last resolved operation, if it failed.
    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    /// The success message from the last resolved mutation.
    pub fn message(&self) -> Option<String> {
        self.state.lock().unwrap().message.clone()
    }

    pub(crate) fn with_state_mut<R>(&self, f: impl FnOnce(&mut ResourceState<T>) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    /// Start an operation: clear stale outcomes, raise the loading flag.
    fn begin(&self) -> LoadingGuard<'_, T> {
        {
            let mut state = self.state.lock().unwrap();
            state.reset_messages();
            state.loading = true;
        }
        LoadingGuard { state: &self.state }
    }

    /// The stored token, or the local missing-token error. No request is
    /// sent when the token is absent.
    fn token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::MissingToken)
    }

    fn fail(&self, err: &ApiError) {
        tracing::warn!(error = %err, "Context operation failed");
        self.state.lock().unwrap().error = Some(err.to_string());
    }
}

impl<T: Entity + DeserializeOwned> ResourceContext<T> {
    /// Fetch the full listing and replace the collection.
    pub(crate) async fn fetch_all_at(&self, path: &str) {
        let _guard = self.begin();
        let token = match self.token() {
            Ok(token) => token,
            Err(err) => return self.fail(&err),
        };
        match self.api.get_json::<Vec<T>>(path, &token).await {
            Ok(items) => self.with_state_mut(|state| state.replace_all(items)),
            Err(err) => self.fail(&err),
        }
    }

    /// Fetch one entity and make it the current selection.
    pub(crate) async fn fetch_one_at(&self, path: &str) -> Option<T> {
        let _guard = self.begin();
        let token = match self.token() {
            Ok(token) => token,
            Err(err) => {
                self.fail(&err);
                return None;
            }
        };
        match self.api.get_json::<T>(path, &token).await {
            Ok(item) => {
                self.with_state_mut(|state| state.set_current(Some(item.clone())));
                Some(item)
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Create an entity and append it to the collection.
    ///
    /// `unwrap` extracts the entity from the response, since some endpoints
    /// answer with an envelope rather than the bare object.
    pub(crate) async fn create_at<P: Serialize>(
        &self,
        path: &str,
        payload: &P,
        attachments: Vec<Attachment>,
        success: &str,
        unwrap: fn(serde_json::Value) -> serde_json::Result<T>,
    ) -> Option<T> {
        self.mutate(Verb::Post, path, payload, attachments, success, unwrap, |state, item| {
            state.apply_created(item)
        })
        .await
    }

    /// Update an entity in place, preserving its position in the listing.
    pub(crate) async fn update_at<P: Serialize>(
        &self,
        path: &str,
        payload: &P,
        attachments: Vec<Attachment>,
        success: &str,
        unwrap: fn(serde_json::Value) -> serde_json::Result<T>,
    ) -> Option<T> {
        self.mutate(Verb::Put, path, payload, attachments, success, unwrap, |state, item| {
            state.apply_updated(item)
        })
        .await
    }

    /// Delete an entity and drop it from the collection.
    pub(crate) async fn delete_at(&self, path: &str, id: &str, success: &str) -> bool {
        let _guard = self.begin();
        let token = match self.token() {
            Ok(token) => token,
            Err(err) => {
                self.fail(&err);
                return false;
            }
        };
        match self.api.delete(path, &token).await {
            Ok(()) => {
                self.with_state_mut(|state| {
                    state.apply_deleted(id);
                    state.message = Some(success.to_string());
                });
                true
            }
            Err(err) => {
                self.fail(&err);
                false
            }
        }
    }

    async fn mutate<P: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        payload: &P,
        attachments: Vec<Attachment>,
        success: &str,
        unwrap: fn(serde_json::Value) -> serde_json::Result<T>,
        apply: fn(&mut ResourceState<T>, T),
    ) -> Option<T> {
        let _guard = self.begin();
        let token = match self.token() {
            Ok(token) => token,
            Err(err) => {
                self.fail(&err);
                return None;
            }
        };
        let response = self
            .send_mutation(verb, path, payload, attachments, &token)
            .await
            .and_then(|value| unwrap(value).map_err(ApiError::from));
        match response {
            Ok(item) => {
                self.with_state_mut(|state| {
                    apply(state, item.clone());
                    state.message = Some(success.to_string());
                });
                Some(item)
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// JSON when there are no attachments, multipart when there are.
    async fn send_mutation<P: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        payload: &P,
        attachments: Vec<Attachment>,
        token: &str,
    ) -> ApiResult<serde_json::Value> {
        if attachments.is_empty() {
            return match verb {
                Verb::Post => self.api.post_json(path, payload, token).await,
                Verb::Put => self.api.put_json(path, payload, token).await,
            };
        }
        let fields = form_fields(payload)?;
        match verb {
            Verb::Post => self.api.post_multipart(path, fields, attachments, token).await,
            Verb::Put => self.api.put_multipart(path, fields, attachments, token).await,
        }
    }

    /// GET under the operation protocol without touching the collection.
    ///
    /// For per-course aggregates and other side-channel reads.
    pub(crate) async fn get_extension<R: DeserializeOwned>(&self, path: &str) -> Option<R> {
        let _guard = self.begin();
        let token = match self.token() {
            Ok(token) => token,
            Err(err) => {
                self.fail(&err);
                return None;
            }
        };
        match self.api.get_json::<R>(path, &token).await {
            Ok(value) => Some(value),
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// POST under the operation protocol without touching the collection.
    pub(crate) async fn post_extension<R: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Option<R> {
        let _guard = self.begin();
        let token = match self.token() {
            Ok(token) => token,
            Err(err) => {
                self.fail(&err);
                return None;
            }
        };
        match self.api.post_json::<R, B>(path, body, &token).await {
            Ok(value) => Some(value),
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// DELETE under the operation protocol without touching the collection.
    pub(crate) async fn delete_extension(&self, path: &str) -> bool {
        let _guard = self.begin();
        let token = match self.token() {
            Ok(token) => token,
            Err(err) => {
                self.fail(&err);
                return false;
            }
        };
        match self.api.delete(path, &token).await {
            Ok(()) => true,
            Err(err) => {
                self.fail(&err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{offline_api, session_with_token, session_without_token};
    use campus_types::Course;

    fn sample(id: &str) -> Course {
        Course {
            id: id.to_string(),
            title: "Rust".to_string(),
            description: String::new(),
            instructor: None,
            category: None,
            price: None,
            media: Vec::new(),
            lesson_count: None,
        }
    }

    #[tokio::test]
    async fn missing_token_fails_locally() {
        let ctx: ResourceContext<Course> =
            ResourceContext::new(offline_api(), session_without_token());
        ctx.with_state_mut(|state| state.replace_all(vec![sample("c-1")]));

        ctx.fetch_all_at("/apiCourses").await;

        assert_eq!(
            ctx.error().as_deref(),
            Some("No token available. Please log in.")
        );
        assert!(!ctx.loading());
        // The collection is untouched by the failure.
        assert_eq!(ctx.items().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_server_reports_network_error() {
        let ctx: ResourceContext<Course> =
            ResourceContext::new(offline_api(), session_with_token());
        ctx.with_state_mut(|state| state.replace_all(vec![sample("c-1")]));

        ctx.fetch_all_at("/apiCourses").await;

        assert_eq!(ctx.error().as_deref(), Some("No response from the server."));
        assert!(!ctx.loading());
        assert_eq!(ctx.items().len(), 1);
    }

    #[tokio::test]
    async fn failed_create_returns_none_and_keeps_collection() {
        let ctx: ResourceContext<Course> =
            ResourceContext::new(offline_api(), session_with_token());
        ctx.with_state_mut(|state| state.replace_all(vec![sample("c-1")]));

        let created = ctx
            .create_at(
                "/apiCourses",
                &serde_json::json!({"title": "Tokio"}),
                Vec::new(),
                "Course Created Successfully!",
                serde_json::from_value,
            )
            .await;

        assert!(created.is_none());
        assert!(ctx.message().is_none());
        assert!(ctx.error().is_some());
        assert_eq!(ctx.items().len(), 1);
    }

    #[tokio::test]
    async fn new_operation_clears_previous_outcome() {
        let ctx: ResourceContext<Course> =
            ResourceContext::new(offline_api(), session_with_token());

        ctx.fetch_all_at("/apiCourses").await;
        assert!(ctx.error().is_some());

        // A token-less retry produces a different error, not the stale one.
        let ctx2: ResourceContext<Course> =
            ResourceContext::new(offline_api(), session_without_token());
        ctx2.with_state_mut(|state| {
            state.error = Some("No response from the server.".to_string())
        });
        ctx2.fetch_all_at("/apiCourses").await;
        assert_eq!(
            ctx2.error().as_deref(),
            Some("No token available. Please log in.")
        );
    }

    #[tokio::test]
    async fn failed_delete_keeps_entity() {
        let ctx: ResourceContext<Course> =
            ResourceContext::new(offline_api(), session_with_token());
        ctx.with_state_mut(|state| state.replace_all(vec![sample("c-1")]));

        let deleted = ctx
            .delete_at("/apiCourses/c-1", "c-1", "Course Deleted Successfully!")
            .await;

        assert!(!deleted);
        assert_eq!(ctx.items().len(), 1);
        assert!(ctx.error().is_some());
    }
}
