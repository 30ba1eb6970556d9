//! Enrollment context.

use crate::context::ResourceContext;
use campus_api::ApiClient;
use campus_auth::SessionStore;
use campus_types::{Enrollment, EnrollmentPayload};
use std::sync::Arc;

/// The caller's enrollments. For students this is the courses they joined;
/// for instructors, the enrollments into their courses.
pub struct EnrollmentContext {
    inner: ResourceContext<Enrollment>,
}

impl EnrollmentContext {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            inner: ResourceContext::new(api, session),
        }
    }

    /// Fetch the enrollments visible to the caller. The backend scopes the
    /// listing by the token's role.
    pub async fn fetch_all(&self) {
        self.inner.fetch_all_at("/apiEnrollments").await
    }

    /// Enroll the caller in a course.
    pub async fn enroll(&self, course_id: &str, payload: &EnrollmentPayload) -> Option<Enrollment> {
        self.inner
            .create_at(
                &format!("/apiEnrollments/{}", course_id),
                payload,
                Vec::new(),
                "Enrolled Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Update an enrollment's status.
    pub async fn update(
        &self,
        enrollment_id: &str,
        payload: &EnrollmentPayload,
    ) -> Option<Enrollment> {
        self.inner
            .update_at(
                &format!("/apiEnrollments/{}", enrollment_id),
                payload,
                Vec::new(),
                "Enrollment Updated Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Drop an enrollment.
    pub async fn delete(&self, enrollment_id: &str) -> bool {
        self.inner
            .delete_at(
                &format!("/apiEnrollments/{}", enrollment_id),
                enrollment_id,
                "Enrollment Deleted Successfully!",
            )
            .await
    }

    pub fn enrollments(&self) -> Vec<Enrollment> {
        self.inner.items()
    }

    pub fn loading(&self) -> bool {
        self.inner.loading()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.error()
    }

    pub fn message(&self) -> Option<String> {
        self.inner.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{offline_api, session_without_token};

    #[tokio::test]
    async fn enroll_without_token_fails_locally() {
        let ctx = EnrollmentContext::new(offline_api(), session_without_token());
        let payload = EnrollmentPayload { status: None };

        let enrolled = ctx.enroll("c-1", &payload).await;

        assert!(enrolled.is_none());
        assert_eq!(
            ctx.error().as_deref(),
            Some("No token available. Please log in.")
        );
        assert!(ctx.enrollments().is_empty());
        assert!(!ctx.loading());
    }
}
