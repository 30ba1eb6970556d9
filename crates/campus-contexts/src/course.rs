//! Course catalog context.

use crate::context::ResourceContext;
use campus_api::{ApiClient, Attachment};
use campus_auth::SessionStore;
use campus_types::{Course, CoursePayload};
use std::sync::Arc;

/// The course collection and its operations.
pub struct CourseContext {
    inner: ResourceContext<Course>,
}

impl CourseContext {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            inner: ResourceContext::new(api, session),
        }
    }

    /// Fetch every course in the catalog.
    pub async fn fetch_all(&self) {
        self.inner.fetch_all_at("/apiCourses").await
    }

    /// Fetch one course and select it.
    pub async fn fetch_by_id(&self, course_id: &str) -> Option<Course> {
        self.inner
            .fetch_one_at(&format!("/apiCourses/{}", course_id))
            .await
    }

    /// Create a course, optionally with media uploads.
    ///
    /// The catalog is refetched after a successful create so server-computed
    /// fields (lesson counts, media URLs) come back filled in. The refetch
    /// runs under the protocol too, so the success message is cleared if it
    /// completes; its own failure is reported like any fetch failure.
    pub async fn create(&self, payload: &CoursePayload, media: Vec<Attachment>) -> Option<Course> {
        let created = self
            .inner
            .create_at(
                "/apiCourses",
                payload,
                media,
                "Course Created Successfully!",
                course_envelope,
            )
            .await;
        if created.is_some() {
            self.fetch_all().await;
        }
        created
    }

    /// Update a course in place.
    pub async fn update(
        &self,
        course_id: &str,
        payload: &CoursePayload,
        media: Vec<Attachment>,
    ) -> Option<Course> {
        self.inner
            .update_at(
                &format!("/apiCourses/{}", course_id),
                payload,
                media,
                "Course Updated Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Delete a course.
    pub async fn delete(&self, course_id: &str) -> bool {
        self.inner
            .delete_at(
                &format!("/apiCourses/{}", course_id),
                course_id,
                "Course Deleted Successfully!",
            )
            .await
    }

    pub fn courses(&self) -> Vec<Course> {
        self.inner.items()
    }

    pub fn current_course(&self) -> Option<Course> {
        self.inner.current()
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

/// The create endpoint answers with a `{ "course": ... }` envelope; other
/// course endpoints return the bare object.
fn course_envelope(value: serde_json::Value) -> serde_json::Result<Course> {
    let inner = match value {
        serde_json::Value::Object(mut map) => match map.remove("course") {
            Some(course) => course,
            None => serde_json::Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(inner)
}
