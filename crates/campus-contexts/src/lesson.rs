//! Lesson context: per-course lessons, completion, and progress.

use crate::context::ResourceContext;
use campus_api::ApiClient;
use campus_auth::SessionStore;
use campus_types::{CourseProgress, Lesson, LessonPayload, UserProfile};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionUpdate<'a> {
    user_id: &'a str,
    completion_status: bool,
}

/// The lesson collection for the course currently being viewed.
pub struct LessonContext {
    inner: ResourceContext<Lesson>,
}

impl LessonContext {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            inner: ResourceContext::new(api, session),
        }
    }

    /// Fetch all lessons of a course, replacing the collection.
    pub async fn fetch_for_course(&self, course_id: &str) {
        self.inner
            .fetch_all_at(&format!("/apiLessons/lesson/course/{}", course_id))
            .await
    }

    /// Fetch one lesson and select it.
    pub async fn fetch_by_id(&self, lesson_id: &str) -> Option<Lesson> {
        self.inner
            .fetch_one_at(&format!("/apiLessons/lesson/{}", lesson_id))
            .await
    }

    /// Create a lesson under a course.
    pub async fn create(&self, course_id: &str, payload: &LessonPayload) -> Option<Lesson> {
        self.inner
            .create_at(
                &format!("/apiLessons/lesson/{}", course_id),
                payload,
                Vec::new(),
                "Lesson Created Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Update a lesson in place.
    pub async fn update(&self, lesson_id: &str, payload: &LessonPayload) -> Option<Lesson> {
        self.inner
            .update_at(
                &format!("/apiLessons/lesson/{}", lesson_id),
                payload,
                Vec::new(),
                "Lesson Updated Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Delete a lesson.
    pub async fn delete(&self, lesson_id: &str) -> bool {
        self.inner
            .delete_at(
                &format!("/apiLessons/lesson/{}", lesson_id),
                lesson_id,
                "Lesson Deleted Successfully!",
            )
            .await
    }

    /// Record or clear a student's completion of a lesson.
    pub async fn mark_completed(&self, lesson_id: &str, user_id: &str, completed: bool) -> bool {
        let body = CompletionUpdate {
            user_id,
            completion_status: completed,
        };
        self.inner
            .post_extension::<serde_json::Value, _>(
                &format!("/apiLessons/lesson/{}/complete", lesson_id),
                &body,
            )
            .await
            .is_some()
    }

    /// Fetch a student's completion progress across a course.
    pub async fn fetch_course_progress(&self, course_id: &str) -> Option<CourseProgress> {
        self.inner
            .get_extension(&format!("/apiLessons/course/{}/progress", course_id))
            .await
    }

    /// Fetch the students who completed a lesson.
    pub async fn fetch_completed_students(&self, lesson_id: &str) -> Option<Vec<UserProfile>> {
        self.inner
            .get_extension(&format!(
                "/apiLessons/lesson/{}/completed-students",
                lesson_id
            ))
            .await
    }

    pub fn lessons(&self) -> Vec<Lesson> {
        self.inner.items()
    }

    pub fn current_lesson(&self) -> Option<Lesson> {
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
