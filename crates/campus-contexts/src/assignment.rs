//! Assignment context: assignments plus their student submissions.
//!
//! Submissions are a second collection with its own request state, so a
//! failed upload does not clobber the assignment listing's outcome.

use crate::context::ResourceContext;
use campus_api::{ApiClient, Attachment};
use campus_auth::SessionStore;
use campus_types::{Assignment, AssignmentPayload, Submission, SubmissionPayload};
use std::sync::Arc;

pub struct AssignmentContext {
    inner: ResourceContext<Assignment>,
    submissions: ResourceContext<Submission>,
}

impl AssignmentContext {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            inner: ResourceContext::new(api.clone(), session.clone()),
            submissions: ResourceContext::new(api, session),
        }
    }

    /// Fetch all assignments of a course.
    pub async fn fetch_for_course(&self, course_id: &str) {
        self.inner
            .fetch_all_at(&format!("/apiAssignments/course/{}", course_id))
            .await
    }

    /// Fetch one assignment and select it.
    pub async fn fetch_by_id(&self, assignment_id: &str) -> Option<Assignment> {
        self.inner
            .fetch_one_at(&format!("/apiAssignments/{}", assignment_id))
            .await
    }

    /// Create an assignment under a course, optionally with media.
    pub async fn create(
        &self,
        course_id: &str,
        payload: &AssignmentPayload,
        media: Vec<Attachment>,
    ) -> Option<Assignment> {
        self.inner
            .create_at(
                &format!("/apiAssignments/{}", course_id),
                payload,
                media,
                "Assignment Created Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Update an assignment in place.
    pub async fn update(
        &self,
        assignment_id: &str,
        payload: &AssignmentPayload,
        media: Vec<Attachment>,
    ) -> Option<Assignment> {
        self.inner
            .update_at(
                &format!("/apiAssignments/{}", assignment_id),
                payload,
                media,
                "Assignment Updated Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Delete an assignment.
    pub async fn delete(&self, assignment_id: &str) -> bool {
        self.inner
            .delete_at(
                &format!("/apiAssignments/{}", assignment_id),
                assignment_id,
                "Assignment Deleted Successfully!",
            )
            .await
    }

    /// Fetch the submissions handed in for an assignment.
    pub async fn fetch_submissions(&self, assignment_id: &str) {
        self.submissions
            .fetch_all_at(&format!("/apiAssignments/{}/submissions", assignment_id))
            .await
    }

    /// Hand in a submission for an assignment, optionally with media.
    pub async fn submit(
        &self,
        assignment_id: &str,
        payload: &SubmissionPayload,
        media: Vec<Attachment>,
    ) -> Option<Submission> {
        self.submissions
            .create_at(
                &format!("/apiAssignments/{}/submissions", assignment_id),
                payload,
                media,
                "Submission Uploaded Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Withdraw a submission.
    pub async fn delete_submission(&self, submission_id: &str) -> bool {
        self.submissions
            .delete_at(
                &format!("/apiAssignments/submissions/{}", submission_id),
                submission_id,
                "Submission Deleted Successfully!",
            )
            .await
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        self.inner.items()
    }

    pub fn current_assignment(&self) -> Option<Assignment> {
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

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.items()
    }

    pub fn submissions_loading(&self) -> bool {
        self.submissions.loading()
    }

    pub fn submissions_error(&self) -> Option<String> {
        self.submissions.error()
    }

    pub fn submissions_message(&self) -> Option<String> {
        self.submissions.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{offline_api, session_with_token};
    use campus_types::Assignment;

    #[tokio::test]
    async fn submission_failure_does_not_touch_assignment_state() {
        let ctx = AssignmentContext::new(offline_api(), session_with_token());
        ctx.inner.with_state_mut(|state| {
            state.replace_all(vec![Assignment {
                id: "a-1".to_string(),
                title: "Essay".to_string(),
                description: String::new(),
                course: None,
                due_date: None,
                media: Vec::new(),
            }]);
            state.message = Some("Assignment Created Successfully!".to_string());
        });

        let payload = SubmissionPayload {
            content: "My essay".to_string(),
        };
        let submitted = ctx.submit("a-1", &payload, Vec::new()).await;

        assert!(submitted.is_none());
        // The failure lands on the submission collection only.
        assert_eq!(
            ctx.submissions_error().as_deref(),
            Some("No response from the server.")
        );
        assert_eq!(
            ctx.message().as_deref(),
            Some("Assignment Created Successfully!")
        );
        assert_eq!(ctx.assignments().len(), 1);
    }

    #[tokio::test]
    async fn both_collections_share_the_session() {
        let ctx = AssignmentContext::new(offline_api(), session_with_token());
        ctx.fetch_for_course("c-1").await;
        ctx.fetch_submissions("a-1").await;

        assert_eq!(ctx.error().as_deref(), Some("No response from the server."));
        assert_eq!(
            ctx.submissions_error().as_deref(),
            Some("No response from the server.")
        );
    }
}
