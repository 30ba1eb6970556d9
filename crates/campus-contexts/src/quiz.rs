//! Quiz context: quizzes, grading, and submission aggregates.
//!
//! Beyond the usual collection this context tracks a few aggregates the
//! quiz endpoints return out of band: the course-wide quiz count, the
//! student's running grade, and the submissions of the selected quiz.

use crate::context::ResourceContext;
use campus_api::ApiClient;
use campus_auth::SessionStore;
use campus_types::{Quiz, QuizPayload, QuizScore, QuizSubmission};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct QuizExtras {
    total_count: u64,
    total_grade: f64,
    submissions: Vec<QuizSubmission>,
}

#[derive(Deserialize)]
struct QuizListResponse {
    #[serde(default)]
    quizzes: Vec<Quiz>,
    #[serde(default)]
    count: u64,
}

#[derive(Deserialize)]
struct QuizItemResponse {
    quiz: Quiz,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalGradeResponse {
    #[serde(default)]
    total_grade: f64,
}

#[derive(Serialize)]
struct GradeRequest<'a> {
    answers: &'a serde_json::Value,
}

/// The quiz collection for the course currently being viewed.
pub struct QuizContext {
    inner: ResourceContext<Quiz>,
    extras: Mutex<QuizExtras>,
}

impl QuizContext {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            inner: ResourceContext::new(api, session),
            extras: Mutex::new(QuizExtras::default()),
        }
    }

    /// Fetch all quizzes of a course. The listing arrives in an envelope
    /// that also carries the total count.
    pub async fn fetch_for_course(&self, course_id: &str) {
        let path = format!("/apiQuizzes/course/{}", course_id);
        if let Some(response) = self.inner.get_extension::<QuizListResponse>(&path).await {
            self.inner
                .with_state_mut(|state| state.replace_all(response.quizzes));
            self.extras.lock().unwrap().total_count = response.count;
        }
    }

    /// Fetch one quiz and select it. The item envelope embeds the quiz's
    /// submissions, which are kept alongside the selection.
    pub async fn fetch_by_id(&self, quiz_id: &str) -> Option<Quiz> {
        let path = format!("/apiQuizzes/{}", quiz_id);
        match self.inner.get_extension::<QuizItemResponse>(&path).await {
            Some(response) => {
                let quiz = response.quiz;
                self.extras.lock().unwrap().submissions = quiz.submissions.clone();
                self.inner
                    .with_state_mut(|state| state.set_current(Some(quiz.clone())));
                Some(quiz)
            }
            None => {
                // A failed load clears the selection rather than showing
                // a stale quiz.
                self.inner.with_state_mut(|state| state.set_current(None));
                self.extras.lock().unwrap().submissions.clear();
                None
            }
        }
    }

    /// Create a quiz under a course.
    pub async fn create(&self, course_id: &str, payload: &QuizPayload) -> Option<Quiz> {
        self.inner
            .create_at(
                &format!("/apiQuizzes/{}", course_id),
                payload,
                Vec::new(),
                "Quiz Created Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Update a quiz in place.
    pub async fn update(&self, quiz_id: &str, payload: &QuizPayload) -> Option<Quiz> {
        self.inner
            .update_at(
                &format!("/apiQuizzes/{}", quiz_id),
                payload,
                Vec::new(),
                "Quiz Updated Successfully!",
                serde_json::from_value,
            )
            .await
    }

    /// Delete a quiz.
    pub async fn delete(&self, quiz_id: &str) -> bool {
        self.inner
            .delete_at(
                &format!("/apiQuizzes/{}", quiz_id),
                quiz_id,
                "Quiz Deleted Successfully!",
            )
            .await
    }

    /// Submit a student's answers for grading.
    ///
    /// Answers are keyed by question, in whatever shape the quiz was
    /// authored with; the backend grades and answers with the score.
    pub async fn submit_answers(
        &self,
        quiz_id: &str,
        answers: &serde_json::Value,
    ) -> Option<QuizScore> {
        let path = format!("/apiQuizzes/{}/grade", quiz_id);
        let score = self
            .inner
            .post_extension::<QuizScore, _>(&path, &GradeRequest { answers })
            .await;
        if let Some(score) = &score {
            self.extras.lock().unwrap().total_grade = score.score;
        }
        score
    }

    /// Fetch the student's accumulated grade across a course's quizzes.
    ///
    /// A failed fetch resets the grade to zero instead of keeping a stale
    /// figure.
    pub async fn fetch_total_grade(&self, course_id: &str) {
        let path = format!("/apiQuizzes/totalGrade/{}", course_id);
        let grade = self
            .inner
            .get_extension::<TotalGradeResponse>(&path)
            .await
            .map(|response| response.total_grade)
            .unwrap_or(0.0);
        self.extras.lock().unwrap().total_grade = grade;
    }

    /// Delete one quiz submission, allowing a retake.
    pub async fn delete_submission(&self, submission_id: &str) -> bool {
        let path = format!("/apiQuizzes/submissions/{}", submission_id);
        if self.inner.delete_extension(&path).await {
            self.extras
                .lock()
                .unwrap()
                .submissions
                .retain(|s| s.id != submission_id);
            true
        } else {
            false
        }
    }

    pub fn quizzes(&self) -> Vec<Quiz> {
        self.inner.items()
    }

    pub fn current_quiz(&self) -> Option<Quiz> {
        self.inner.current()
    }

    /// Total quiz count reported by the course listing.
    pub fn total_count(&self) -> u64 {
        self.extras.lock().unwrap().total_count
    }

    /// The student's grade as last reported by the backend.
    pub fn total_grade(&self) -> f64 {
        self.extras.lock().unwrap().total_grade
    }

    /// Submissions of the currently selected quiz.
    pub fn submissions(&self) -> Vec<QuizSubmission> {
        self.extras.lock().unwrap().submissions.clone()
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
    use crate::testutil::{offline_api, session_with_token};

    #[test]
    fn list_envelope_decodes_quizzes_and_count() {
        let response: QuizListResponse = serde_json::from_value(serde_json::json!({
            "quizzes": [{"_id": "q-1", "title": "Week 1"}],
            "count": 7
        }))
        .unwrap();
        assert_eq!(response.quizzes.len(), 1);
        assert_eq!(response.quizzes[0].id, "q-1");
        assert_eq!(response.count, 7);
    }

    #[test]
    fn list_envelope_tolerates_missing_fields() {
        let response: QuizListResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.quizzes.is_empty());
        assert_eq!(response.count, 0);
    }

    #[test]
    fn grade_request_wire_shape() {
        let answers = serde_json::json!({"0": "B", "1": "D"});
        let body = GradeRequest { answers: &answers };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"answers": {"0": "B", "1": "D"}})
        );
    }

    #[tokio::test]
    async fn failed_total_grade_fetch_resets_to_zero() {
        let ctx = QuizContext::new(offline_api(), session_with_token());
        {
            ctx.extras.lock().unwrap().total_grade = 87.5;
        }

        ctx.fetch_total_grade("c-1").await;

        assert_eq!(ctx.total_grade(), 0.0);
        assert_eq!(ctx.error().as_deref(), Some("No response from the server."));
    }

    #[tokio::test]
    async fn failed_item_fetch_clears_the_selection() {
        let ctx = QuizContext::new(offline_api(), session_with_token());
        ctx.inner.with_state_mut(|state| {
            state.set_current(Some(Quiz {
                id: "q-1".to_string(),
                title: "Week 1".to_string(),
                course: None,
                questions: Vec::new(),
                submissions: Vec::new(),
            }))
        });

        assert!(ctx.fetch_by_id("q-1").await.is_none());
        assert!(ctx.current_quiz().is_none());
        assert!(ctx.submissions().is_empty());
    }
}
