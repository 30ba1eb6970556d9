//! Quiz, question, and grading types.

use serde::{Deserialize, Serialize};

/// A quiz attached to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    /// Embedded on fetch-by-id responses only.
    #[serde(default)]
    pub submissions: Vec<QuizSubmission>,
}

/// A single quiz question with its choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Correct answer; present only in instructor-facing responses.
    #[serde(default)]
    pub answer: Option<String>,
}

/// A graded student submission for a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub student: Option<String>,
    #[serde(default)]
    pub score: f64,
}

/// Fields a client submits when creating or updating a quiz.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

/// Score returned by the grading endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    pub score: f64,
}
