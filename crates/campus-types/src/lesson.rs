//! Lesson and progress types.

use serde::{Deserialize, Serialize};

/// A lesson within a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Owning course id.
    #[serde(default)]
    pub course: Option<String>,
    /// Ids of students who have completed this lesson.
    #[serde(default)]
    pub completed_by: Vec<String>,
}

/// Fields a client submits when creating or updating a lesson.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPayload {
    pub title: String,
    pub content: String,
}

/// Per-course completion summary returned by the progress endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    #[serde(default)]
    pub completed_lessons: u32,
    #[serde(default)]
    pub total_lessons: u32,
    #[serde(default)]
    pub percentage: f64,
}
