//! Course catalog types.

use serde::{Deserialize, Serialize};

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// User id of the owning instructor.
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Uploaded media file references.
    #[serde(default)]
    pub media: Vec<String>,
    /// Server-computed; reconciled by refetching after create.
    #[serde(default)]
    pub lesson_count: Option<u32>,
}

/// Fields a client submits when creating or updating a course.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}
