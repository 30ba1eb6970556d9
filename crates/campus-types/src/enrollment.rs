//! Enrollment types.

use serde::{Deserialize, Serialize};

/// A student's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Course id.
    pub course: String,
    /// Student user id.
    #[serde(default)]
    pub student: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
}

/// Fields a client submits when enrolling or editing an enrollment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
