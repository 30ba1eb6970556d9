//! Shared entity and payload types for the Campus client.
//!
//! Records mirror what the backend returns: MongoDB-style `_id` identifiers
//! and camelCase field names on the wire.

mod assignment;
mod course;
mod enrollment;
mod lesson;
mod quiz;
mod user;

pub use assignment::{Assignment, AssignmentPayload, Submission, SubmissionPayload};
pub use course::{Course, CoursePayload};
pub use enrollment::{Enrollment, EnrollmentPayload};
pub use lesson::{CourseProgress, Lesson, LessonPayload};
pub use quiz::{Quiz, QuizPayload, QuizQuestion, QuizScore, QuizSubmission};
pub use user::{Role, UserProfile};
