//! Domain data contexts for the Campus client.
//!
//! Each context owns one entity collection, a current selection, and the
//! request state for its operations. All five share one generic
//! [`ResourceContext`] for state handling and the operation protocol;
//! the domain modules add their endpoints and extensions on top.
//!
//! Operations never return errors to the caller: failures are normalized
//! into the context's `error` state, and the prior collection is left
//! intact.

mod assignment;
mod context;
mod course;
mod enrollment;
mod lesson;
mod quiz;
mod state;

#[cfg(test)]
mod testutil;

pub use assignment::AssignmentContext;
pub use context::ResourceContext;
pub use course::CourseContext;
pub use enrollment::EnrollmentContext;
pub use lesson::LessonContext;
pub use quiz::QuizContext;
pub use state::{Entity, ResourceState};
