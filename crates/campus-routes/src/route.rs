//! The fixed set of navigable routes.

/// A logical screen in the application.
///
/// Dynamic segments are carried as owned strings so a route value is
/// self-contained and can be stored or compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Public
    Home,
    About,
    Courses,
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: String },

    // Protected
    UsersDetails,
    AdminDashboard,
    InstructorDashboard,
    StudentDashboard,
    CourseDetails { course_id: String },
    CreateCourse,
    EditCourse { course_id: String },
    Enrollments,
    EnrollForm { course_id: String },
    EnrollmentDetails,
    EditEnrollment { enrollment_id: String },
    Lessons { course_id: String },
    CreateLesson { course_id: String },
    EditLesson { lesson_id: String },
    LessonDetails { lesson_id: String },
    Assignments { course_id: String },
    CreateAssignment { course_id: String },
    SubmitAssignment { assignment_id: String },
    Submissions { assignment_id: String },
    Quizzes { course_id: String },
    CreateQuiz { course_id: String },
    EditQuiz { quiz_id: String },
    QuizSubmission { quiz_id: String },
    QuizSubmissions { quiz_id: String },
    Payment { enrollment_id: String },
    ProgressReport { course_id: String },
}

impl Route {
    /// Whether the route is reachable without authentication.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Home
                | Route::About
                | Route::Courses
                | Route::Login
                | Route::Register
                | Route::ForgotPassword
                | Route::ResetPassword { .. }
        )
    }

    /// The URL path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword { token } => format!("/reset-password/{}", token),
            Route::UsersDetails => "/users-details".to_string(),
            Route::AdminDashboard => "/admin-dashboard".to_string(),
            Route::InstructorDashboard => "/instructor-dashboard".to_string(),
            Route::StudentDashboard => "/student-dashboard".to_string(),
            Route::CourseDetails { course_id } => format!("/courses/{}", course_id),
            Route::CreateCourse => "/create-course".to_string(),
            Route::EditCourse { course_id } => format!("/course-edit/{}", course_id),
            Route::Enrollments => "/enroll".to_string(),
            Route::EnrollForm { course_id } => format!("/enroll/{}", course_id),
            Route::EnrollmentDetails => "/enroll-details".to_string(),
            Route::EditEnrollment { enrollment_id } => format!("/enroll-edit/{}", enrollment_id),
            Route::Lessons { course_id } => format!("/lessons/{}", course_id),
            Route::CreateLesson { course_id } => format!("/create-lesson/{}", course_id),
            Route::EditLesson { lesson_id } => format!("/edit-lesson/{}", lesson_id),
            Route::LessonDetails { lesson_id } => format!("/lesson-detailed/{}", lesson_id),
            Route::Assignments { course_id } => format!("/assignments/{}", course_id),
            Route::CreateAssignment { course_id } => format!("/create-assignment/{}", course_id),
            Route::SubmitAssignment { assignment_id } => format!("/submit/{}", assignment_id),
            Route::Submissions { assignment_id } => format!("/submission-list/{}", assignment_id),
            Route::Quizzes { course_id } => format!("/quizzes/{}", course_id),
            Route::CreateQuiz { course_id } => format!("/create-quiz/{}", course_id),
            Route::EditQuiz { quiz_id } => format!("/quiz-edit/{}", quiz_id),
            Route::QuizSubmission { quiz_id } => format!("/quiz-submission/{}", quiz_id),
            Route::QuizSubmissions { quiz_id } => format!("/quiz-submission-list/{}", quiz_id),
            Route::Payment { enrollment_id } => format!("/payment/{}", enrollment_id),
            Route::ProgressReport { course_id } => format!("/progress-report/{}", course_id),
        }
    }

    /// Parse a URL path into a route. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.trim_start_matches('/').split('/').collect()
        };

        let route = match segments.as_slice() {
            [] | ["home"] => Route::Home,
            ["about"] => Route::About,
            ["courses"] => Route::Courses,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["reset-password", token] => Route::ResetPassword {
                token: token.to_string(),
            },
            ["users-details"] => Route::UsersDetails,
            ["admin-dashboard"] => Route::AdminDashboard,
            ["instructor-dashboard"] => Route::InstructorDashboard,
            ["student-dashboard"] => Route::StudentDashboard,
            ["courses", course_id] => Route::CourseDetails {
                course_id: course_id.to_string(),
            },
            ["create-course"] => Route::CreateCourse,
            ["course-edit", course_id] => Route::EditCourse {
                course_id: course_id.to_string(),
            },
            ["enroll"] => Route::Enrollments,
            ["enroll", course_id] => Route::EnrollForm {
                course_id: course_id.to_string(),
            },
            ["enroll-details"] => Route::EnrollmentDetails,
            ["enroll-edit", enrollment_id] => Route::EditEnrollment {
                enrollment_id: enrollment_id.to_string(),
            },
            ["lessons", course_id] => Route::Lessons {
                course_id: course_id.to_string(),
            },
            ["create-lesson", course_id] => Route::CreateLesson {
                course_id: course_id.to_string(),
            },
            ["edit-lesson", lesson_id] => Route::EditLesson {
                lesson_id: lesson_id.to_string(),
            },
            ["lesson-detailed", lesson_id] => Route::LessonDetails {
                lesson_id: lesson_id.to_string(),
            },
            ["assignments", course_id] => Route::Assignments {
                course_id: course_id.to_string(),
            },
            ["create-assignment", course_id] => Route::CreateAssignment {
                course_id: course_id.to_string(),
            },
            ["submit", assignment_id] => Route::SubmitAssignment {
                assignment_id: assignment_id.to_string(),
            },
            ["submission-list", assignment_id] => Route::Submissions {
                assignment_id: assignment_id.to_string(),
            },
            ["quizzes", course_id] => Route::Quizzes {
                course_id: course_id.to_string(),
            },
            ["create-quiz", course_id] => Route::CreateQuiz {
                course_id: course_id.to_string(),
            },
            ["quiz-edit", quiz_id] => Route::EditQuiz {
                quiz_id: quiz_id.to_string(),
            },
            ["quiz-submission", quiz_id] => Route::QuizSubmission {
                quiz_id: quiz_id.to_string(),
            },
            ["quiz-submission-list", quiz_id] => Route::QuizSubmissions {
                quiz_id: quiz_id.to_string(),
            },
            ["payment", enrollment_id] => Route::Payment {
                enrollment_id: enrollment_id.to_string(),
            },
            ["progress-report", course_id] => Route::ProgressReport {
                course_id: course_id.to_string(),
            },
            _ => return None,
        };
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Home,
            Route::Courses,
            Route::CourseDetails {
                course_id: "c-1".to_string(),
            },
            Route::EnrollForm {
                course_id: "c-1".to_string(),
            },
            Route::Enrollments,
            Route::QuizSubmissions {
                quiz_id: "q-1".to_string(),
            },
            Route::ResetPassword {
                token: "tok".to_string(),
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()), "{:?}", route);
        }
    }

    #[test]
    fn course_listing_and_detail_are_distinct() {
        assert_eq!(Route::parse("/courses"), Some(Route::Courses));
        assert_eq!(
            Route::parse("/courses/abc"),
            Some(Route::CourseDetails {
                course_id: "abc".to_string()
            })
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/login/"), Some(Route::Login));
        assert_eq!(Route::parse("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_yield_none() {
        assert_eq!(Route::parse("/no-such-screen"), None);
        assert_eq!(Route::parse("/courses/a/b"), None);
    }
}
