//! The navigable route set and the authorization gate.
//!
//! The gate is a pure, synchronous decision over already-loaded session
//! state: public routes are always allowed, everything else requires
//! authentication, and a denied navigation redirects to the login screen.
//! It is re-evaluated on every navigation and never cached.
//!
//! Role checks here are navigation-level only: they decide which links a
//! role is shown ([`visible_to`]) and where a role lands after login
//! ([`dashboard_for`]). They are not a security boundary; enforcement
//! lives in the backend.

mod route;

pub use route::Route;

use campus_types::Role;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Mount the requested screen.
    Allow,
    /// Navigate to the given route instead.
    Redirect(Route),
}

/// Decide whether a navigation to `route` may proceed.
///
/// Public routes are never blocked; protected routes require
/// authentication and otherwise redirect to login.
pub fn can_access(route: &Route, authenticated: bool) -> Decision {
    if route.is_public() || authenticated {
        Decision::Allow
    } else {
        Decision::Redirect(Route::Login)
    }
}

/// The landing screen for a role after login.
pub fn dashboard_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Instructor => Route::InstructorDashboard,
        Role::Student => Route::StudentDashboard,
    }
}

/// Whether a route belongs in the navigation shown to a role.
///
/// Public routes are visible to everyone. Dashboards and user management
/// are scoped to their role; authoring screens to instructors and admins;
/// enrollment, submission, and payment screens to students.
pub fn visible_to(route: &Route, role: Role) -> bool {
    if route.is_public() {
        return true;
    }
    match route {
        Route::UsersDetails | Route::AdminDashboard => role == Role::Admin,
        Route::InstructorDashboard => role == Role::Instructor,
        Route::StudentDashboard => role == Role::Student,

        Route::CreateCourse
        | Route::EditCourse { .. }
        | Route::CreateLesson { .. }
        | Route::EditLesson { .. }
        | Route::CreateAssignment { .. }
        | Route::CreateQuiz { .. }
        | Route::EditQuiz { .. }
        | Route::Submissions { .. }
        | Route::QuizSubmissions { .. }
        | Route::EnrollmentDetails
        | Route::EditEnrollment { .. } => role != Role::Student,

        Route::EnrollForm { .. }
        | Route::SubmitAssignment { .. }
        | Route::QuizSubmission { .. }
        | Route::Payment { .. }
        | Route::ProgressReport { .. } => role == Role::Student,

        // Content screens: anyone authenticated.
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_are_never_blocked() {
        for route in [
            Route::Home,
            Route::About,
            Route::Courses,
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::ResetPassword {
                token: "abc".to_string(),
            },
        ] {
            assert_eq!(can_access(&route, false), Decision::Allow);
            assert_eq!(can_access(&route, true), Decision::Allow);
        }
    }

    #[test]
    fn protected_routes_redirect_to_login_when_unauthenticated() {
        let route = Route::CourseDetails {
            course_id: "c-1".to_string(),
        };
        assert_eq!(can_access(&route, false), Decision::Redirect(Route::Login));
        assert_eq!(can_access(&route, true), Decision::Allow);
    }

    #[test]
    fn authentication_is_the_sole_access_boundary() {
        // A student navigating straight to an authoring screen is allowed
        // through the gate; role scoping only affects navigation links.
        let route = Route::CreateCourse;
        assert_eq!(can_access(&route, true), Decision::Allow);
        assert!(!visible_to(&route, Role::Student));
        assert!(visible_to(&route, Role::Instructor));
    }

    #[test]
    fn each_role_lands_on_its_dashboard() {
        assert_eq!(dashboard_for(Role::Admin), Route::AdminDashboard);
        assert_eq!(dashboard_for(Role::Instructor), Route::InstructorDashboard);
        assert_eq!(dashboard_for(Role::Student), Route::StudentDashboard);
    }

    #[test]
    fn dashboards_are_scoped_to_their_role() {
        assert!(visible_to(&Route::AdminDashboard, Role::Admin));
        assert!(!visible_to(&Route::AdminDashboard, Role::Instructor));
        assert!(!visible_to(&Route::StudentDashboard, Role::Admin));
    }

    #[test]
    fn student_screens_hidden_from_instructors() {
        let payment = Route::Payment {
            enrollment_id: "e-1".to_string(),
        };
        assert!(visible_to(&payment, Role::Student));
        assert!(!visible_to(&payment, Role::Instructor));
    }
}
