//! Command handlers over the session store and contexts.

use anyhow::bail;
use campus_api::ApiClient;
use campus_auth::{Credentials, SessionStore};
use campus_config_and_utils::{Config, Paths};
use campus_contexts::{CourseContext, EnrollmentContext, LessonContext};
use campus_routes::dashboard_for;
use campus_storage::{FileStorage, SessionVault};
use campus_types::EnrollmentPayload;
use std::sync::Arc;

/// Wired-up client: one API client and one session store, shared by every
/// context a command builds.
pub struct App {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl App {
    /// Open the session file and wire the client together.
    pub fn open(config: &Config, paths: &Paths) -> anyhow::Result<Self> {
        paths.ensure_dirs()?;
        tracing::debug!(base_dir = %paths.base_dir().display(), "Opening client");
        let storage = FileStorage::open(paths.storage_file())?;
        let vault = SessionVault::new(Box::new(storage));
        let api = Arc::new(ApiClient::new(&config.api_base_url));
        let session = Arc::new(SessionStore::new(
            ApiClient::new(&config.api_base_url),
            vault,
        ));
        Ok(Self { api, session })
    }

    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<()> {
        let session = self
            .session
            .login(&Credentials {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        if let Some(user) = session.user {
            println!("Logged in as {} ({})", user.full_name(), user.role.as_str());
            println!("Landing page: {}", dashboard_for(user.role).path());
        }
        Ok(())
    }

    pub fn logout(&self) -> anyhow::Result<()> {
        self.session.logout()?;
        println!("Logged out.");
        Ok(())
    }

    pub fn status(&self) -> anyhow::Result<()> {
        if !self.session.is_authenticated() {
            println!("Not logged in.");
            return Ok(());
        }
        match self.session.current_user() {
            Some(user) => {
                println!("Logged in as {} <{}>", user.full_name(), user.email);
                println!("Role: {}", user.role.as_str());
            }
            None => println!("Logged in (no profile stored)."),
        }
        if let Some(meta) = self.session.vault().get_meta()? {
            println!("Since: {}", meta.logged_in_at);
        }
        Ok(())
    }

    pub async fn list_courses(&self) -> anyhow::Result<()> {
        let courses = CourseContext::new(self.api.clone(), self.session.clone());
        courses.fetch_all().await;
        if let Some(err) = courses.error() {
            bail!(err);
        }

        let listing = courses.courses();
        if listing.is_empty() {
            println!("No courses.");
            return Ok(());
        }
        for course in listing {
            match course.lesson_count {
                Some(count) => println!("{}  {} ({} lessons)", course.id, course.title, count),
                None => println!("{}  {}", course.id, course.title),
            }
        }
        Ok(())
    }

    pub async fn show_course(&self, course_id: &str) -> anyhow::Result<()> {
        let courses = CourseContext::new(self.api.clone(), self.session.clone());
        let Some(course) = courses.fetch_by_id(course_id).await else {
            bail!(courses
                .error()
                .unwrap_or_else(|| "Course not found.".to_string()));
        };

        println!("{}", course.title);
        if !course.description.is_empty() {
            println!("{}", course.description);
        }
        if let Some(price) = course.price {
            println!("Price: {}", price);
        }

        let lessons = LessonContext::new(self.api.clone(), self.session.clone());
        lessons.fetch_for_course(course_id).await;
        if let Some(err) = lessons.error() {
            bail!(err);
        }
        for (index, lesson) in lessons.lessons().iter().enumerate() {
            println!("  {}. {}", index + 1, lesson.title);
        }
        Ok(())
    }

    pub async fn list_enrollments(&self) -> anyhow::Result<()> {
        let enrollments = EnrollmentContext::new(self.api.clone(), self.session.clone());
        enrollments.fetch_all().await;
        if let Some(err) = enrollments.error() {
            bail!(err);
        }

        let listing = enrollments.enrollments();
        if listing.is_empty() {
            println!("No enrollments.");
            return Ok(());
        }
        for enrollment in listing {
            let status = enrollment.status.as_deref().unwrap_or("unknown");
            println!("{}  course {}  [{}]", enrollment.id, enrollment.course, status);
        }
        Ok(())
    }

    pub async fn enroll(&self, course_id: &str) -> anyhow::Result<()> {
        let enrollments = EnrollmentContext::new(self.api.clone(), self.session.clone());
        let payload = EnrollmentPayload { status: None };
        match enrollments.enroll(course_id, &payload).await {
            Some(enrollment) => {
                println!(
                    "{}",
                    enrollments
                        .message()
                        .unwrap_or_else(|| "Enrolled Successfully!".to_string())
                );
                if let Some(status) = enrollment.payment_status {
                    println!("Payment status: {}", status);
                }
                Ok(())
            }
            None => bail!(enrollments
                .error()
                .unwrap_or_else(|| "An error occurred.".to_string())),
        }
    }
}
