//! Campus client command-line interface.

mod app;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use campus_config_and_utils::{init_logging, Config, Paths};

/// Campus command-line interface.
#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Command-line client for the Campus e-learning API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Base directory for config and session files. Defaults to ~/.campus
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// API base URL override
    #[arg(long, global = true, env = "CAMPUS_API_URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long, env = "CAMPUS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current session
    Status,
    /// Course catalog commands
    Courses {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Enrollment commands
    Enrollments {
        #[command(subcommand)]
        command: EnrollmentCommands,
    },
}

#[derive(Subcommand)]
enum CourseCommands {
    /// List the course catalog
    List,
    /// Show one course with its lessons
    Show {
        /// Course id
        course_id: String,
    },
}

#[derive(Subcommand)]
enum EnrollmentCommands {
    /// List the caller's enrollments
    List,
    /// Enroll in a course
    Join {
        /// Course id
        course_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let paths = match cli.base_dir {
        Some(base) => Paths::with_base_dir(base),
        None => Paths::new()?,
    };
    let mut config = Config::load(&paths)?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }

    let app = app::App::open(&config, &paths)?;

    match cli.command {
        Commands::Login { email, password } => app.login(&email, &password).await,
        Commands::Logout => app.logout(),
        Commands::Status => app.status(),
        Commands::Courses { command } => match command {
            CourseCommands::List => app.list_courses().await,
            CourseCommands::Show { course_id } => app.show_course(&course_id).await,
        },
        Commands::Enrollments { command } => match command {
            EnrollmentCommands::List => app.list_enrollments().await,
            EnrollmentCommands::Join { course_id } => app.enroll(&course_id).await,
        },
    }
}
