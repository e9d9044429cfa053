//! Profile commands. The profile is a mock: state is in-memory and
//! discarded at process exit.

use clap::Subcommand;
use studysmart_core::Profile;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile
    Show,
    /// Mock login (any non-empty credentials succeed)
    Login {
        /// Email address
        email: String,
        /// Password (never checked beyond being non-empty)
        #[arg(long, default_value = "password")]
        password: String,
    },
    /// Log out
    Logout,
    /// Course list management
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },
}

#[derive(Subcommand)]
pub enum CourseAction {
    /// List courses
    List,
    /// Add a course
    Add {
        /// Course name
        name: String,
        /// Short description
        #[arg(long, default_value = "")]
        description: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut profile = Profile::new();

    match action {
        ProfileAction::Show => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Login { email, password } => {
            profile.login(&email, &password)?;
            println!("Successfully logged in!");
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Logout => {
            profile.logout();
            println!("Successfully logged out!");
        }
        ProfileAction::Course { action } => match action {
            CourseAction::List => {
                if profile.courses().is_empty() {
                    println!("No courses yet.");
                } else {
                    for course in profile.courses() {
                        println!("{}  {}", course.name, course.description);
                    }
                }
            }
            CourseAction::Add { name, description } => {
                let course = profile.add_course(&name, &description)?;
                println!("Course added successfully!");
                println!("{}", serde_json::to_string_pretty(course)?);
            }
        },
    }

    Ok(())
}
