//! Mock user profile.
//!
//! Login accepts any non-empty credentials and never checks a password;
//! there is no real account system behind it. Logging out clears
//! everything, including the course list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A course the user is enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// In-memory profile state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub logged_in: bool,
    pub username: String,
    pub email: String,
    courses: Vec<Course>,
}

impl Profile {
    /// Fresh, logged-out profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock login: any non-empty email and password succeed. The
    /// username is the local part of the email.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::BlankField { field: "email" });
        }
        if password.is_empty() {
            return Err(ValidationError::BlankField { field: "password" });
        }
        self.logged_in = true;
        self.username = email.split('@').next().unwrap_or(email).to_string();
        self.email = email.to_string();
        Ok(())
    }

    /// Log out and clear all profile state.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Add a course. Blank names are rejected; a blank description
    /// becomes "No description".
    pub fn add_course(&mut self, name: &str, description: &str) -> Result<&Course, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankField { field: "name" });
        }
        let description = description.trim();
        let course = Course {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: if description.is_empty() {
                "No description".to_string()
            } else {
                description.to_string()
            },
        };
        self.courses.push(course);
        let last = self.courses.len() - 1;
        Ok(&self.courses[last])
    }

    pub fn remove_course(&mut self, id: &str) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.id == id)?;
        Some(self.courses.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_sets_username_from_email() {
        let mut profile = Profile::new();
        profile.login("alex@example.com", "hunter2").unwrap();
        assert!(profile.logged_in);
        assert_eq!(profile.username, "alex");
        assert_eq!(profile.email, "alex@example.com");
    }

    #[test]
    fn login_requires_both_fields() {
        let mut profile = Profile::new();
        assert!(profile.login("", "pw").is_err());
        assert!(profile.login("alex@example.com", "").is_err());
        assert!(!profile.logged_in);
    }

    #[test]
    fn logout_clears_everything() {
        let mut profile = Profile::new();
        profile.login("alex@example.com", "pw").unwrap();
        profile.add_course("Calculus I", "").unwrap();
        profile.logout();
        assert!(!profile.logged_in);
        assert!(profile.username.is_empty());
        assert!(profile.courses().is_empty());
    }

    #[test]
    fn course_defaults_and_removal() {
        let mut profile = Profile::new();
        assert!(profile.add_course("  ", "x").is_err());
        let id = profile.add_course("Calculus I", "").unwrap().id.clone();
        assert_eq!(profile.courses()[0].description, "No description");
        assert!(profile.remove_course(&id).is_some());
        assert!(profile.courses().is_empty());
    }
}
