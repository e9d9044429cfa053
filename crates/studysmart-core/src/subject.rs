//! Subject catalogue.
//!
//! In-memory, seeded with the same sample subjects as a fresh view.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Fallback color for tasks whose subject is unknown.
pub const UNKNOWN_SUBJECT_COLOR: &str = "#9ca3af";

/// Named colors offered when creating a subject.
pub const COLOR_PALETTE: [(&str, &str); 7] = [
    ("Blue", "#3b82f6"),
    ("Purple", "#8b5cf6"),
    ("Pink", "#f472b6"),
    ("Green", "#4ade80"),
    ("Yellow", "#facc15"),
    ("Orange", "#fb923c"),
    ("Red", "#f87171"),
];

/// A study subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Display color (hex).
    pub color: String,
    pub description: String,
    pub tasks_count: u32,
    pub study_hours: f64,
}

/// In-memory subject catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectBook {
    subjects: Vec<Subject>,
}

impl SubjectBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample subjects every fresh view starts with.
    pub fn seeded() -> Self {
        let seed = [
            (
                "Mathematics",
                "#3b82f6",
                "Calculus, Linear Algebra, Statistics",
                5u32,
                12.5,
            ),
            (
                "Physics",
                "#8b5cf6",
                "Mechanics, Thermodynamics, Electromagnetism",
                3,
                8.0,
            ),
            (
                "Literature",
                "#f472b6",
                "Poetry Analysis, Essay Writing, Modern Fiction",
                2,
                6.5,
            ),
            (
                "Computer Science",
                "#4ade80",
                "Algorithms, Data Structures, Web Development",
                4,
                10.0,
            ),
            (
                "History",
                "#facc15",
                "World War II, Ancient Civilizations, Modern History",
                1,
                3.5,
            ),
        ];
        let subjects = seed
            .into_iter()
            .map(|(name, color, description, tasks_count, study_hours)| Subject {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                color: color.to_string(),
                description: description.to_string(),
                tasks_count,
                study_hours,
            })
            .collect();
        Self { subjects }
    }

    /// Add a subject. Blank names are rejected; a blank description
    /// becomes "No description"; the default color is the first palette
    /// entry.
    pub fn add(
        &mut self,
        name: &str,
        color: Option<&str>,
        description: &str,
    ) -> Result<&Subject, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankField { field: "name" });
        }
        let description = description.trim();
        let subject = Subject {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.unwrap_or(COLOR_PALETTE[0].1).to_string(),
            description: if description.is_empty() {
                "No description".to_string()
            } else {
                description.to_string()
            },
            tasks_count: 0,
            study_hours: 0.0,
        };
        self.subjects.push(subject);
        let last = self.subjects.len() - 1;
        Ok(&self.subjects[last])
    }

    pub fn remove(&mut self, id: &str) -> Option<Subject> {
        let index = self.subjects.iter().position(|s| s.id == id)?;
        Some(self.subjects.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Display color for a subject name, with a neutral fallback.
    pub fn color_of(&self, name: &str) -> &str {
        self.subjects
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.color.as_str())
            .unwrap_or(UNKNOWN_SUBJECT_COLOR)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_book_has_five_subjects() {
        let book = SubjectBook::seeded();
        assert_eq!(book.len(), 5);
        assert_eq!(book.color_of("Mathematics"), "#3b82f6");
        assert_eq!(book.color_of("Underwater Basket Weaving"), UNKNOWN_SUBJECT_COLOR);
    }

    #[test]
    fn add_applies_defaults() {
        let mut book = SubjectBook::new();
        let subject = book.add("Biology", None, "  ").unwrap();
        assert_eq!(subject.color, COLOR_PALETTE[0].1);
        assert_eq!(subject.description, "No description");
        assert_eq!(subject.tasks_count, 0);
        assert_eq!(subject.study_hours, 0.0);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut book = SubjectBook::new();
        assert!(book.add("", None, "desc").is_err());
    }

    #[test]
    fn remove_by_id() {
        let mut book = SubjectBook::seeded();
        let id = book.subjects()[0].id.clone();
        assert!(book.remove(&id).is_some());
        assert_eq!(book.len(), 4);
        assert!(book.remove(&id).is_none());
    }
}
