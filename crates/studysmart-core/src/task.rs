//! Study task list.
//!
//! The board is in-memory only: it is created seeded with sample tasks and
//! discarded at process exit, like the single-page view it models.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "unknown priority '{other}' (expected low, medium or high)"
            )),
        }
    }
}

/// A study task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Subject name the task belongs to.
    pub subject: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

/// Completion filter over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter::All
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "pending" => Ok(TaskFilter::Pending),
            "completed" | "done" => Ok(TaskFilter::Completed),
            other => Err(format!(
                "unknown filter '{other}' (expected all, pending or completed)"
            )),
        }
    }
}

/// In-memory task board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample tasks every fresh view starts with, dated around `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut board = Self::new();
        board.tasks = vec![
            Task {
                id: Uuid::new_v4().to_string(),
                title: "Complete Math Homework".to_string(),
                completed: false,
                subject: "Mathematics".to_string(),
                due_date: today.checked_add_days(Days::new(3)).unwrap_or(today),
                priority: Priority::High,
            },
            Task {
                id: Uuid::new_v4().to_string(),
                title: "Read Chapter 5 of Physics textbook".to_string(),
                completed: false,
                subject: "Physics".to_string(),
                due_date: today.checked_add_days(Days::new(5)).unwrap_or(today),
                priority: Priority::Medium,
            },
            Task {
                id: Uuid::new_v4().to_string(),
                title: "Prepare notes for Literature class".to_string(),
                completed: true,
                subject: "Literature".to_string(),
                due_date: today.checked_sub_days(Days::new(3)).unwrap_or(today),
                priority: Priority::Low,
            },
        ];
        board
    }

    /// Add a task. Blank titles are rejected; a blank subject becomes
    /// "General".
    pub fn add(
        &mut self,
        title: &str,
        subject: &str,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Result<&Task, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::BlankField { field: "title" });
        }
        let subject = subject.trim();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            subject: if subject.is_empty() {
                "General".to_string()
            } else {
                subject.to_string()
            },
            due_date,
            priority,
        };
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        Ok(&self.tasks[last])
    }

    /// Flip a task's completed flag.
    pub fn toggle(&mut self, id: &str) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task)
    }

    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Pending tasks due on or before `date`.
    pub fn due_by(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| !t.completed && t.due_date <= date)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
