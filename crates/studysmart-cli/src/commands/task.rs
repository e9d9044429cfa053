//! Task board commands.
//!
//! The board is in-memory and seeded fresh on every invocation, like a
//! page load of the original view; `done` and `rm` address tasks by their
//! 1-based position in the full list.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use studysmart_core::{Config, Priority, SubjectBook, Task, TaskBoard, TaskFilter};

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks
    List {
        /// Filter: all, pending or completed
        #[arg(long, default_value = "all")]
        filter: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a task and print the resulting board
    Add {
        /// Task title
        title: String,
        /// Subject name
        #[arg(long, default_value = "General")]
        subject: String,
        /// Due date (YYYY-MM-DD, default today)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Priority: low, medium or high
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Toggle completion of the task at a 1-based position
    Done {
        /// Position in the full list
        index: usize,
    },
    /// Remove the task at a 1-based position
    Rm {
        /// Position in the full list
        index: usize,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();
    let mut board = TaskBoard::seeded(today);

    match action {
        TaskAction::List { filter, json } => {
            let filter: TaskFilter = filter.parse()?;
            let tasks = board.filtered(filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print_tasks(&tasks);
                let config = Config::load_or_default();
                if config.notifications.task_reminders {
                    let due = board.due_by(today);
                    if !due.is_empty() {
                        println!("\n{} task(s) due today or overdue.", due.len());
                    }
                }
            }
        }
        TaskAction::Add {
            title,
            subject,
            due,
            priority,
        } => {
            let priority: Priority = priority.parse()?;
            let task = board.add(&title, &subject, due.unwrap_or(today), priority)?;
            println!("Task added: {}", task.id);
            print_tasks(&board.filtered(TaskFilter::All));
        }
        TaskAction::Done { index } => {
            let id = task_id_at(&board, index)?;
            board.toggle(&id);
            print_tasks(&board.filtered(TaskFilter::All));
        }
        TaskAction::Rm { index } => {
            let id = task_id_at(&board, index)?;
            board.remove(&id);
            print_tasks(&board.filtered(TaskFilter::All));
        }
    }

    Ok(())
}

fn task_id_at(board: &TaskBoard, index: usize) -> Result<String, Box<dyn std::error::Error>> {
    board
        .tasks()
        .get(index.wrapping_sub(1))
        .map(|t| t.id.clone())
        .ok_or_else(|| format!("no task at position {index} (1..{})", board.len()).into())
}

fn print_tasks(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No tasks found. Add some tasks to get started!");
        return;
    }
    let book = SubjectBook::seeded();
    for (i, task) in tasks.iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        println!(
            "{:>2}. [{mark}] {}  ({}, due {}, {}, {})",
            i + 1,
            task.title,
            task.subject,
            task.due_date,
            task.priority,
            book.color_of(&task.subject),
        );
    }
}
