//! Subject catalogue commands. In-memory, seeded per invocation.

use clap::Subcommand;
use studysmart_core::{Subject, SubjectBook, COLOR_PALETTE};

#[derive(Subcommand)]
pub enum SubjectAction {
    /// List subjects
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a subject and print the resulting catalogue
    Add {
        /// Subject name
        name: String,
        /// Display color: a palette name (see `subject colors`) or a hex value
        #[arg(long)]
        color: Option<String>,
        /// Short description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove the subject at a 1-based position
    Rm {
        /// Position in the list
        index: usize,
    },
    /// List the color palette
    Colors,
}

pub fn run(action: SubjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut book = SubjectBook::seeded();

    match action {
        SubjectAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(book.subjects())?);
            } else {
                print_subjects(book.subjects());
            }
        }
        SubjectAction::Add {
            name,
            color,
            description,
        } => {
            let color = color.as_deref().map(resolve_color).transpose()?;
            let subject = book.add(&name, color.as_deref(), &description)?;
            println!("Subject added: {}", subject.id);
            print_subjects(book.subjects());
        }
        SubjectAction::Rm { index } => {
            let id = book
                .subjects()
                .get(index.wrapping_sub(1))
                .map(|s| s.id.clone())
                .ok_or_else(|| format!("no subject at position {index} (1..{})", book.len()))?;
            book.remove(&id);
            print_subjects(book.subjects());
        }
        SubjectAction::Colors => {
            for (name, hex) in COLOR_PALETTE {
                println!("{name:<8} {hex}");
            }
        }
    }

    Ok(())
}

/// Accept either a palette name ("Blue") or a raw hex value ("#3b82f6").
fn resolve_color(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    if input.starts_with('#') {
        return Ok(input.to_string());
    }
    COLOR_PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map(|(_, hex)| (*hex).to_string())
        .ok_or_else(|| format!("unknown color '{input}' (see `subject colors`)").into())
}

fn print_subjects(subjects: &[Subject]) {
    if subjects.is_empty() {
        println!("No subjects found. Add some subjects to organize your studies!");
        return;
    }
    for (i, subject) in subjects.iter().enumerate() {
        println!(
            "{:>2}. {}  {}  {} task(s), {} hours studied\n    {}",
            i + 1,
            subject.name,
            subject.color,
            subject.tasks_count,
            subject.study_hours,
            subject.description,
        );
    }
}
