//! Calendar commands: month grid rendering and event listing.

use chrono::{Datelike, NaiveDate, Utc};
use clap::Subcommand;
use studysmart_core::{Calendar, StudyEvent, SubjectBook, WEEK_DAYS};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Render the month grid
    Show {
        /// Month to show (YYYY-MM, default the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// List events
    Events {
        /// Only events on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an event and print the day's events
    Add {
        /// Event title
        title: String,
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Start time (HH:mm)
        #[arg(long, default_value = "09:00")]
        start: String,
        /// End time (HH:mm)
        #[arg(long, default_value = "10:00")]
        end: String,
        /// Subject name
        #[arg(long, default_value = "General")]
        subject: String,
    },
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();
    let mut calendar = Calendar::seeded(today);

    match action {
        CalendarAction::Show { month } => {
            if let Some(month) = month {
                let first = parse_month(&month)?;
                while calendar.month_start() < first {
                    calendar.next_month();
                }
                while calendar.month_start() > first {
                    calendar.prev_month();
                }
            }
            render_month(&calendar, today);
        }
        CalendarAction::Events { date, json } => {
            let events: Vec<&StudyEvent> = match date {
                Some(date) => calendar.events_on(date),
                None => calendar.events().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if events.is_empty() {
                println!("No events scheduled.");
            } else {
                for event in events {
                    println!(
                        "{}  {}-{}  {}  ({})",
                        event.date, event.start_time, event.end_time, event.title, event.subject
                    );
                }
            }
        }
        CalendarAction::Add {
            title,
            date,
            start,
            end,
            subject,
        } => {
            let date = date.unwrap_or(today);
            let book = SubjectBook::seeded();
            let color = book.color_of(&subject).to_string();
            let event = calendar.add_event(&title, date, &start, &end, &subject, &color)?;
            println!("Event added: {}", event.id);
            for event in calendar.events_on(date) {
                println!(
                    "{}  {}-{}  {}  ({})",
                    event.date, event.start_time, event.end_time, event.title, event.subject
                );
            }
        }
    }

    Ok(())
}

fn parse_month(input: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    let (year, month) = input
        .split_once('-')
        .ok_or_else(|| format!("'{input}' is not a YYYY-MM month"))?;
    let year: i32 = year.parse()?;
    let month: u32 = month.parse()?;
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| format!("'{input}' is not a valid month").into())
}

fn render_month(calendar: &Calendar, today: NaiveDate) {
    println!(
        "{:^28}",
        format!("{} {}", month_name(calendar.month()), calendar.year())
    );
    for day in WEEK_DAYS {
        print!("{day:>4}");
    }
    println!();

    for (i, cell) in calendar.grid().iter().enumerate() {
        if !cell.in_month {
            print!("    ");
        } else {
            let marker = if !calendar.events_on(cell.date).is_empty() {
                '*'
            } else if cell.date == today {
                '.'
            } else {
                ' '
            };
            print!("{:>3}{marker}", cell.date.day());
        }
        if i % 7 == 6 {
            println!();
        }
    }
    println!("(* has events, . today)");
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}
