//! Monthly study calendar.
//!
//! Holds study events in memory and produces the month grid the original
//! view renders: full Sun..Sat weeks, padded with adjacent-month days.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Week header, Sunday first.
pub const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A scheduled study session on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// HH:mm
    pub start_time: String,
    /// HH:mm
    pub end_time: String,
    pub subject: String,
    /// Display color (hex).
    pub color: String,
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing fill days of adjacent months.
    pub in_month: bool,
}

/// In-memory calendar focused on one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    /// First day of the focused month.
    month_start: NaiveDate,
    events: Vec<StudyEvent>,
}

impl Calendar {
    /// Empty calendar focused on `date`'s month.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            month_start: first_of_month(date),
            events: Vec::new(),
        }
    }

    /// The sample events every fresh view starts with, around `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        let mut calendar = Self::new(today);
        calendar.events = vec![
            StudyEvent {
                id: Uuid::new_v4().to_string(),
                title: "Math Study".to_string(),
                date: today,
                start_time: "10:00".to_string(),
                end_time: "11:30".to_string(),
                subject: "Mathematics".to_string(),
                color: "#3b82f6".to_string(),
            },
            StudyEvent {
                id: Uuid::new_v4().to_string(),
                title: "Physics Revision".to_string(),
                date: tomorrow,
                start_time: "14:00".to_string(),
                end_time: "16:00".to_string(),
                subject: "Physics".to_string(),
                color: "#8b5cf6".to_string(),
            },
            StudyEvent {
                id: Uuid::new_v4().to_string(),
                title: "Literature Essay".to_string(),
                date: today,
                start_time: "16:30".to_string(),
                end_time: "18:00".to_string(),
                subject: "Literature".to_string(),
                color: "#f472b6".to_string(),
            },
        ];
        calendar
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    pub fn year(&self) -> i32 {
        self.month_start.year()
    }

    pub fn month(&self) -> u32 {
        self.month_start.month()
    }

    pub fn events(&self) -> &[StudyEvent] {
        &self.events
    }

    /// Events on `date`, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&StudyEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// The month grid: leading fill from the previous month, every day of
    /// the focused month, trailing fill to complete the last week. Always
    /// a multiple of seven cells.
    pub fn grid(&self) -> Vec<CalendarDay> {
        let first = self.month_start;
        let leading = first.weekday().num_days_from_sunday() as u64;
        let start = first.checked_sub_days(Days::new(leading)).unwrap_or(first);

        let mut days = Vec::new();
        let mut current = start;
        loop {
            days.push(CalendarDay {
                date: current,
                in_month: current.month() == first.month() && current.year() == first.year(),
            });
            let next = match current.succ_opt() {
                Some(d) => d,
                None => break,
            };
            let past_month = next.year() > first.year()
                || (next.year() == first.year() && next.month() > first.month());
            if past_month && days.len() % 7 == 0 {
                break;
            }
            current = next;
        }
        days
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Focus the next month.
    pub fn next_month(&mut self) {
        if let Some(next) = self.month_start.checked_add_months(Months::new(1)) {
            self.month_start = next;
        }
    }

    /// Focus the previous month.
    pub fn prev_month(&mut self) {
        if let Some(prev) = self.month_start.checked_sub_months(Months::new(1)) {
            self.month_start = prev;
        }
    }

    /// Add an event. The title must be non-blank and times must be HH:mm.
    pub fn add_event(
        &mut self,
        title: &str,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        subject: &str,
        color: &str,
    ) -> Result<&StudyEvent, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::BlankField { field: "title" });
        }
        for (field, value) in [("start_time", start_time), ("end_time", end_time)] {
            if NaiveTime::parse_from_str(value, "%H:%M").is_err() {
                return Err(ValidationError::InvalidValue {
                    field,
                    message: format!("'{value}' is not a HH:mm time"),
                });
            }
        }
        let event = StudyEvent {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            subject: subject.trim().to_string(),
            color: color.to_string(),
        };
        self.events.push(event);
        let last = self.events.len() - 1;
        Ok(&self.events[last])
    }

    pub fn remove_event(&mut self, id: &str) -> Option<StudyEvent> {
        let index = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(index))
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(date.day0() as u64))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_whole_weeks_and_contains_the_month() {
        let calendar = Calendar::new(date(2025, 4, 15));
        let grid = calendar.grid();
        assert_eq!(grid.len() % 7, 0);
        let in_month = grid.iter().filter(|d| d.in_month).count();
        assert_eq!(in_month, 30);
        // April 1st 2025 is a Tuesday: two leading fill days.
        assert!(!grid[0].in_month);
        assert!(!grid[1].in_month);
        assert_eq!(grid[2].date, date(2025, 4, 1));
    }

    #[test]
    fn grid_handles_leap_february() {
        let calendar = Calendar::new(date(2024, 2, 1));
        let in_month = calendar.grid().iter().filter(|d| d.in_month).count();
        assert_eq!(in_month, 29);
    }

    #[test]
    fn grid_with_no_fill_needed() {
        // June 2025 starts on a Sunday and has 30 days: no leading fill,
        // five trailing fill days.
        let calendar = Calendar::new(date(2025, 6, 10));
        let grid = calendar.grid();
        assert_eq!(grid[0].date, date(2025, 6, 1));
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn month_navigation_crosses_year_boundaries() {
        let mut calendar = Calendar::new(date(2025, 12, 31));
        calendar.next_month();
        assert_eq!((calendar.year(), calendar.month()), (2026, 1));
        calendar.prev_month();
        calendar.prev_month();
        assert_eq!((calendar.year(), calendar.month()), (2025, 11));
    }

    #[test]
    fn seeded_events_fall_on_today_and_tomorrow() {
        let today = date(2025, 4, 20);
        let calendar = Calendar::seeded(today);
        assert_eq!(calendar.events().len(), 3);
        assert_eq!(calendar.events_on(today).len(), 2);
        assert_eq!(calendar.events_on(date(2025, 4, 21)).len(), 1);
        assert!(calendar.events_on(date(2025, 4, 22)).is_empty());
    }

    #[test]
    fn add_event_validates_times() {
        let mut calendar = Calendar::new(date(2025, 4, 20));
        assert!(calendar
            .add_event("Review", date(2025, 4, 21), "25:00", "26:00", "Math", "#fff")
            .is_err());
        assert!(calendar
            .add_event("", date(2025, 4, 21), "10:00", "11:00", "Math", "#fff")
            .is_err());
        let event = calendar
            .add_event("Review", date(2025, 4, 21), "10:00", "11:00", "Math", "#fff")
            .unwrap();
        assert_eq!(event.start_time, "10:00");
    }

    #[test]
    fn remove_event_by_id() {
        let mut calendar = Calendar::seeded(date(2025, 4, 20));
        let id = calendar.events()[0].id.clone();
        assert!(calendar.remove_event(&id).is_some());
        assert_eq!(calendar.events().len(), 2);
        assert!(calendar.remove_event(&id).is_none());
    }
}
