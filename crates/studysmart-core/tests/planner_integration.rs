//! Integration tests across the planner stores.

use chrono::{Days, NaiveDate};
use studysmart_core::{
    Calendar, Priority, Profile, SubjectBook, TaskBoard, TaskFilter, UNKNOWN_SUBJECT_COLOR,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
}

#[test]
fn task_colors_resolve_through_the_subject_book() {
    let board = TaskBoard::seeded(today());
    let book = SubjectBook::seeded();

    // Every seeded task points at a seeded subject.
    for task in board.tasks() {
        assert_ne!(book.color_of(&task.subject), UNKNOWN_SUBJECT_COLOR);
    }

    let mut board = board;
    let task = board
        .add("Revise flashcards", "Esperanto", today(), Priority::Low)
        .unwrap();
    assert_eq!(book.color_of(&task.subject), UNKNOWN_SUBJECT_COLOR);
}

#[test]
fn completing_and_filtering_tasks() {
    let mut board = TaskBoard::seeded(today());
    let pending_before = board.filtered(TaskFilter::Pending).len();

    let id = board.filtered(TaskFilter::Pending)[0].id.clone();
    board.toggle(&id);

    assert_eq!(board.filtered(TaskFilter::Pending).len(), pending_before - 1);
    assert!(board
        .filtered(TaskFilter::Completed)
        .iter()
        .any(|t| t.id == id));
    // Filtering never mutates.
    assert_eq!(board.len(), 3);
}

#[test]
fn calendar_grid_covers_every_event_day_of_the_month() {
    let calendar = Calendar::seeded(today());
    let grid = calendar.grid();
    for event in calendar.events() {
        assert!(
            grid.iter().any(|d| d.date == event.date),
            "event on {} missing from grid",
            event.date
        );
    }
}

#[test]
fn a_year_of_month_grids_stays_well_formed() {
    let mut calendar = Calendar::new(today());
    for _ in 0..12 {
        let grid = calendar.grid();
        assert_eq!(grid.len() % 7, 0);
        assert!(grid.len() >= 28);
        assert!(grid.iter().any(|d| d.in_month));

        // The in-month cells are exactly the focused month, in order.
        let first_in_month = grid.iter().find(|d| d.in_month).unwrap();
        assert_eq!(first_in_month.date, calendar.month_start());
        calendar.next_month();
    }
    assert_eq!((calendar.year(), calendar.month()), (2026, 4));
}

#[test]
fn events_can_be_added_while_browsing_another_month() {
    let mut calendar = Calendar::seeded(today());
    calendar.next_month();
    let next_month_day = today().checked_add_days(Days::new(30)).unwrap();
    calendar
        .add_event(
            "Exam prep",
            next_month_day,
            "09:00",
            "10:00",
            "Mathematics",
            "#3b82f6",
        )
        .unwrap();
    assert_eq!(calendar.events_on(next_month_day).len(), 1);
    // Seeded events are untouched by navigation.
    assert_eq!(calendar.events().len(), 4);
}

#[test]
fn profile_session_flow() {
    let mut profile = Profile::new();
    assert!(profile.login("sam@university.edu", "pw").is_ok());
    profile.add_course("Linear Algebra", "MWF mornings").unwrap();
    profile.add_course("World History", "").unwrap();
    assert_eq!(profile.courses().len(), 2);

    profile.logout();
    assert!(!profile.logged_in);
    assert!(profile.courses().is_empty());
}
