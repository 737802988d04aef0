//! Grouping and deadline classification through the application context

mod common;

use common::{date, get_test_app, test_today};
use daily_todo::todo::{Priority, is_expiring_soon};

#[test]
fn past_fully_done_day_is_hidden() {
    let (mut app, _file) = get_test_app();
    // today is 2024-01-03
    let task = app.add("Old chore", Priority::medium, date(2024, 1, 1)).unwrap();
    app.toggle(&task.id);

    assert!(app.grouped().is_empty());
}

#[test]
fn past_incomplete_day_stays_as_backlog() {
    let (mut app, _file) = get_test_app();
    app.add("Leftover", Priority::medium, date(2024, 1, 1));
    let done = app.add("Future done", Priority::medium, date(2024, 1, 5)).unwrap();
    app.toggle(&done.id);

    let groups = app.grouped();
    let dates: Vec<String> = groups.iter().map(|g| g.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-05"]);
}

#[test]
fn groups_come_back_in_ascending_date_order() {
    let (mut app, _file) = get_test_app();
    app.add("C", Priority::medium, date(2024, 2, 1));
    app.add("A", Priority::medium, date(2024, 1, 4));
    app.add("B", Priority::medium, date(2024, 1, 10));

    let groups = app.grouped();
    let dates: Vec<String> = groups.iter().map(|g| g.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-04", "2024-01-10", "2024-02-01"]);
}

#[test]
fn tasks_within_a_group_keep_insertion_order() {
    let (mut app, _file) = get_test_app();
    app.add("first added", Priority::high, date(2024, 1, 4));
    app.add("second added", Priority::low, date(2024, 1, 4));
    app.add("third added", Priority::medium, date(2024, 1, 4));

    let groups = app.grouped();
    assert_eq!(groups.len(), 1);
    let texts: Vec<&str> = groups[0].tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["first added", "second added", "third added"]);
}

#[test]
fn expiring_soon_means_due_exactly_tomorrow() {
    let today = test_today();
    assert!(is_expiring_soon(date(2024, 1, 4), today));
    assert!(!is_expiring_soon(date(2024, 1, 5), today));
    assert!(!is_expiring_soon(today, today));
}

#[test]
fn overdue_requires_past_due_and_incomplete() {
    let (mut app, _file) = get_test_app();
    let task = app.add("Late", Priority::medium, date(2024, 1, 1)).unwrap();

    assert!(app.tasks()[0].is_overdue(test_today()));

    app.toggle(&task.id);
    assert!(!app.tasks()[0].is_overdue(test_today()));
}

#[test]
fn list_output_reflects_grouping_and_markers() {
    let (mut app, _file) = get_test_app();
    app.add("Backlog item", Priority::high, date(2024, 1, 1));
    app.add("Due tomorrow", Priority::medium, date(2024, 1, 4));

    let out = app.handle_list();
    assert!(out.contains("2024-01-01"));
    assert!(out.contains("! Backlog item"));
    assert!(out.contains("* Due tomorrow"));

    // A past, fully-done day disappears from the listing
    let (mut app2, _file2) = get_test_app();
    let t = app2.add("Old done", Priority::low, date(2024, 1, 1)).unwrap();
    app2.toggle(&t.id);
    assert!(app2.handle_list().contains("Nothing to do"));
}
