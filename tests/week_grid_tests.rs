use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_event, setup_test_db, wcal};

#[test]
fn test_week_shows_events_of_the_anchor_week() {
    let db_path = setup_test_db("week_anchor");

    add_event(&db_path, "2024-06-10", "09:15", "09:45", "Standup");
    add_event(&db_path, "2024-06-14", "14:00", "15:30", "Review");
    add_event(&db_path, "2024-06-19", "09:00", "10:00", "NextWeek");

    wcal()
        .args(["--db", &db_path, "week", "2024-06-12"])
        .assert()
        .success()
        .stdout(contains("June 2024"))
        .stdout(contains("Mon, Jun 10"))
        .stdout(contains("Sun, Jun 16"))
        .stdout(contains("Standup"))
        .stdout(contains("09:15-09:45"))
        .stdout(contains("Review"))
        .stdout(contains("NextWeek").not());
}

#[test]
fn test_week_sunday_anchor_shows_previous_monday() {
    let db_path = setup_test_db("week_sunday");

    // 2024-06-09 is a Sunday; its week starts Monday 2024-06-03
    wcal()
        .args(["--db", &db_path, "week", "2024-06-09"])
        .assert()
        .success()
        .stdout(contains("Mon, Jun 3"))
        .stdout(contains("Sun, Jun 9"));
}

#[test]
fn test_week_navigation_moves_by_whole_weeks() {
    let db_path = setup_test_db("week_nav");

    add_event(&db_path, "2024-06-19", "09:00", "10:00", "NextWeek");

    wcal()
        .args(["--db", &db_path, "week", "2024-06-12", "--next", "1"])
        .assert()
        .success()
        .stdout(contains("Mon, Jun 17"))
        .stdout(contains("NextWeek"));

    wcal()
        .args(["--db", &db_path, "week", "2024-06-12", "--prev", "2"])
        .assert()
        .success()
        .stdout(contains("Mon, May 27"))
        .stdout(contains("NextWeek").not());
}

#[test]
fn test_week_renders_all_grid_hours() {
    let db_path = setup_test_db("week_hours");

    let output = wcal()
        .args(["--db", &db_path, "week", "2024-06-12"])
        .output()
        .expect("run week");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for label in ["6 AM", "9 AM", "12 PM", "5 PM", "10 PM"] {
        assert!(stdout.contains(label), "missing hour label {}", label);
    }
    assert!(!stdout.contains("5 AM"));
}

#[test]
fn test_degenerate_event_still_renders() {
    let db_path = setup_test_db("week_degenerate");

    // end before start: stored and rendered at the floor height, not rejected
    add_event(&db_path, "2024-06-12", "15:00", "14:00", "Backwards");

    wcal()
        .args(["--db", &db_path, "week", "2024-06-12"])
        .assert()
        .success()
        .stdout(contains("Backwards"));
}
