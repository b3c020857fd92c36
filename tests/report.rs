#![forbid(unsafe_code)]
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roulement::{generate, week_start_for, PreferenceStore, ReportRenderer, TextReport};

#[test]
fn report_with_error_summary() {
    let mut store = PreferenceStore::new();
    store.add_employee("Alice").unwrap();
    let schedule = generate(&store, &mut StdRng::seed_from_u64(1));

    let report = TextReport::default().render(&schedule);
    insta::assert_snapshot!(report, @r"
Monday:
  Morning: Alice, Manager
  Afternoon: Manager
  Evening: Manager

Tuesday:
  Morning: Alice, Manager
  Afternoon: Manager
  Evening: Manager

Wednesday:
  Morning: Alice, Manager
  Afternoon: Manager
  Evening: Manager

Thursday:
  Morning: Alice, Manager
  Afternoon: Manager
  Evening: Manager

Friday:
  Morning: Alice, Manager
  Afternoon: Unassigned
  Evening: Unassigned

Saturday:
  Morning: Unassigned
  Afternoon: Unassigned
  Evening: Unassigned

Sunday:
  Morning: Unassigned
  Afternoon: Unassigned
  Evening: Unassigned


ERROR SUMMARY

Only Manager available (requires more staff):
• Monday - Afternoon
• Monday - Evening
• Tuesday - Afternoon
• Tuesday - Evening
• Wednesday - Afternoon
• Wednesday - Evening
• Thursday - Afternoon
• Thursday - Evening

Unassigned Shifts (even Manager unavailable):
• Friday - Afternoon
• Friday - Evening
• Saturday - Morning
• Saturday - Afternoon
• Saturday - Evening
• Sunday - Morning
• Sunday - Afternoon
• Sunday - Evening
");
}

#[test]
fn clean_report_has_no_summary() {
    let mut store = PreferenceStore::new();
    for i in 0..14 {
        store.add_employee(format!("E{i}")).unwrap();
    }
    let schedule = generate(&store, &mut StdRng::seed_from_u64(21));

    let report = TextReport::default().render(&schedule);
    assert!(schedule.diagnostics.is_clean());
    assert!(report.starts_with("Monday:\n  Morning: E"));
    assert!(!report.contains("ERROR SUMMARY"));
    assert!(!report.contains("Manager"));
    assert_eq!(report.lines().count(), 7 * 5);
}

#[test]
fn week_dates_in_headers() {
    let store = PreferenceStore::new();
    let schedule = generate(&store, &mut StdRng::seed_from_u64(0));
    let wednesday = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();

    let week_start = week_start_for(wednesday);
    assert_eq!(week_start, NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());

    let report = TextReport::for_week(week_start).render(&schedule);
    assert!(report.starts_with("Week of 2026-10-12\n\nMonday 2026-10-12:\n"));
    assert!(report.contains("\nSunday 2026-10-18:\n"));
    assert!(report.contains("\nOnly Manager available (requires more staff):\n• Monday - Morning\n"));
}
