//! End-to-end tests for the report inbox visibility flow.

use atrio_reports::{months_between, ReportVisibilityStore, REPORTS_NAMESPACE};
use atrio_visibility::{GateDecision, JsonFileStorage, PermissionStore, ViewMode};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn inbox_rows_follow_the_year_cascade() {
    let mut store = ReportVisibilityStore::in_memory();
    let months = months_between(date(2024, 11, 1), date(2025, 2, 28));

    store.toggle_year(2024);

    let syndic_rows: Vec<_> = months
        .iter()
        .filter(|p| {
            store
                .month_decision(p.year, p.month, ViewMode::Syndic)
                .renders()
        })
        .map(|p| p.label())
        .collect();
    assert_eq!(syndic_rows, vec!["2025-01", "2025-02"]);

    // The owner still sees every row, the 2024 ones muted.
    for period in &months {
        let decision = store.month_decision(period.year, period.month, ViewMode::Owner);
        assert!(decision.renders());
        assert_eq!(decision.is_muted(), period.year == 2024);
    }
}

#[test]
fn inbox_overrides_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = JsonFileStorage::new(dir.path());
        let mut store = ReportVisibilityStore::load(REPORTS_NAMESPACE, Box::new(storage));
        store.toggle_year(2024);
        store.toggle_month(2025, 1);
    }

    let storage = JsonFileStorage::new(dir.path());
    let store = ReportVisibilityStore::load(REPORTS_NAMESPACE, Box::new(storage));
    assert!(!store.is_year_visible(2024));
    assert!(!store.is_month_effectively_visible(2025, 1));
    assert!(store.is_month_effectively_visible(2025, 2));
}

#[test]
fn dynamic_month_ids_resolve_through_the_flat_store() {
    let mut permissions = PermissionStore::in_memory();
    let june = months_between(date(2025, 6, 1), date(2025, 6, 30))[0];

    assert!(permissions.is_visible(&june.feature_id()));
    permissions.set_visible(&june.feature_id(), false);

    assert_eq!(
        GateDecision::for_feature(permissions.is_visible(&june.feature_id()), ViewMode::Syndic),
        GateDecision::Hide
    );
}
