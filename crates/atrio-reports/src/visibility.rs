//! Year/month visibility overrides for the closing-report inbox.
//!
//! The inbox groups monthly reports by year, and the owner can hide whole
//! years or individual months from the syndic view. This is the one place
//! where hierarchy cascades: a hidden year hides every one of its months,
//! whatever their own flags say. Everything unset reads as visible, same
//! as the flat override store.

use std::collections::BTreeMap;

use atrio_visibility::{
    load_json, store_json, GateDecision, MemoryStorage, SettingsStorage, ViewMode,
};
use serde::{Deserialize, Serialize};

/// Storage namespace for the report inbox overrides.
pub const REPORTS_NAMESPACE: &str = "atrio_report_visibility_v1";

fn default_visible() -> bool {
    true
}

/// Per-year visibility: the year's own flag plus sparse per-month flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearVisibility {
    /// The year's own flag. Hiding the year wins over every month flag.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Sparse per-month flags, keyed by calendar month (1–12). An unset
    /// month is visible.
    #[serde(default)]
    pub months: BTreeMap<u8, bool>,
}

impl Default for YearVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            months: BTreeMap::new(),
        }
    }
}

impl YearVisibility {
    /// The raw flag for a month, `true` when unset.
    pub fn month(&self, month: u8) -> bool {
        self.months.get(&month).copied().unwrap_or(true)
    }
}

/// Visibility overrides for the whole inbox, keyed by year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportVisibility {
    years: BTreeMap<i32, YearVisibility>,
}

impl ReportVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// The year's own flag, `true` when unset.
    pub fn is_year_visible(&self, year: i32) -> bool {
        self.years.get(&year).map_or(true, |entry| entry.visible)
    }

    /// The month's own flag, ignoring the year cascade.
    pub fn is_month_visible(&self, year: i32, month: u8) -> bool {
        self.years.get(&year).map_or(true, |entry| entry.month(month))
    }

    /// The month as the inbox resolves it: hidden when its year is hidden,
    /// otherwise its own flag, visible when unset.
    pub fn is_month_effectively_visible(&self, year: i32, month: u8) -> bool {
        match self.years.get(&year) {
            Some(entry) => entry.visible && entry.month(month),
            None => true,
        }
    }

    /// Flip a year's flag and return the new value.
    pub fn toggle_year(&mut self, year: i32) -> bool {
        let entry = self.years.entry(year).or_default();
        entry.visible = !entry.visible;
        entry.visible
    }

    /// Flip a month's own flag and return the new value. Leaves the year
    /// flag alone, so re-showing the year later restores the month mix the
    /// owner had configured.
    pub fn toggle_month(&mut self, year: i32, month: u8) -> bool {
        let entry = self.years.entry(year).or_default();
        let next = !entry.month(month);
        entry.months.insert(month, next);
        next
    }

    /// Gate decision for one inbox row under the active mode.
    pub fn month_decision(&self, year: i32, month: u8, mode: ViewMode) -> GateDecision {
        GateDecision::for_feature(self.is_month_effectively_visible(year, month), mode)
    }

    /// Stored year entries, for the admin panel listing.
    pub fn years(&self) -> impl Iterator<Item = (i32, &YearVisibility)> {
        self.years.iter().map(|(year, entry)| (*year, entry))
    }
}

/// Write-through wrapper binding inbox overrides to a storage namespace.
///
/// Same contract as the flat permission store: every toggle persists the
/// whole tree before returning, loads fall back to the empty default on a
/// missing or malformed blob, and write failures leave the in-memory tree
/// authoritative for the session.
pub struct ReportVisibilityStore {
    tree: ReportVisibility,
    namespace: String,
    storage: Box<dyn SettingsStorage>,
}

impl ReportVisibilityStore {
    /// Load the overrides stored under `namespace`.
    pub fn load(namespace: impl Into<String>, storage: Box<dyn SettingsStorage>) -> Self {
        let namespace = namespace.into();
        let tree = load_json(storage.as_ref(), &namespace);
        Self {
            tree,
            namespace,
            storage,
        }
    }

    /// Session-only store over fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::load(REPORTS_NAMESPACE, Box::new(MemoryStorage::new()))
    }

    pub fn is_year_visible(&self, year: i32) -> bool {
        self.tree.is_year_visible(year)
    }

    pub fn is_month_effectively_visible(&self, year: i32, month: u8) -> bool {
        self.tree.is_month_effectively_visible(year, month)
    }

    pub fn toggle_year(&mut self, year: i32) -> bool {
        let visible = self.tree.toggle_year(year);
        self.persist();
        visible
    }

    pub fn toggle_month(&mut self, year: i32, month: u8) -> bool {
        let visible = self.tree.toggle_month(year, month);
        self.persist();
        visible
    }

    pub fn month_decision(&self, year: i32, month: u8, mode: ViewMode) -> GateDecision {
        self.tree.month_decision(year, month, mode)
    }

    /// The underlying tree, for the admin panel listing.
    pub fn tree(&self) -> &ReportVisibility {
        &self.tree
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn persist(&mut self) {
        store_json(self.storage.as_mut(), &self.namespace, &self.tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_unset_is_visible() {
        let tree = ReportVisibility::new();
        assert!(tree.is_year_visible(2025));
        assert!(tree.is_month_visible(2025, 6));
        assert!(tree.is_month_effectively_visible(2025, 6));
    }

    #[test]
    fn hiding_a_year_hides_every_month() {
        let mut tree = ReportVisibility::new();

        // Month 6 explicitly shown, then the year hidden: the year wins.
        tree.toggle_month(2025, 6);
        tree.toggle_month(2025, 6);
        assert!(tree.is_month_visible(2025, 6));

        assert!(!tree.toggle_year(2025));
        for month in 1..=12 {
            assert!(!tree.is_month_effectively_visible(2025, month));
        }

        // The months' own flags are untouched.
        assert!(tree.is_month_visible(2025, 6));
    }

    #[test]
    fn reshowing_a_year_restores_the_month_mix() {
        let mut tree = ReportVisibility::new();
        tree.toggle_month(2025, 3);
        tree.toggle_year(2025);
        tree.toggle_year(2025);

        assert!(!tree.is_month_effectively_visible(2025, 3));
        assert!(tree.is_month_effectively_visible(2025, 4));
    }

    #[test]
    fn month_toggle_round_trip() {
        let mut tree = ReportVisibility::new();
        assert!(!tree.toggle_month(2024, 12));
        assert!(tree.toggle_month(2024, 12));
        assert!(tree.is_month_effectively_visible(2024, 12));
    }

    #[test]
    fn years_are_independent() {
        let mut tree = ReportVisibility::new();
        tree.toggle_year(2024);

        assert!(!tree.is_month_effectively_visible(2024, 1));
        assert!(tree.is_month_effectively_visible(2025, 1));
    }

    #[test]
    fn month_decision_follows_the_cascade() {
        let mut tree = ReportVisibility::new();
        tree.toggle_year(2025);

        assert_eq!(
            tree.month_decision(2025, 6, ViewMode::Syndic),
            GateDecision::Hide
        );
        assert_eq!(
            tree.month_decision(2025, 6, ViewMode::Owner),
            GateDecision::ShowMuted
        );
        assert_eq!(
            tree.month_decision(2023, 6, ViewMode::Syndic),
            GateDecision::Show
        );
    }

    #[test]
    fn serde_round_trip_preserves_sparseness() {
        let mut tree = ReportVisibility::new();
        tree.toggle_year(2024);
        tree.toggle_month(2025, 2);

        let json = serde_json::to_string(&tree).unwrap();
        let back: ReportVisibility = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
        assert_eq!(back.years().count(), 2);
    }

    #[test]
    fn year_flag_defaults_when_absent_from_blob() {
        // A blob written before per-year flags existed: months only.
        let json = r#"{"2025":{"months":{"6":false}}}"#;
        let tree: ReportVisibility = serde_json::from_str(json).unwrap();

        assert!(tree.is_year_visible(2025));
        assert!(!tree.is_month_effectively_visible(2025, 6));
        assert!(tree.is_month_effectively_visible(2025, 7));
    }

    #[test]
    fn store_loads_state_left_by_an_earlier_session() {
        let storage = MemoryStorage::with_entry(
            REPORTS_NAMESPACE,
            r#"{"2024":{"visible":false,"months":{}}}"#,
        );
        let store = ReportVisibilityStore::load(REPORTS_NAMESPACE, Box::new(storage));

        assert!(!store.is_year_visible(2024));
        assert!(!store.is_month_effectively_visible(2024, 5));
        assert!(store.is_year_visible(2025));
    }

    #[test]
    fn store_falls_back_on_malformed_blob() {
        let storage = MemoryStorage::with_entry(REPORTS_NAMESPACE, "%% not json");
        let store = ReportVisibilityStore::load(REPORTS_NAMESPACE, Box::new(storage));

        assert!(store.is_year_visible(2025));
        assert_eq!(store.tree().years().count(), 0);
    }

    #[test]
    fn store_toggles_mirror_the_tree() {
        let mut store = ReportVisibilityStore::in_memory();

        assert!(!store.toggle_year(2025));
        assert!(!store.is_month_effectively_visible(2025, 6));
        assert!(store.toggle_year(2025));
        assert!(!store.toggle_month(2025, 6));
        assert!(!store.is_month_effectively_visible(2025, 6));
    }
}
