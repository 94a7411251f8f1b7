//! Shared view state: the subscription filter, the live search term and the
//! load flag. Subscription changes demand a server-side refetch; search
//! changes are purely local refilters and never touch the network.

use crate::models::{BackupItem, BackupRecord, LargeLogFile, RecoveryVault, VmUsage};
use serde::{Deserialize, Serialize};

/// Server-side subscription scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionFilter {
    All,
    Named(String),
}

impl SubscriptionFilter {
    /// Parse a CLI/UI selection; `None`, empty or "all" mean unscoped.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None => Self::All,
            Some(s) if s.is_empty() || s.eq_ignore_ascii_case("all") => Self::All,
            Some(s) => Self::Named(s.to_string()),
        }
    }

    /// Value for the `subscriptionName` query parameter; `None` means the
    /// parameter must be omitted entirely (never sent as an empty string).
    pub fn query_value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    pub fn matches(&self, subscription_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == subscription_name,
        }
    }
}

impl std::fmt::Display for SubscriptionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all subscriptions"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// In-flight state of the current load batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Fetching,
}

/// Effect a state transition demands from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEffect {
    /// Server-side scope changed: re-run the fetch sequence
    Refetch,
    /// Local-only change: recompute visible rows from held data
    Refilter,
    /// No change
    None,
}

/// Rows that can be matched by the live search term
pub trait Searchable {
    /// The fixed set of text fields the search term is matched against
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for BackupItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.vm_name,
            &self.vault_name,
            &self.resource_group,
            &self.policy_name,
        ]
    }
}

impl Searchable for RecoveryVault {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.vault_name,
            &self.subscription_name,
            &self.location,
            &self.resource_group_name,
        ]
    }
}

impl Searchable for VmUsage {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.computer, &self.subscription_name]
    }
}

impl Searchable for LargeLogFile {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.server_name, &self.database_name, &self.file_name]
    }
}

impl Searchable for BackupRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.server_name, &self.database_name, &self.backup_type]
    }
}

/// Shared view state. Single-writer (user-initiated transitions only),
/// read by every bound view.
#[derive(Debug, Clone)]
pub struct ViewState {
    subscription: SubscriptionFilter,
    search_term: String,
    loading: LoadState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            subscription: SubscriptionFilter::All,
            search_term: String::new(),
            loading: LoadState::Idle,
        }
    }

    pub fn subscription(&self) -> &SubscriptionFilter {
        &self.subscription
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading == LoadState::Fetching
    }

    /// Change the subscription scope. A changed scope demands a refetch;
    /// re-selecting the current scope is a no-op.
    pub fn set_subscription(&mut self, filter: SubscriptionFilter) -> FilterEffect {
        if self.subscription == filter {
            return FilterEffect::None;
        }
        self.subscription = filter;
        FilterEffect::Refetch
    }

    /// Change the search term. Always local; never triggers network I/O.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> FilterEffect {
        self.search_term = term.into();
        FilterEffect::Refilter
    }

    /// Manual refresh re-runs the fetch sequence for the current scope.
    pub fn refresh(&self) -> FilterEffect {
        FilterEffect::Refetch
    }

    /// Mark the start of a fetch batch.
    pub fn begin_fetch(&mut self) {
        self.loading = LoadState::Fetching;
    }

    /// Mark the end of a fetch batch, successful or not.
    pub fn finish_fetch(&mut self) {
        self.loading = LoadState::Idle;
    }

    /// Case-insensitive substring match of the search term against a row.
    /// An empty term matches everything.
    pub fn matches_search<T: Searchable>(&self, row: &T) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        row.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Currently visible rows: the held collection narrowed by the search
    /// term. Subscription scoping happened server-side at fetch time.
    pub fn visible_rows<'a, T: Searchable>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches_search(*row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup_item(vm: &str) -> BackupItem {
        BackupItem {
            subscription_name: "Prod-Infra".into(),
            vault_name: "vault-east-1".into(),
            resource_group: "rg-backup-east".into(),
            vm_name: vm.into(),
            backup_pre_check: "Healthy".into(),
            last_backup_status: "Completed".into(),
            latest_restore_point: "2026-08-25T02:00:00Z".into(),
            policy_name: "DailyPolicy".into(),
            policy_sub_type: "Standard".into(),
        }
    }

    #[test]
    fn selection_parsing() {
        assert_eq!(
            SubscriptionFilter::from_selection(None),
            SubscriptionFilter::All
        );
        assert_eq!(
            SubscriptionFilter::from_selection(Some("all")),
            SubscriptionFilter::All
        );
        assert_eq!(
            SubscriptionFilter::from_selection(Some("")),
            SubscriptionFilter::All
        );
        assert_eq!(
            SubscriptionFilter::from_selection(Some("Prod-Infra")),
            SubscriptionFilter::Named("Prod-Infra".into())
        );
    }

    #[test]
    fn all_scope_omits_query_parameter() {
        assert_eq!(SubscriptionFilter::All.query_value(), None);
        assert_eq!(
            SubscriptionFilter::Named("Prod-Infra".into()).query_value(),
            Some("Prod-Infra")
        );
    }

    #[test]
    fn subscription_change_demands_refetch_once() {
        let mut state = ViewState::new();
        let effect = state.set_subscription(SubscriptionFilter::Named("Prod-Infra".into()));
        assert_eq!(effect, FilterEffect::Refetch);

        // re-selecting the same scope is a no-op
        let effect = state.set_subscription(SubscriptionFilter::Named("Prod-Infra".into()));
        assert_eq!(effect, FilterEffect::None);
    }

    #[test]
    fn search_change_is_local_only() {
        let mut state = ViewState::new();
        assert_eq!(state.set_search_term("sql"), FilterEffect::Refilter);
        assert_eq!(state.refresh(), FilterEffect::Refetch);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut state = ViewState::new();
        state.set_search_term("SQL");
        let rows = vec![backup_item("sql-prod-01"), backup_item("web-prod-02")];
        let visible = state.visible_rows(&rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].vm_name, "sql-prod-01");
    }

    #[test]
    fn search_covers_vault_and_policy_fields() {
        let mut state = ViewState::new();
        state.set_search_term("dailypolicy");
        let rows = vec![backup_item("vm-1")];
        assert_eq!(state.visible_rows(&rows).len(), 1);
    }

    #[test]
    fn empty_search_shows_everything() {
        let state = ViewState::new();
        let rows = vec![backup_item("vm-1"), backup_item("vm-2")];
        assert_eq!(state.visible_rows(&rows).len(), 2);
    }

    #[test]
    fn loading_flag_tracks_fetch_batch() {
        let mut state = ViewState::new();
        assert!(!state.is_loading());
        state.begin_fetch();
        assert!(state.is_loading());
        state.finish_fetch();
        assert!(!state.is_loading());
    }
}
