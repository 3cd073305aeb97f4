//! History filter state, the open history view and the searchable user index.

use crate::core::logic::{contains_query, normalize_query};
use botwatch_api_models::{HistoryEntry, Period, UserRecord};
use std::collections::HashSet;
use std::rc::Rc;

/// Filters of one open history view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Time range.
    pub period: Period,
    /// Free-text query over URL, title and domain.
    pub search: String,
}

impl Default for HistoryFilter {
    fn default() -> Self {
        Self {
            period: Period::All,
            search: String::new(),
        }
    }
}

impl HistoryFilter {
    /// Whether `entry` passes both the period and the text predicate.
    #[must_use]
    pub fn matches(&self, entry: &HistoryEntry, now_secs: f64) -> bool {
        let in_period = self
            .period
            .window_secs()
            .is_none_or(|window| entry.timestamp >= now_secs - window as f64);
        in_period
            && normalize_query(&self.search).is_none_or(|query| {
                [&entry.url, &entry.title, &entry.domain]
                    .into_iter()
                    .flatten()
                    .any(|field| contains_query(field, &query))
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
enum HistoryLoad {
    Loading,
    Loaded(Rc<Vec<HistoryEntry>>),
    Failed(String),
}

/// What the history list renders for the current filters.
#[derive(Debug, PartialEq)]
pub enum HistoryOutcome<'a> {
    /// Fetch in flight.
    Loading,
    /// Fetch failed.
    Failed(&'a str),
    /// The user has no history at all.
    NoHistory,
    /// History exists but nothing passes the filters.
    NoMatches {
        /// Entries before filtering.
        total: usize,
    },
    /// Matching entries, newest first.
    Entries {
        /// Filtered rows.
        entries: Vec<&'a HistoryEntry>,
        /// Entries before filtering.
        total: usize,
    },
}

/// One user's history plus its transient filters.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryView {
    user_id: i64,
    filter: HistoryFilter,
    load: HistoryLoad,
}

impl HistoryView {
    /// View for `user_id` waiting for its fetch.
    #[must_use]
    pub fn loading(user_id: i64) -> Self {
        Self {
            user_id,
            filter: HistoryFilter::default(),
            load: HistoryLoad::Loading,
        }
    }

    /// User this view belongs to.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Current filters.
    #[must_use]
    pub const fn filter(&self) -> &HistoryFilter {
        &self.filter
    }

    /// Change the period filter.
    pub fn set_period(&mut self, period: Period) {
        self.filter.period = period;
    }

    /// Change the text filter.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    /// Store the fetch result. Results for another user are ignored.
    pub fn finish(&mut self, user_id: i64, result: Result<Vec<HistoryEntry>, String>) -> bool {
        if user_id != self.user_id {
            return false;
        }
        self.load = match result {
            Ok(entries) => HistoryLoad::Loaded(Rc::new(entries)),
            Err(message) => HistoryLoad::Failed(message),
        };
        true
    }

    /// Filter and sort the held entries for rendering.
    #[must_use]
    pub fn outcome(&self, now_secs: f64) -> HistoryOutcome<'_> {
        let entries = match &self.load {
            HistoryLoad::Loading => return HistoryOutcome::Loading,
            HistoryLoad::Failed(message) => return HistoryOutcome::Failed(message),
            HistoryLoad::Loaded(entries) => entries,
        };
        let total = entries.len();
        if total == 0 {
            return HistoryOutcome::NoHistory;
        }
        let mut visible: Vec<&HistoryEntry> = entries
            .iter()
            .filter(|entry| self.filter.matches(entry, now_secs))
            .collect();
        if visible.is_empty() {
            return HistoryOutcome::NoMatches { total };
        }
        visible.sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp));
        HistoryOutcome::Entries {
            entries: visible,
            total,
        }
    }
}

/// Display name used in the history modal title.
#[must_use]
pub fn display_name(user: &UserRecord) -> String {
    user.name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| user.username.clone().map(|handle| format!("@{handle}")))
        .unwrap_or_else(|| format!("User {}", user.user_id))
}

/// Users searchable in the history tab.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HistoryUserIndex {
    users: Rc<Vec<UserRecord>>,
}

impl HistoryUserIndex {
    /// Merge sources in order, keeping the first record per user id.
    #[must_use]
    pub fn merge(sources: impl IntoIterator<Item = Vec<UserRecord>>) -> Self {
        let mut seen = HashSet::new();
        let users = sources
            .into_iter()
            .flatten()
            .filter(|user| user.user_id != 0 && seen.insert(user.user_id))
            .collect();
        Self {
            users: Rc::new(users),
        }
    }

    /// Up to `cap` users matching `raw` by id, name or username.
    #[must_use]
    pub fn search(&self, raw: &str, cap: usize) -> Vec<&UserRecord> {
        let query = normalize_query(raw);
        self.users
            .iter()
            .filter(|user| {
                query.as_deref().is_none_or(|query| {
                    user.user_id.to_string().contains(query)
                        || user.name.as_deref().is_some_and(|n| contains_query(n, query))
                        || user
                            .username
                            .as_deref()
                            .is_some_and(|n| contains_query(n, query))
                })
            })
            .take(cap)
            .collect()
    }

    /// Number of indexed users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 10_000_000.0;
    const DAY: f64 = 86_400.0;

    fn entry(age_days: f64, url: &str) -> HistoryEntry {
        HistoryEntry {
            timestamp: NOW - age_days * DAY,
            url: Some(url.to_string()),
            ..HistoryEntry::default()
        }
    }

    fn loaded(entries: Vec<HistoryEntry>) -> HistoryView {
        let mut view = HistoryView::loading(1);
        assert!(view.finish(1, Ok(entries)));
        view
    }

    fn count(view: &HistoryView) -> usize {
        match view.outcome(NOW) {
            HistoryOutcome::Entries { entries, .. } => entries.len(),
            _ => 0,
        }
    }

    #[test]
    fn entries_sorted_newest_first() {
        let view = loaded(vec![entry(3.0, "a"), entry(0.5, "b"), entry(10.0, "c")]);
        match view.outcome(NOW) {
            HistoryOutcome::Entries { entries, total } => {
                assert_eq!(total, 3);
                let urls: Vec<_> = entries.iter().filter_map(|e| e.url.as_deref()).collect();
                assert_eq!(urls, vec!["b", "a", "c"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn query_narrows_period_monotonically() {
        let mut view = loaded(vec![
            entry(0.2, "https://youtube.com/1"),
            entry(2.0, "https://vimeo.com/2"),
            entry(5.0, "https://youtube.com/3"),
            entry(20.0, "https://youtube.com/4"),
        ]);
        view.set_period(Period::Week);
        let after_period = count(&view);
        assert_eq!(after_period, 3);
        view.set_search("YouTube");
        let after_query = count(&view);
        assert!(after_query <= after_period);
        assert_eq!(after_query, 2);
    }

    #[test]
    fn no_history_differs_from_no_matches() {
        assert_eq!(loaded(Vec::new()).outcome(NOW), HistoryOutcome::NoHistory);
        let mut view = loaded(vec![entry(1.0, "x")]);
        view.set_search("zzz");
        assert_eq!(view.outcome(NOW), HistoryOutcome::NoMatches { total: 1 });
    }

    #[test]
    fn result_for_other_user_is_ignored() {
        let mut view = HistoryView::loading(1);
        assert!(!view.finish(2, Ok(vec![entry(1.0, "x")])));
        assert_eq!(view.outcome(NOW), HistoryOutcome::Loading);
    }

    #[test]
    fn index_merges_dedupes_and_caps() {
        let user = |id: i64, name: &str| UserRecord {
            user_id: id,
            name: Some(name.into()),
            ..UserRecord::default()
        };
        let index = HistoryUserIndex::merge([
            vec![user(1, "Ann"), user(2, "Bob"), user(0, "ghost")],
            vec![user(2, "Bobby"), user(3, "Anya")],
        ]);
        assert_eq!(index.len(), 3);
        let bob = index.search("2", 50);
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].name.as_deref(), Some("Bob"));
        let hits: Vec<i64> = index.search("an", 50).iter().map(|u| u.user_id).collect();
        assert_eq!(hits, vec![1, 3]);
        assert_eq!(index.search("", 2).len(), 2);
        assert_eq!(index.search("3", 50).len(), 1);
    }

    #[test]
    fn display_name_falls_back() {
        let mut user = UserRecord {
            user_id: 4,
            ..UserRecord::default()
        };
        assert_eq!(display_name(&user), "User 4");
        user.username = Some("neo".into());
        assert_eq!(display_name(&user), "@neo");
    }
}
