//! Search predicates for itemized lists and row-text filtering for simple lists.

use crate::core::logic::{contains_query, normalize_query};
use botwatch_api_models::UserRecord;
use std::rc::Rc;

/// Records that can be matched by a free-text query.
pub trait Searchable {
    /// Space separated text the query is matched against.
    fn search_text(&self) -> String;

    /// Whether the record matches an already normalised (trimmed, lowercase) query.
    fn matches(&self, query: &str) -> bool {
        contains_query(&self.search_text(), query)
    }
}

impl Searchable for UserRecord {
    fn search_text(&self) -> String {
        [
            self.name.as_deref().unwrap_or_default(),
            self.username.as_deref().unwrap_or_default(),
            &self.user_id.to_string(),
            self.url.as_deref().unwrap_or_default(),
            self.title.as_deref().unwrap_or_default(),
            self.domain.as_deref().unwrap_or_default(),
            self.country_code.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }
}

/// Items of `items` matching `query`, in their original order.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(query)).collect()
}

/// One rendered row of an aggregate list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SimpleRow {
    /// Leading marker (flag, join/leave dot).
    pub marker: Option<String>,
    /// Main row text.
    pub text: String,
    /// Secondary line (timestamp, description).
    pub detail: Option<String>,
    /// Optional count badge.
    pub badge: Option<u64>,
    /// User the row refers to, enabling the block action.
    pub user_id: Option<i64>,
}

impl SimpleRow {
    /// Row with a count badge.
    #[must_use]
    pub fn with_badge(text: impl Into<String>, count: u64) -> Self {
        Self {
            text: text.into(),
            badge: Some(count),
            ..Self::default()
        }
    }

    /// Row without a badge.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Text the visibility filter is tested against.
    #[must_use]
    pub fn rendered_text(&self) -> String {
        let mut out = String::new();
        for part in [self.marker.as_deref(), Some(self.text.as_str()), self.detail.as_deref()]
            .into_iter()
            .flatten()
        {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(part);
        }
        if let Some(badge) = self.badge {
            out.push(' ');
            out.push_str(&badge.to_string());
        }
        out
    }
}

/// Aggregate list: every row is rendered, the query only hides rows.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SimpleListModel {
    rows: Rc<Vec<SimpleRow>>,
    search: String,
    query: Option<String>,
}

impl SimpleListModel {
    /// Replace the rendered rows, keeping the active query.
    pub fn set_rows(&mut self, rows: Vec<SimpleRow>) {
        self.rows = Rc::new(rows);
    }

    /// Set or clear (blank input) the visibility filter.
    pub fn apply_filter(&mut self, raw: &str) {
        raw.clone_into(&mut self.search);
        self.query = normalize_query(raw);
    }

    /// All rows with their visibility flag.
    pub fn rows(&self) -> impl Iterator<Item = (&SimpleRow, bool)> {
        self.rows.iter().map(|row| (row, self.is_visible(row)))
    }

    /// Whether the list has no rows at all (renders the "no data" placeholder).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Search text exactly as typed.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    fn is_visible(&self, row: &SimpleRow) -> bool {
        self.query
            .as_deref()
            .is_none_or(|query| contains_query(&row.rendered_text(), query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> UserRecord {
        UserRecord {
            user_id: id,
            name: Some(name.to_string()),
            ..UserRecord::default()
        }
    }

    #[test]
    fn user_search_covers_all_fields() {
        let record = UserRecord {
            user_id: 77,
            username: Some("Trinity".into()),
            url: Some("https://vimeo.com/1".into()),
            country_code: Some("DE".into()),
            ..UserRecord::default()
        };
        assert!(record.matches("trinity"));
        assert!(record.matches("77"));
        assert!(record.matches("vimeo"));
        assert!(record.matches("de"));
        assert!(!record.matches("youtube"));
    }

    #[test]
    fn filter_keeps_order_and_source() {
        let items = vec![user(1, "Alpha"), user(2, "Beta"), user(3, "alphabet")];
        let hits = filter_items(&items, "alpha");
        assert_eq!(hits.iter().map(|u| u.user_id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn simple_list_hides_rows_by_text() {
        let mut list = SimpleListModel::default();
        list.set_rows(vec![
            SimpleRow::with_badge("🇩🇪 DE", 5),
            SimpleRow::with_badge("🇫🇷 FR", 3),
        ]);
        list.apply_filter(" FR ");
        let visible: Vec<&str> = list
            .rows()
            .filter(|(_, shown)| *shown)
            .map(|(row, _)| row.text.as_str())
            .collect();
        assert_eq!(visible, vec!["🇫🇷 FR"]);
        assert_eq!(list.rows().count(), 2);
        assert_eq!(list.search_text(), " FR ");
        list.apply_filter("");
        assert!(list.rows().all(|(_, shown)| shown));
    }

    #[test]
    fn reload_keeps_simple_query() {
        let mut list = SimpleListModel::default();
        list.apply_filter("de");
        list.set_rows(vec![SimpleRow::plain("DE"), SimpleRow::plain("US")]);
        assert_eq!(list.search_text(), "de");
        assert_eq!(list.rows().filter(|(_, shown)| *shown).count(), 1);
    }
}
