//! List view models and the keyed registry that owns them.
//!
//! A [`ListViewModel`] holds the authoritative items of one itemized list plus
//! its view flags. Invariants:
//! - `visible = expanded ? items : items[..display_limit]` when no filter is set.
//! - An active filter shows every match, never replaces `items` and never
//!   touches `expanded`, so clearing it restores the pre-filter view exactly.
//! - The expand control is hidden whenever `items.len() <= display_limit`.

use super::search::{Searchable, SimpleListModel, SimpleRow, filter_items};
use crate::core::logic::normalize_query;
use botwatch_api_models::UserRecord;
use std::collections::HashMap;
use std::rc::Rc;

/// Itemized (user record) lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListId {
    /// Active sessions.
    ActiveUsers,
    /// Top downloaders.
    TopDownloaders,
    /// Suspicious users.
    SuspiciousUsers,
    /// NSFW users.
    NsfwUsers,
    /// Playlist users.
    PlaylistUsers,
    /// Power users.
    PowerUsers,
    /// Blocked users.
    BlockedUsers,
}

impl ListId {
    /// Every itemized list.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::ActiveUsers,
            Self::TopDownloaders,
            Self::SuspiciousUsers,
            Self::NsfwUsers,
            Self::PlaylistUsers,
            Self::PowerUsers,
            Self::BlockedUsers,
        ]
    }

    /// Row template used by this list.
    #[must_use]
    pub const fn template(self) -> RowTemplate {
        match self {
            Self::ActiveUsers => RowTemplate::Active,
            Self::TopDownloaders | Self::NsfwUsers | Self::PlaylistUsers => RowTemplate::Ranked,
            Self::SuspiciousUsers => RowTemplate::Suspicious,
            Self::PowerUsers => RowTemplate::Streak,
            Self::BlockedUsers => RowTemplate::Blocked,
        }
    }
}

/// Aggregate lists rendered as plain text rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimpleListId {
    /// Countries with flags.
    Countries,
    /// Gender buckets.
    Gender,
    /// Registration-age buckets.
    Age,
    /// Top domains.
    Domains,
    /// NSFW domains.
    NsfwDomains,
    /// Channel join/leave timeline.
    ChannelEvents,
}

/// Reusable row templates for user records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTemplate {
    /// Link/title meta plus a progress bar or last-seen time.
    Active,
    /// Count badge.
    Ranked,
    /// Download total plus the largest break between downloads.
    Suspicious,
    /// Consecutive-day streak.
    Streak,
    /// Block date plus an unblock action.
    Blocked,
}

/// State of the "show all / collapse" control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandControl {
    /// Not rendered.
    Hidden,
    /// Rendered with the "show all" label.
    ShowAll,
    /// Rendered with the "collapse" label.
    Collapse,
}

impl ExpandControl {
    /// Translation key for the control label, `None` when hidden.
    #[must_use]
    pub const fn label_key(self) -> Option<&'static str> {
        match self {
            Self::Hidden => None,
            Self::ShowAll => Some("buttons.show_all"),
            Self::Collapse => Some("buttons.collapse"),
        }
    }
}

/// View model for one itemized list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListViewModel<T> {
    items: Rc<Vec<T>>,
    template: RowTemplate,
    expanded: bool,
    display_limit: usize,
    search: String,
    filter: Option<String>,
}

impl<T: Searchable> ListViewModel<T> {
    /// Empty, collapsed list.
    #[must_use]
    pub fn new(template: RowTemplate, display_limit: usize) -> Self {
        Self {
            items: Rc::new(Vec::new()),
            template,
            expanded: false,
            display_limit,
            search: String::new(),
            filter: None,
        }
    }

    /// Replace the authoritative items and template; `expanded` and the filter persist.
    pub fn set_items(&mut self, items: Vec<T>, template: RowTemplate) {
        self.items = Rc::new(items);
        self.template = template;
    }

    /// Flip `expanded`. Ignored while a filter is active (the control is hidden then).
    pub fn toggle_expand(&mut self) {
        if self.filter.is_none() {
            self.expanded = !self.expanded;
        }
    }

    /// Set the search query; a blank query clears the filter.
    ///
    /// The typed text is kept verbatim for the input box and only the
    /// matcher sees the normalised form.
    pub fn apply_filter(&mut self, raw: &str) {
        raw.clone_into(&mut self.search);
        self.filter = normalize_query(raw);
    }

    /// Rows to render right now.
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        match self.filter.as_deref() {
            Some(query) => filter_items(&self.items, query),
            None if self.expanded => self.items.iter().collect(),
            None => self.items.iter().take(self.display_limit).collect(),
        }
    }

    /// Expand control state for the unfiltered view.
    #[must_use]
    pub fn expand_control(&self) -> ExpandControl {
        if self.filter.is_some() || self.items.len() <= self.display_limit {
            ExpandControl::Hidden
        } else if self.expanded {
            ExpandControl::Collapse
        } else {
            ExpandControl::ShowAll
        }
    }

    /// Authoritative items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Persistent expand flag.
    #[must_use]
    pub const fn expanded(&self) -> bool {
        self.expanded
    }

    /// Search text exactly as typed.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Row template.
    #[must_use]
    pub const fn template(&self) -> RowTemplate {
        self.template
    }
}

/// Owner of every list's view state, keyed by list id.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRegistry {
    display_limit: usize,
    itemized: HashMap<ListId, ListViewModel<UserRecord>>,
    simple: HashMap<SimpleListId, SimpleListModel>,
}

impl Default for ListRegistry {
    fn default() -> Self {
        Self::new(crate::core::settings::DashboardSettings::default().display_limit)
    }
}

impl ListRegistry {
    /// Registry whose lists collapse to `display_limit` rows.
    #[must_use]
    pub fn new(display_limit: usize) -> Self {
        Self {
            display_limit,
            itemized: HashMap::new(),
            simple: HashMap::new(),
        }
    }

    /// View model for `id`, created empty on first access.
    pub fn list_mut(&mut self, id: ListId) -> &mut ListViewModel<UserRecord> {
        let limit = self.display_limit;
        self.itemized
            .entry(id)
            .or_insert_with(|| ListViewModel::new(id.template(), limit))
    }

    /// View model for `id`, if it was ever populated or touched.
    #[must_use]
    pub fn list(&self, id: ListId) -> Option<&ListViewModel<UserRecord>> {
        self.itemized.get(&id)
    }

    /// Replace the items of an itemized list.
    pub fn set_items(&mut self, id: ListId, items: Vec<UserRecord>) {
        self.list_mut(id).set_items(items, id.template());
    }

    /// Flip the expand flag of an itemized list.
    pub fn toggle_expand(&mut self, id: ListId) {
        self.list_mut(id).toggle_expand();
    }

    /// Apply a search query to an itemized list.
    pub fn apply_filter(&mut self, id: ListId, raw: &str) {
        self.list_mut(id).apply_filter(raw);
    }

    /// Simple list for `id`, created empty on first access.
    pub fn simple_mut(&mut self, id: SimpleListId) -> &mut SimpleListModel {
        self.simple.entry(id).or_default()
    }

    /// Simple list for `id`.
    #[must_use]
    pub fn simple(&self, id: SimpleListId) -> Option<&SimpleListModel> {
        self.simple.get(&id)
    }

    /// Replace the rows of a simple list.
    pub fn set_rows(&mut self, id: SimpleListId, rows: Vec<SimpleRow>) {
        self.simple_mut(id).set_rows(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(count: i64) -> Vec<UserRecord> {
        (1..=count)
            .map(|id| UserRecord {
                user_id: id,
                count: Some(u64::try_from(100 - id).unwrap_or_default()),
                ..UserRecord::default()
            })
            .collect()
    }

    fn model(count: i64) -> ListViewModel<UserRecord> {
        let mut model = ListViewModel::new(RowTemplate::Ranked, 10);
        model.set_items(users(count), RowTemplate::Ranked);
        model
    }

    #[test]
    fn visible_length_follows_limit_and_expand() {
        for count in [0_i64, 3, 10, 11, 25] {
            let mut list = model(count);
            let len = usize::try_from(count).unwrap_or_default();
            assert_eq!(list.visible().len(), len.min(10));
            list.toggle_expand();
            assert_eq!(list.visible().len(), len);
        }
    }

    #[test]
    fn expand_control_hidden_at_or_below_limit() {
        assert_eq!(model(0).expand_control(), ExpandControl::Hidden);
        assert_eq!(model(10).expand_control(), ExpandControl::Hidden);
        let mut list = model(11);
        assert_eq!(list.expand_control(), ExpandControl::ShowAll);
        list.toggle_expand();
        assert_eq!(list.expand_control(), ExpandControl::Collapse);
        assert_eq!(list.expand_control().label_key(), Some("buttons.collapse"));
    }

    #[test]
    fn set_items_keeps_expanded() {
        let mut list = model(20);
        list.toggle_expand();
        list.set_items(users(30), RowTemplate::Ranked);
        assert!(list.expanded());
        assert_eq!(list.visible().len(), 30);
    }

    #[test]
    fn filter_shows_match_beyond_limit_without_touching_items() {
        let mut list = model(2);
        list = ListViewModel {
            display_limit: 1,
            ..list
        };
        list.apply_filter("2");
        let visible = list.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].user_id, 2);
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn clearing_filter_restores_prior_expanded_state() {
        for initially_expanded in [false, true] {
            let mut list = model(25);
            if initially_expanded {
                list.toggle_expand();
            }
            list.apply_filter("1");
            list.toggle_expand();
            assert_eq!(list.expand_control(), ExpandControl::Hidden);
            list.apply_filter("   ");
            assert_eq!(list.expanded(), initially_expanded);
            let expected = if initially_expanded { 25 } else { 10 };
            assert_eq!(list.visible().len(), expected);
        }
    }

    #[test]
    fn filter_keeps_typed_text() {
        let mut registry = ListRegistry::new(10);
        registry.set_items(ListId::TopDownloaders, users(12));
        registry.apply_filter(ListId::TopDownloaders, "John ");
        let top = registry.list(ListId::TopDownloaders).expect("top list");
        assert_eq!(top.search_text(), "John ");
        assert_eq!(top.expand_control(), ExpandControl::Hidden);
        registry.apply_filter(ListId::TopDownloaders, "  ");
        let top = registry.list(ListId::TopDownloaders).expect("top list");
        assert_eq!(top.search_text(), "  ");
        assert_eq!(top.visible().len(), 10);
    }

    #[test]
    fn registry_keeps_state_per_list() {
        let mut registry = ListRegistry::new(10);
        registry.set_items(ListId::TopDownloaders, users(15));
        registry.set_items(ListId::BlockedUsers, users(15));
        registry.toggle_expand(ListId::TopDownloaders);
        registry.set_items(ListId::TopDownloaders, users(12));
        let top = registry.list(ListId::TopDownloaders).expect("top list");
        assert!(top.expanded());
        assert_eq!(top.template(), RowTemplate::Ranked);
        let blocked = registry.list(ListId::BlockedUsers).expect("blocked list");
        assert!(!blocked.expanded());
        assert_eq!(blocked.visible().len(), 10);
    }

    #[test]
    fn registry_simple_lists_are_independent() {
        let mut registry = ListRegistry::default();
        registry.set_rows(SimpleListId::Domains, vec![SimpleRow::with_badge("youtube.com", 4)]);
        registry.simple_mut(SimpleListId::Domains).apply_filter("vimeo");
        assert!(registry.simple(SimpleListId::Countries).is_none());
        let domains = registry.simple(SimpleListId::Domains).expect("domains");
        assert_eq!(domains.rows().filter(|(_, shown)| *shown).count(), 0);
    }
}
