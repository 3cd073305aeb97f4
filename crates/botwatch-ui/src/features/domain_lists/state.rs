//! Domain list editor state.

use crate::core::logic::{contains_query, normalize_query};
use botwatch_api_models::{DomainListUpdateRequest, DomainLists, ListsStats};

/// File statistics rows as `(file name, line count)`.
#[must_use]
pub fn stats_rows(stats: &ListsStats) -> [(&'static str, u64); 3] {
    [
        ("porn_domains.txt", stats.porn_domains),
        ("porn_keywords.txt", stats.porn_keywords),
        ("supported_sites.txt", stats.supported_sites),
    ]
}

/// Editable copy of one named list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DomainListEditor {
    name: String,
    items: Vec<String>,
    search: String,
    draft: String,
}

impl DomainListEditor {
    /// Editor seeded with the server's items.
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
            ..Self::default()
        }
    }

    /// List name as sent to the server.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text of the add-item input.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Update the add-item input.
    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Update the row filter.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    /// Current row filter.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Append the trimmed draft. Blank input and duplicates are ignored.
    pub fn add_draft(&mut self) -> bool {
        let item = self.draft.trim().to_string();
        if item.is_empty() || self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        self.draft.clear();
        true
    }

    /// Remove the item at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Items passing the search, with their positions.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> {
        let query = normalize_query(&self.search);
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, item)| {
                query
                    .as_deref()
                    .is_none_or(|query| contains_query(item, query))
            })
            .map(|(index, item)| (index, item.as_str()))
    }

    /// Save request carrying every held item.
    #[must_use]
    pub fn payload(&self) -> DomainListUpdateRequest {
        DomainListUpdateRequest {
            list_name: self.name.clone(),
            items: self
                .items
                .iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }
}

/// Every editable list keyed by name, in server order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DomainListsState {
    editors: Vec<DomainListEditor>,
}

impl DomainListsState {
    /// Replace all editors from a fresh snapshot.
    #[must_use]
    pub fn from_lists(lists: DomainLists) -> Self {
        Self {
            editors: lists
                .into_iter()
                .map(|(name, items)| DomainListEditor::new(name, items))
                .collect(),
        }
    }

    /// Editors in display order.
    #[must_use]
    pub fn editors(&self) -> &[DomainListEditor] {
        &self.editors
    }

    /// Editor for `name`.
    pub fn editor_mut(&mut self, name: &str) -> Option<&mut DomainListEditor> {
        self.editors.iter_mut().find(|editor| editor.name == name)
    }

    /// Editor for `name`.
    #[must_use]
    pub fn editor(&self, name: &str) -> Option<&DomainListEditor> {
        self.editors.iter().find(|editor| editor.name == name)
    }
}
