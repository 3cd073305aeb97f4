//! UI primitives shared across the crate (dashboard tabs).

/// Top-level dashboard tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Live sessions, top downloaders, channel events.
    #[default]
    Activity,
    /// Demographics and user rankings.
    Users,
    /// Domains and content categories.
    Content,
    /// Blocked and suspicious users.
    Moderation,
    /// Per-user download history browser.
    History,
    /// Host metrics, versions, configuration.
    System,
    /// Filter list files and domain lists.
    Lists,
}

impl Tab {
    /// Tabs in navigation order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Activity,
            Self::Users,
            Self::Content,
            Self::Moderation,
            Self::History,
            Self::System,
            Self::Lists,
        ]
    }

    /// Translation key for the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Activity => "tabs.activity",
            Self::Users => "tabs.users",
            Self::Content => "tabs.content",
            Self::Moderation => "tabs.moderation",
            Self::History => "tabs.history",
            Self::System => "tabs.system",
            Self::Lists => "tabs.lists",
        }
    }

    /// Whether the tab's data loads lazily on first activation.
    #[must_use]
    pub const fn is_lazy(self) -> bool {
        matches!(self, Self::History | Self::System | Self::Lists)
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn only_secondary_tabs_are_lazy() {
        let lazy: Vec<Tab> = Tab::all().into_iter().filter(|tab| tab.is_lazy()).collect();
        assert_eq!(lazy, vec![Tab::History, Tab::System, Tab::Lists]);
    }

    #[test]
    fn label_keys_are_namespaced() {
        assert!(Tab::all().iter().all(|tab| tab.label_key().starts_with("tabs.")));
    }
}
