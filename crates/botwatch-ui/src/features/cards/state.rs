//! Card registry, request parameters and per-card load status.

use crate::core::settings::DashboardSettings;
use crate::core::ui::Tab;
use crate::features::lists::state::{ListId, SimpleListId};
use botwatch_api_models::Period;
use std::collections::HashMap;

/// Every data card the dashboard can load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardId {
    /// Active sessions with a total counter.
    ActiveUsers,
    /// Top downloaders for a period.
    TopDownloaders,
    /// Top countries for a period.
    Countries,
    /// Gender buckets for a period.
    Gender,
    /// Registration-age buckets for a period.
    Age,
    /// Top domains for a period.
    Domains,
    /// Top NSFW users.
    NsfwUsers,
    /// Top NSFW domains.
    NsfwDomains,
    /// Top playlist users.
    PlaylistUsers,
    /// Users above the power thresholds.
    PowerUsers,
    /// Blocked users.
    BlockedUsers,
    /// Log-channel join/leave events.
    ChannelEvents,
    /// Users with the smallest breaks between downloads.
    SuspiciousUsers,
    /// Host metrics (system tab).
    SystemMetrics,
    /// Engine package versions (system tab).
    PackageVersions,
    /// Editable configuration (system tab).
    ConfigSettings,
    /// Filter list line counts (lists tab).
    ListsStats,
    /// Editable domain lists (lists tab).
    DomainLists,
    /// Searchable user index (history tab).
    HistoryIndex,
}

/// Cards refreshed by `refresh_all`, in registry order.
pub const PRIMARY_CARDS: [CardId; 13] = [
    CardId::ActiveUsers,
    CardId::TopDownloaders,
    CardId::Countries,
    CardId::Gender,
    CardId::Age,
    CardId::Domains,
    CardId::NsfwUsers,
    CardId::NsfwDomains,
    CardId::PlaylistUsers,
    CardId::PowerUsers,
    CardId::BlockedUsers,
    CardId::ChannelEvents,
    CardId::SuspiciousUsers,
];

impl CardId {
    /// Cards loaded when a lazy tab is first activated.
    #[must_use]
    pub const fn lazy_cards(tab: Tab) -> &'static [Self] {
        match tab {
            Tab::System => &[Self::SystemMetrics, Self::PackageVersions, Self::ConfigSettings],
            Tab::Lists => &[Self::ListsStats, Self::DomainLists],
            Tab::History => &[Self::HistoryIndex],
            Tab::Activity | Tab::Users | Tab::Content | Tab::Moderation => &[],
        }
    }

    /// Tab the card is shown on.
    #[must_use]
    pub const fn tab(self) -> Tab {
        match self {
            Self::ActiveUsers | Self::TopDownloaders | Self::ChannelEvents => Tab::Activity,
            Self::Countries | Self::Gender | Self::Age | Self::PowerUsers | Self::PlaylistUsers => {
                Tab::Users
            }
            Self::Domains | Self::NsfwDomains | Self::NsfwUsers => Tab::Content,
            Self::SuspiciousUsers | Self::BlockedUsers => Tab::Moderation,
            Self::SystemMetrics | Self::PackageVersions | Self::ConfigSettings => Tab::System,
            Self::ListsStats | Self::DomainLists => Tab::Lists,
            Self::HistoryIndex => Tab::History,
        }
    }

    /// Itemized list fed by this card.
    #[must_use]
    pub const fn list(self) -> Option<ListId> {
        match self {
            Self::ActiveUsers => Some(ListId::ActiveUsers),
            Self::TopDownloaders => Some(ListId::TopDownloaders),
            Self::SuspiciousUsers => Some(ListId::SuspiciousUsers),
            Self::NsfwUsers => Some(ListId::NsfwUsers),
            Self::PlaylistUsers => Some(ListId::PlaylistUsers),
            Self::PowerUsers => Some(ListId::PowerUsers),
            Self::BlockedUsers => Some(ListId::BlockedUsers),
            _ => None,
        }
    }

    /// Simple list fed by this card.
    #[must_use]
    pub const fn simple_list(self) -> Option<SimpleListId> {
        match self {
            Self::Countries => Some(SimpleListId::Countries),
            Self::Gender => Some(SimpleListId::Gender),
            Self::Age => Some(SimpleListId::Age),
            Self::Domains => Some(SimpleListId::Domains),
            Self::NsfwDomains => Some(SimpleListId::NsfwDomains),
            Self::ChannelEvents => Some(SimpleListId::ChannelEvents),
            _ => None,
        }
    }

    /// Translation key of the card heading.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::ActiveUsers => "cards.active.title",
            Self::TopDownloaders => "cards.top_downloaders.title",
            Self::Countries => "cards.countries.title",
            Self::Gender => "cards.gender.gender_label",
            Self::Age => "cards.gender.age_label",
            Self::Domains => "cards.domains.title",
            Self::NsfwUsers => "cards.nsfw_users.title",
            Self::NsfwDomains => "cards.nsfw_domains.title",
            Self::PlaylistUsers => "cards.playlists.title",
            Self::PowerUsers => "cards.power.title",
            Self::BlockedUsers => "cards.blocked.title",
            Self::ChannelEvents => "cards.channel.title",
            Self::SuspiciousUsers => "cards.suspicious.title",
            Self::SystemMetrics => "system.metrics",
            Self::PackageVersions => "system.versions",
            Self::ConfigSettings => "system.config",
            Self::ListsStats => "lists.stats",
            Self::DomainLists => "lists.domains",
            Self::HistoryIndex => "history.title",
        }
    }

    /// Translation key of the card subtitle, when it has one.
    #[must_use]
    pub const fn subtitle_key(self) -> Option<&'static str> {
        match self {
            Self::ActiveUsers => Some("cards.active.subtitle"),
            Self::TopDownloaders => Some("cards.top_downloaders.subtitle"),
            Self::Countries => Some("cards.countries.subtitle"),
            Self::Gender | Self::Age => Some("cards.gender.subtitle"),
            Self::Domains => Some("cards.domains.subtitle"),
            Self::NsfwUsers => Some("cards.nsfw_users.subtitle"),
            Self::NsfwDomains => Some("cards.nsfw_domains.subtitle"),
            Self::PlaylistUsers => Some("cards.playlists.subtitle"),
            Self::PowerUsers => Some("cards.power.subtitle"),
            Self::BlockedUsers => Some("cards.blocked.subtitle"),
            Self::ChannelEvents => Some("cards.channel.subtitle"),
            Self::SuspiciousUsers => Some("cards.suspicious.subtitle"),
            Self::HistoryIndex => Some("history.subtitle"),
            _ => None,
        }
    }
}

/// Cards whose ranking period is user selectable; one selector per group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodGroup {
    /// Top downloaders.
    TopDownloaders,
    /// Countries, gender and age.
    Demographics,
    /// Top domains.
    Domains,
    /// Suspicious users.
    Suspicious,
}

impl PeriodGroup {
    /// Every group.
    pub const ALL: [Self; 4] = [
        Self::TopDownloaders,
        Self::Demographics,
        Self::Domains,
        Self::Suspicious,
    ];

    /// Group whose selector is rendered on `card`.
    #[must_use]
    pub fn hosted_by(card: CardId) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.cards().first() == Some(&card))
    }

    /// Cards reloaded when the group's period changes.
    #[must_use]
    pub const fn cards(self) -> &'static [CardId] {
        match self {
            Self::TopDownloaders => &[CardId::TopDownloaders],
            Self::Demographics => &[CardId::Countries, CardId::Gender, CardId::Age],
            Self::Domains => &[CardId::Domains],
            Self::Suspicious => &[CardId::SuspiciousUsers],
        }
    }
}

/// Power-user thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerThresholds {
    /// Minimum URLs per day.
    pub min_urls: u32,
    /// Consecutive days.
    pub days: u32,
}

/// User-controlled request parameters shared by the card loaders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardQuery {
    /// Active-users window in minutes.
    pub active_minutes: u32,
    /// Channel-events window in hours.
    pub channel_hours: u32,
    /// Period per selectable group.
    pub periods: HashMap<PeriodGroup, Period>,
    /// Period used by groups the user has not changed.
    pub default_period: Period,
    /// Power-user thresholds.
    pub power: PowerThresholds,
}

impl CardQuery {
    /// Query seeded from dashboard defaults.
    #[must_use]
    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self {
            active_minutes: settings.active_minutes,
            channel_hours: settings.channel_hours,
            periods: HashMap::new(),
            default_period: settings.default_period,
            power: PowerThresholds {
                min_urls: settings.power_min_urls,
                days: settings.power_days,
            },
        }
    }

    /// Period selected for `group`.
    #[must_use]
    pub fn period(&self, group: PeriodGroup) -> Period {
        self.periods
            .get(&group)
            .copied()
            .unwrap_or(self.default_period)
    }

    /// Change the period of `group`, returning the cards to reload.
    pub fn set_period(&mut self, group: PeriodGroup, period: Period) -> &'static [CardId] {
        self.periods.insert(group, period);
        group.cards()
    }
}

impl Default for CardQuery {
    fn default() -> Self {
        Self::from_settings(&DashboardSettings::default())
    }
}

/// Load status of one card.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CardStatus {
    /// Never requested.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Last accepted request succeeded.
    Ready,
    /// Last accepted request failed with this message.
    Failed(String),
}

impl CardStatus {
    /// Placeholder for a card whose list has no rows yet.
    ///
    /// A card that has not settled shows the loading text, not "no data".
    #[must_use]
    pub const fn empty_list_key(&self) -> &'static str {
        match self {
            Self::Idle | Self::Loading => "misc.loading",
            Self::Ready | Self::Failed(_) => "misc.empty",
        }
    }
}

/// Handle pairing a card with the generation of the request that will fill it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardTicket {
    /// Target card.
    pub card: CardId,
    /// Request generation.
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
struct CardSlot {
    status: CardStatus,
    generation: u64,
}

/// Per-card status with last-request-wins semantics.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CardBoard {
    slots: HashMap<CardId, CardSlot>,
    counter: u64,
}

impl CardBoard {
    /// Start a request for `card`; any in-flight request for it becomes stale.
    pub fn begin(&mut self, card: CardId) -> CardTicket {
        self.counter += 1;
        let slot = self.slots.entry(card).or_default();
        slot.generation = self.counter;
        slot.status = CardStatus::Loading;
        CardTicket {
            card,
            generation: self.counter,
        }
    }

    /// Start requests for every card in `cards`.
    pub fn begin_all(&mut self, cards: &[CardId]) -> Vec<CardTicket> {
        cards.iter().map(|card| self.begin(*card)).collect()
    }

    /// Whether `ticket` still identifies the latest request for its card.
    #[must_use]
    pub fn is_current(&self, ticket: CardTicket) -> bool {
        self.slots
            .get(&ticket.card)
            .is_some_and(|slot| slot.generation == ticket.generation)
    }

    /// Record the outcome of a request. Returns `false` (and changes nothing)
    /// when the ticket is stale.
    pub fn settle(&mut self, ticket: CardTicket, outcome: Result<(), String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let Some(slot) = self.slots.get_mut(&ticket.card) else {
            return false;
        };
        slot.status = match outcome {
            Ok(()) => CardStatus::Ready,
            Err(message) => CardStatus::Failed(message),
        };
        true
    }

    /// Current status of `card`.
    #[must_use]
    pub fn status(&self, card: CardId) -> CardStatus {
        self.slots
            .get(&card)
            .map(|slot| slot.status.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_group_has_one_hosting_card() {
        assert_eq!(
            PeriodGroup::hosted_by(CardId::Countries),
            Some(PeriodGroup::Demographics)
        );
        assert_eq!(PeriodGroup::hosted_by(CardId::Gender), None);
        let hosts = PRIMARY_CARDS
            .iter()
            .filter(|card| PeriodGroup::hosted_by(**card).is_some())
            .count();
        assert_eq!(hosts, PeriodGroup::ALL.len());
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut board = CardBoard::default();
        let first = board.begin(CardId::TopDownloaders);
        let second = board.begin(CardId::TopDownloaders);
        assert!(board.settle(second, Ok(())));
        assert!(!board.settle(first, Err("late failure".into())));
        assert_eq!(board.status(CardId::TopDownloaders), CardStatus::Ready);
    }

    #[test]
    fn first_load_shows_loading_placeholder() {
        let mut board = CardBoard::default();
        assert_eq!(board.status(CardId::Countries).empty_list_key(), "misc.loading");
        let ticket = board.begin(CardId::Countries);
        assert!(board.is_current(ticket));
        assert_eq!(board.status(CardId::Countries).empty_list_key(), "misc.loading");
        assert!(board.settle(ticket, Ok(())));
        assert_eq!(board.status(CardId::Countries).empty_list_key(), "misc.empty");
        let retry = board.begin(CardId::Countries);
        assert!(!board.is_current(ticket));
        assert!(board.settle(retry, Err("offline".into())));
        assert_eq!(board.status(CardId::Countries).empty_list_key(), "misc.empty");
    }

    #[test]
    fn failure_is_scoped_to_its_card() {
        let mut board = CardBoard::default();
        let tickets = board.begin_all(&PRIMARY_CARDS);
        for ticket in &tickets {
            let outcome = if ticket.card == CardId::Domains {
                Err("boom".to_string())
            } else {
                Ok(())
            };
            assert!(board.settle(*ticket, outcome));
        }
        assert_eq!(board.status(CardId::Domains), CardStatus::Failed("boom".into()));
        assert_eq!(board.status(CardId::Countries), CardStatus::Ready);
        assert_eq!(board.status(CardId::SystemMetrics), CardStatus::Idle);
    }

    #[test]
    fn every_card_maps_to_one_container_or_tab() {
        for card in PRIMARY_CARDS {
            assert!(card.list().is_some() ^ card.simple_list().is_some(), "{card:?}");
            assert!(!card.tab().is_lazy());
        }
        for tab in [Tab::System, Tab::Lists, Tab::History] {
            assert!(CardId::lazy_cards(tab).iter().all(|card| card.tab() == tab));
            assert!(CardId::lazy_cards(tab).iter().all(|card| !PRIMARY_CARDS.contains(card)));
        }
    }

    #[test]
    fn period_change_names_affected_cards() {
        let mut query = CardQuery::default();
        assert_eq!(query.period(PeriodGroup::Domains), Period::Today);
        let reload = query.set_period(PeriodGroup::Demographics, Period::Week);
        assert_eq!(reload, &[CardId::Countries, CardId::Gender, CardId::Age]);
        assert_eq!(query.period(PeriodGroup::Demographics), Period::Week);
    }
}
