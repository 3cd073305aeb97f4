//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Card results are applied through one reducer that drops stale tickets.

use crate::core::net::ApiError;
use crate::core::status::StatusSignal;
use crate::core::theme::ThemeMode;
use crate::core::ui::Tab;
use crate::features::cards::logic::{age_rows, channel_rows, country_rows, domain_rows, gender_rows};
use crate::features::cards::source::CardPayload;
use crate::features::cards::state::{CardBoard, CardId, CardQuery, CardTicket};
use crate::features::config::state::ConfigRows;
use crate::features::domain_lists::state::DomainListsState;
use crate::features::history::state::HistoryUserIndex;
use crate::features::lists::search::SimpleRow;
use crate::features::lists::state::{ListId, ListRegistry};
use crate::features::modal::state::ModalState;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use botwatch_api_models::{ConfigSnapshot, HistoryEntry, ListsStats, PackageVersions, SystemMetrics};
use std::collections::HashSet;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// In-flight request counter behind the status chip.
    pub status: StatusSignal,
    /// Locale and theme.
    pub preferences: PreferencesSlice,
    /// Tab navigation.
    pub ui: UiSlice,
    /// Request parameters chosen by the operator.
    pub query: CardQuery,
    /// Per-card load status.
    pub cards: CardBoard,
    /// List view models.
    pub lists: ListRegistry,
    /// Non-list card payloads.
    pub data: DataSlice,
    /// Config editor drafts.
    pub config_rows: ConfigRows,
    /// Domain list editors.
    pub domain_lists: DomainListsState,
    /// History tab user index.
    pub history_index: HistoryUserIndex,
    /// Shared modal.
    pub modal: ModalState,
}

/// Persisted presentation preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferencesSlice {
    /// Active locale.
    pub locale: LocaleCode,
    /// Active theme.
    pub theme: ThemeMode,
}

impl Default for PreferencesSlice {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            theme: ThemeMode::default(),
        }
    }
}

/// Tab navigation state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UiSlice {
    /// Visible tab.
    pub tab: Tab,
    /// Lazy tabs whose data has been requested at least once.
    pub activated: HashSet<Tab>,
}

/// Card payloads rendered outside the list view models.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DataSlice {
    /// Active session total shown next to the active users card.
    pub active_total: Option<u64>,
    /// Host metrics.
    pub metrics: Option<SystemMetrics>,
    /// Package versions.
    pub versions: Option<PackageVersions>,
    /// Configuration snapshot.
    pub config: Option<ConfigSnapshot>,
    /// List file statistics.
    pub lists_stats: Option<ListsStats>,
}

impl AppStore {
    /// Switch tabs. Returns the cards to load when a lazy tab opens for the first time.
    pub fn activate_tab(&mut self, tab: Tab) -> &'static [CardId] {
        self.ui.tab = tab;
        if tab.is_lazy() && self.ui.activated.insert(tab) {
            CardId::lazy_cards(tab)
        } else {
            &[]
        }
    }

    /// Mark `cards` loading and hand out their tickets.
    pub fn begin_cards(&mut self, cards: &[CardId]) -> Vec<CardTicket> {
        self.cards.begin_all(cards)
    }

    /// Apply a settled card load. Returns `false` when the ticket is stale.
    pub fn apply_card(
        &mut self,
        ticket: CardTicket,
        result: Result<CardPayload, ApiError>,
    ) -> bool {
        let payload = match result {
            Ok(payload) => {
                if !self.cards.settle(ticket, Ok(())) {
                    return false;
                }
                payload
            }
            Err(error) => return self.cards.settle(ticket, Err(error.to_string())),
        };
        let card = ticket.card;
        match payload {
            CardPayload::Active(response) => {
                self.data.active_total = Some(response.total);
                self.lists.set_items(ListId::ActiveUsers, response.items);
            }
            CardPayload::Users(items) => {
                if let Some(list) = card.list() {
                    self.lists.set_items(list, items);
                }
            }
            CardPayload::Countries(stats) => self.set_simple_rows(card, country_rows(&stats)),
            CardPayload::Gender(stats) => self.set_simple_rows(card, gender_rows(&stats)),
            CardPayload::Age(stats) => self.set_simple_rows(card, age_rows(&stats)),
            CardPayload::Domains(stats) => self.set_simple_rows(card, domain_rows(&stats)),
            CardPayload::Channel(events) => self.set_simple_rows(card, channel_rows(&events)),
            CardPayload::Metrics(metrics) => self.data.metrics = Some(metrics),
            CardPayload::Versions(versions) => self.data.versions = Some(versions),
            CardPayload::Config(snapshot) => {
                self.config_rows.reset();
                self.data.config = Some(snapshot);
            }
            CardPayload::ListsStats(stats) => self.data.lists_stats = Some(stats),
            CardPayload::DomainLists(lists) => {
                self.domain_lists = DomainListsState::from_lists(lists);
            }
            CardPayload::HistoryIndex(top, suspicious) => {
                self.history_index = HistoryUserIndex::merge([top, suspicious]);
            }
        }
        true
    }

    fn set_simple_rows(&mut self, card: CardId, rows: Vec<SimpleRow>) {
        if let Some(list) = card.simple_list() {
            self.lists.set_rows(list, rows);
        }
    }

    /// Hand a history fetch result to the open history modal.
    ///
    /// Ignored when the modal was closed or now shows another user.
    pub fn apply_history(
        &mut self,
        user_id: i64,
        result: Result<Vec<HistoryEntry>, ApiError>,
    ) -> bool {
        self.modal
            .history_mut()
            .is_some_and(|view| view.finish(user_id, result.map_err(|error| error.to_string())))
    }
}
