//! Card loaders and the concurrent refresh orchestrator.

use super::state::{CardId, CardQuery, CardTicket};
use crate::core::net::ApiError;
use async_trait::async_trait;
use botwatch_api_models::{
    ActiveUsersResponse, AgeStat, ChannelEvent, ConfigSnapshot, CountryStat, DomainLists,
    DomainStat, GenderStat, ListsStats, PackageVersions, SystemMetrics, UserRecord,
};
use futures::stream::{FuturesUnordered, StreamExt};

/// Typed payload of one card load.
#[derive(Clone, Debug, PartialEq)]
pub enum CardPayload {
    /// Active sessions.
    Active(ActiveUsersResponse),
    /// Any ranked user list.
    Users(Vec<UserRecord>),
    /// Country ranking.
    Countries(Vec<CountryStat>),
    /// Gender buckets.
    Gender(Vec<GenderStat>),
    /// Age buckets.
    Age(Vec<AgeStat>),
    /// Domain ranking (all or NSFW).
    Domains(Vec<DomainStat>),
    /// Channel timeline.
    Channel(Vec<ChannelEvent>),
    /// Host metrics.
    Metrics(SystemMetrics),
    /// Package versions.
    Versions(PackageVersions),
    /// Configuration snapshot.
    Config(ConfigSnapshot),
    /// Filter list statistics.
    ListsStats(ListsStats),
    /// Editable domain lists.
    DomainLists(DomainLists),
    /// History search index sources: top downloaders and suspicious users.
    HistoryIndex(Vec<UserRecord>, Vec<UserRecord>),
}

/// Something that can load a card's payload.
#[async_trait(?Send)]
pub trait CardSource {
    /// Fetch and decode the payload of `card` for `query`.
    async fn load(&self, card: CardId, query: &CardQuery) -> Result<CardPayload, ApiError>;
}

/// Start every ticket's loader before awaiting any, then report each result as it settles.
///
/// Completion order is unspecified; a failing loader never cancels the others.
pub async fn refresh_cards<S, F>(
    source: &S,
    tickets: Vec<CardTicket>,
    query: &CardQuery,
    mut on_settled: F,
) where
    S: CardSource + ?Sized,
    F: FnMut(CardTicket, Result<CardPayload, ApiError>),
{
    let mut pending: FuturesUnordered<_> = tickets
        .into_iter()
        .map(|ticket| async move { (ticket, source.load(ticket.card, query).await) })
        .collect();
    while let Some((ticket, result)) = pending.next().await {
        on_settled(ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cards::state::CardBoard;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Recording {
        started: RefCell<Vec<CardId>>,
    }

    #[async_trait(?Send)]
    impl CardSource for Recording {
        async fn load(&self, card: CardId, _query: &CardQuery) -> Result<CardPayload, ApiError> {
            self.started.borrow_mut().push(card);
            futures::future::ready(()).await;
            if card == CardId::Age {
                Err(ApiError::Network("offline".into()))
            } else {
                Ok(CardPayload::Users(Vec::new()))
            }
        }
    }

    #[test]
    fn every_loader_reports_even_after_a_failure() {
        let source = Recording {
            started: RefCell::new(Vec::new()),
        };
        let mut board = CardBoard::default();
        let cards = [CardId::Gender, CardId::Age, CardId::Countries];
        let tickets = board.begin_all(&cards);
        let mut settled = Vec::new();
        block_on(refresh_cards(&source, tickets, &CardQuery::default(), |ticket, result| {
            settled.push((ticket.card, result.is_ok()));
        }));
        assert_eq!(source.started.borrow().len(), 3);
        assert_eq!(settled.len(), 3);
        assert!(settled.contains(&(CardId::Age, false)));
        assert!(settled.contains(&(CardId::Countries, true)));
    }
}
