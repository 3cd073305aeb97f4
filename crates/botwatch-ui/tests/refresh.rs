//! Full primary refresh against a scripted source with one failing loader.

use async_trait::async_trait;
use botwatch_api_models::{ActiveUsersResponse, ChannelEvent, DomainStat, GenderStat, UserRecord};
use botwatch_ui::core::net::ApiError;
use botwatch_ui::core::store::AppStore;
use botwatch_ui::features::cards::source::{CardPayload, CardSource, refresh_cards};
use botwatch_ui::features::cards::state::{CardId, CardQuery, CardStatus, PRIMARY_CARDS};
use botwatch_ui::features::lists::state::{ListId, SimpleListId};
use futures::executor::block_on;

struct Scripted {
    failing: CardId,
}

fn users(ids: &[i64]) -> Vec<UserRecord> {
    ids.iter()
        .map(|id| UserRecord {
            user_id: *id,
            count: Some(1),
            ..UserRecord::default()
        })
        .collect()
}

#[async_trait(?Send)]
impl CardSource for Scripted {
    async fn load(&self, card: CardId, _query: &CardQuery) -> Result<CardPayload, ApiError> {
        if card == self.failing {
            return Err(ApiError::Transport {
                status: 502,
                message: "bad gateway".into(),
            });
        }
        Ok(match card {
            CardId::ActiveUsers => CardPayload::Active(ActiveUsersResponse {
                total: 12,
                items: users(&[1, 2]),
            }),
            CardId::Countries => CardPayload::Countries(Vec::new()),
            CardId::Gender => CardPayload::Gender(vec![GenderStat {
                gender: "male".into(),
                count: 4,
            }]),
            CardId::Age => CardPayload::Age(Vec::new()),
            CardId::Domains | CardId::NsfwDomains => CardPayload::Domains(vec![DomainStat {
                domain: Some("youtube.com".into()),
                count: 9,
            }]),
            CardId::ChannelEvents => CardPayload::Channel(vec![ChannelEvent {
                user_id: 5,
                timestamp: 1_700_000_000.0,
                ..ChannelEvent::default()
            }]),
            _ => CardPayload::Users(users(&[3, 4, 5])),
        })
    }
}

fn run(failing: CardId) -> AppStore {
    let mut store = AppStore::default();
    let tickets = store.begin_cards(&PRIMARY_CARDS);
    let query = store.query.clone();
    let source = Scripted { failing };
    block_on(refresh_cards(&source, tickets, &query, |ticket, result| {
        assert!(store.apply_card(ticket, result));
    }));
    store
}

#[test]
fn one_failing_loader_leaves_the_rest_rendered() {
    let store = run(CardId::TopDownloaders);
    for card in PRIMARY_CARDS {
        let status = store.cards.status(card);
        if card == CardId::TopDownloaders {
            assert!(matches!(status, CardStatus::Failed(message) if message == "bad gateway"));
        } else {
            assert_eq!(status, CardStatus::Ready, "{card:?}");
        }
    }
    assert_eq!(store.data.active_total, Some(12));
    assert!(
        store
            .lists
            .list(ListId::TopDownloaders)
            .is_none_or(|list| list.items().is_empty())
    );
    assert_eq!(
        store.lists.list(ListId::BlockedUsers).map(|list| list.items().len()),
        Some(3)
    );
    let domains = store.lists.simple(SimpleListId::Domains).map(|list| list.rows().count());
    assert_eq!(domains, Some(1));
}

#[test]
fn repeated_refresh_replaces_previous_payloads() {
    let mut store = run(CardId::Age);
    let tickets = store.begin_cards(&[CardId::Age]);
    let query = store.query.clone();
    let source = Scripted {
        failing: CardId::ActiveUsers,
    };
    block_on(refresh_cards(&source, tickets, &query, |ticket, result| {
        assert!(store.apply_card(ticket, result));
    }));
    assert_eq!(store.cards.status(CardId::Age), CardStatus::Ready);
    assert_eq!(store.cards.status(CardId::ActiveUsers), CardStatus::Ready);
}
