//! Card loading against the live API.
//!
//! # Design
//! - Tickets are issued inside one reducer so generations match the query snapshot.
//! - Failures are logged and rendered on the failing card only.

use crate::core::store::AppStore;
use crate::features::cards::source::refresh_cards;
use crate::features::cards::state::CardId;
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Start loaders for `cards` and apply each result as it settles.
pub(crate) fn load_cards(client: Rc<ApiClient>, cards: &[CardId]) {
    if cards.is_empty() {
        return;
    }
    let dispatch = Dispatch::<AppStore>::new();
    let mut tickets = Vec::new();
    let mut query = None;
    dispatch.reduce_mut(|store| {
        tickets = store.begin_cards(cards);
        query = Some(store.query.clone());
    });
    let query = query.unwrap_or_default();
    yew::platform::spawn_local(async move {
        refresh_cards(client.as_ref(), tickets, &query, |ticket, result| {
            if let Err(err) = &result {
                console::warn!("card load failed", format!("{:?}", ticket.card), err.to_string());
            }
            dispatch.reduce_mut(|store| {
                store.apply_card(ticket, result);
            });
        })
        .await;
    });
}
