//! History modal loading.

use crate::core::store::AppStore;
use crate::features::history::state::{HistoryView, display_name};
use crate::features::modal::state::{ModalBody, ModalTitle};
use crate::services::api::ApiClient;
use botwatch_api_models::UserRecord;
use gloo::console;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Open the history modal for `user` and fetch its entries.
pub(crate) fn open_history(client: Rc<ApiClient>, user: &UserRecord) {
    let user_id = user.user_id;
    let title = ModalTitle::History {
        name: display_name(user),
    };
    let dispatch = Dispatch::<AppStore>::new();
    dispatch.reduce_mut(|store| {
        store
            .modal
            .open(title, ModalBody::History(HistoryView::loading(user_id)));
    });
    yew::platform::spawn_local(async move {
        let result = client.fetch_history(user_id).await;
        if let Err(err) = &result {
            console::warn!("history load failed", user_id.to_string(), err.to_string());
        }
        dispatch.reduce_mut(|store| {
            store.apply_history(user_id, result);
        });
    });
}
