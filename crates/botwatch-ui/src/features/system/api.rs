//! Confirmed admin and moderation requests.
//!
//! # Design
//! - Ask for confirmation before any request is sent.
//! - Report the outcome with a blocking alert, then reload the affected cards.

use crate::features::cards::api::load_cards;
use crate::features::system::actions::{AdminAction, ModerationAction};
use crate::i18n::TranslationBundle;
use crate::services::api::ApiClient;
use gloo::console;
use gloo::dialogs::{alert, confirm};
use std::rc::Rc;

/// Confirm and run `action`, alerting the result.
pub(crate) fn run_admin_action(
    client: Rc<ApiClient>,
    action: AdminAction,
    bundle: TranslationBundle,
) {
    if !confirm(&action.confirm_text(&bundle)) {
        return;
    }
    yew::platform::spawn_local(async move {
        let result = client.run_admin(action).await.map_err(|err| err.to_string());
        if let Err(err) = &result {
            console::error!("admin action failed", action.endpoint(), err.clone());
        }
        alert(&action.result_text(&result, &bundle));
        if result.as_ref().is_ok_and(|response| response.is_ok()) {
            load_cards(client, action.reloads());
        }
    });
}

/// Confirm and block or unblock `user_id`; the blocked list reloads either way.
pub(crate) fn moderate_user(
    client: Rc<ApiClient>,
    action: ModerationAction,
    user_id: i64,
    bundle: TranslationBundle,
) {
    if !confirm(&action.confirm_text(user_id, &bundle)) {
        return;
    }
    yew::platform::spawn_local(async move {
        if let Err(err) = client.moderate(action, user_id).await {
            console::warn!("moderation request failed", user_id.to_string(), err.to_string());
            alert(&bundle.format("actions.error", &[("error", &err)]));
        }
        load_cards(client, action.reloads());
    });
}
