//! History tab: pick a user and open their download history.

use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, SearchInput};
use crate::core::format::user_meta;
use crate::core::store::AppStore;
use crate::features::cards::state::{CardId, CardStatus};
use crate::features::history::api::open_history;
use crate::features::history::state::display_name;
use crate::i18n::TranslationBundle;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(HistoryTab)]
pub(crate) fn history_tab() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let index = use_selector(|store: &AppStore| store.history_index.clone());
    let status = use_selector(|store: &AppStore| store.cards.status(CardId::HistoryIndex));
    let query = use_state(String::new);
    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title="Missing API context." error=true /> };
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |raw: String| query.set(raw))
    };
    let cap = api_ctx.client.settings.limits.history_index_rows;

    let results = match &*status {
        CardStatus::Failed(error) => html! {
            <EmptyState title={bundle.format("cards.error", &[("error", error)])} error=true />
        },
        CardStatus::Idle | CardStatus::Loading if index.is_empty() => {
            html! { <EmptyState title={bundle.text("misc.loading")} /> }
        }
        _ => {
            let users = index.search(&query, cap);
            if users.is_empty() {
                html! { <EmptyState title={bundle.text("misc.empty")} /> }
            } else {
                html! {
                    <ul class="list">
                        {for users.into_iter().map(|user| {
                            let user = Rc::new(user.clone());
                            let onclick = {
                                let client = api_ctx.client.clone();
                                let user = user.clone();
                                Callback::from(move |_| open_history(client.clone(), &user))
                            };
                            html! {
                                <li class="row clickable" key={user.user_id.to_string()} onclick={onclick}>
                                    if let Some(flag) = user.flag.clone() {
                                        <span class="flag">{flag}</span>
                                    }
                                    <div class="row-text">
                                        <div class="row-title">{display_name(&user)}</div>
                                        <div class="row-meta muted">
                                            {user_meta(user.username.as_deref(), user.user_id, &bundle)}
                                        </div>
                                    </div>
                                    <span class="icon">{"📜"}</span>
                                </li>
                            }
                        })}
                    </ul>
                }
            }
        }
    };

    html! {
        <section class="card wide">
            <header class="card-header">
                <div>
                    <h2>{bundle.text("history.title")}</h2>
                    <p class="muted">{bundle.text("history.subtitle")}</p>
                </div>
            </header>
            <SearchInput
                placeholder={bundle.text("history.search_users")}
                value={(*query).clone()}
                debounce_ms={api_ctx.client.settings.search_debounce_ms}
                on_search={on_search}
            />
            {results}
        </section>
    }
}
