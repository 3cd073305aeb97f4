//! Shared modal overlay.
//!
//! # Design
//! - One host renders whatever body the store holds; opening replaces the previous content.
//! - Backdrop click, the close control and Escape all route through `dismiss`.

use crate::components::atoms::{EmptyState, PeriodSelect, SearchInput};
use crate::core::format::{ROW_TEXT_LIMIT, format_timestamp, prettify_url, truncate};
use crate::core::store::AppStore;
use crate::features::history::state::{HistoryOutcome, HistoryView};
use crate::features::modal::details::{DetailRow, DetailValue, media_detail_rows, user_detail_rows};
use crate::features::modal::state::{DismissTrigger, ModalBody, is_cancel_key};
use crate::i18n::TranslationBundle;
use crate::services::now_secs;
use botwatch_api_models::HistoryEntry;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ModalHost)]
pub(crate) fn modal_host() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let modal = use_selector(|store: &AppStore| store.modal.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let open = modal.is_open();

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |open| {
                let listener = open.then(|| {
                    EventListener::new(&document(), "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                            return;
                        };
                        if is_cancel_key(&event.key()) {
                            dispatch
                                .reduce_mut(|store| store.modal.dismiss(DismissTrigger::CancelKey));
                        }
                    })
                });
                move || drop(listener)
            },
            open,
        );
    }

    if !open {
        return html! {};
    }

    let dismiss = |trigger: DismissTrigger| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| store.modal.dismiss(trigger));
        })
    };
    let on_backdrop = dismiss(DismissTrigger::Backdrop);
    let on_close = dismiss(DismissTrigger::CloseControl);
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    let body = match modal.body() {
        ModalBody::Empty => html! {},
        ModalBody::UserDetails(user) => html! {
            <>
                {detail_table(&user_detail_rows(user, &bundle), &bundle)}
                {detail_table(&media_detail_rows(user, &bundle), &bundle)}
            </>
        },
        ModalBody::MediaDetails(user) => detail_table(&media_detail_rows(user, &bundle), &bundle),
        ModalBody::History(view) => html! { <HistoryBody view={view.clone()} /> },
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <header class="modal-header">
                    <h3>{modal.title().resolve(&bundle)}</h3>
                    <button class="ghost" aria-label={bundle.text("buttons.close")} onclick={on_close}>
                        {"✕"}
                    </button>
                </header>
                <div class="modal-body">{body}</div>
            </div>
        </div>
    }
}

fn detail_table(rows: &[DetailRow], bundle: &TranslationBundle) -> Html {
    if rows.is_empty() {
        return html! { <p class="muted">{bundle.text("misc.no_metadata")}</p> };
    }
    html! {
        <dl class="details">
            {for rows.iter().map(|row| {
                let value = match &row.value {
                    DetailValue::Text(text) => html! { {text.clone()} },
                    DetailValue::Link { href, text } => html! {
                        <a href={href.clone()} target="_blank" rel="noopener noreferrer">{text.clone()}</a>
                    },
                };
                html! {
                    <>
                        <dt>{bundle.text(row.label_key)}</dt>
                        <dd>{value}</dd>
                    </>
                }
            })}
        </dl>
    }
}

#[derive(Properties, PartialEq)]
struct HistoryBodyProps {
    view: HistoryView,
}

#[function_component(HistoryBody)]
fn history_body(props: &HistoryBodyProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let dispatch = Dispatch::<AppStore>::new();
    let view = &props.view;

    let on_period = {
        let dispatch = dispatch.clone();
        Callback::from(move |period| {
            dispatch.reduce_mut(|store| {
                if let Some(view) = store.modal.history_mut() {
                    view.set_period(period);
                }
            });
        })
    };
    let on_search = Callback::from(move |raw: String| {
        dispatch.reduce_mut(|store| {
            if let Some(view) = store.modal.history_mut() {
                view.set_search(raw);
            }
        });
    });

    let list = match view.outcome(now_secs()) {
        HistoryOutcome::Loading => html! { <EmptyState title={bundle.text("misc.loading")} /> },
        HistoryOutcome::Failed(error) => html! {
            <EmptyState title={bundle.format("cards.error", &[("error", &error)])} error=true />
        },
        HistoryOutcome::NoHistory => {
            html! { <EmptyState title={bundle.text("history.no_history")} /> }
        }
        HistoryOutcome::NoMatches { .. } => {
            html! { <EmptyState title={bundle.text("history.no_matches")} /> }
        }
        HistoryOutcome::Entries { entries, total } => html! {
            <>
                <p class="muted">
                    {bundle.format("history.showing", &[("shown", &entries.len()), ("total", &total)])}
                </p>
                <ul class="list history">
                    {for entries.into_iter().map(|entry| history_row(entry, &bundle))}
                </ul>
            </>
        },
    };

    html! {
        <div class="history-body">
            <div class="history-filters">
                <PeriodSelect value={view.filter().period} on_change={on_period} />
                <SearchInput
                    placeholder={bundle.text("history.search_entries")}
                    value={view.filter().search.clone()}
                    debounce_ms={0}
                    on_search={on_search}
                />
            </div>
            {list}
        </div>
    }
}

fn history_row(entry: &HistoryEntry, bundle: &TranslationBundle) -> Html {
    let link = prettify_url(entry.url.as_deref(), bundle);
    let title = entry
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .map_or_else(|| link.clone(), |title| truncate(title, ROW_TEXT_LIMIT));
    html! {
        <li class="row">
            <div class="row-text">
                <div class="row-title">{title}</div>
                <div class="row-meta muted">
                    {format_timestamp(entry.timestamp)}
                    if let Some(domain) = entry.domain.clone().filter(|d| !d.is_empty()) {
                        {format!(" • {domain}")}
                    }
                </div>
                if let Some(url) = entry.url.clone().filter(|u| !u.is_empty()) {
                    <a class="row-detail" href={url} target="_blank" rel="noopener noreferrer">{link}</a>
                }
            </div>
            <div class="row-side">
                if entry.is_nsfw {
                    <span class="badge warn">{bundle.text("history.nsfw")}</span>
                }
                if entry.is_playlist {
                    <span class="badge">{bundle.text("history.playlist")}</span>
                }
            </div>
        </li>
    }
}
