//! List containers for user rows and aggregate rows.
//!
//! # Design
//! - Read list state from the store by id; every control writes back through a reducer.
//! - Row content comes from [`user_row`] so templates stay testable off-DOM.

use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, SearchInput};
use crate::core::store::AppStore;
use crate::features::history::api::open_history;
use crate::features::lists::rows::{RowTrailing, user_row};
use crate::features::lists::state::{ListId, SimpleListId};
use crate::features::modal::state::{ModalBody, ModalTitle};
use crate::features::system::actions::ModerationAction;
use crate::features::system::api::moderate_user;
use crate::i18n::TranslationBundle;
use crate::services::now_secs;
use botwatch_api_models::UserRecord;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct ItemizedListProps {
    pub id: ListId,
    /// Placeholder key shown while the list has no items.
    pub empty_key: &'static str,
}

#[function_component(ItemizedList)]
pub(crate) fn itemized_list(props: &ItemizedListProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let id = props.id;
    let list = use_selector(move |store: &AppStore| store.lists.list(id).cloned());
    let dispatch = Dispatch::<AppStore>::new();
    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title="Missing API context." error=true /> };
    };
    let debounce_ms = api_ctx.client.settings.search_debounce_ms;

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |raw: String| {
            dispatch.reduce_mut(|store| store.lists.apply_filter(id, &raw));
        })
    };
    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(|store| store.lists.toggle_expand(id)))
    };

    let search_text = (*list)
        .as_ref()
        .map(|list| list.search_text().to_string())
        .unwrap_or_default();
    let search = html! {
        <SearchInput
            class="list-search"
            placeholder={bundle.text("filters.search")}
            value={search_text}
            debounce_ms={debounce_ms}
            on_search={on_search}
        />
    };

    let Some(list) = (*list).as_ref().filter(|list| !list.items().is_empty()) else {
        return html! {
            <>
                {search}
                <EmptyState title={bundle.text(props.empty_key)} />
            </>
        };
    };

    let now = now_secs();
    let template = list.template();
    let rows = list.visible().into_iter().map(|user| {
        let row = user_row(user, template, now, &bundle);
        let user = Rc::new(user.clone());
        let on_user = open_modal(
            &dispatch,
            "modals.user_title",
            ModalBody::UserDetails(user.clone()),
        );
        let on_media = open_modal(
            &dispatch,
            "modals.media_title",
            ModalBody::MediaDetails(user.clone()),
        );
        let on_history = {
            let client = api_ctx.client.clone();
            let user = user.clone();
            Callback::from(move |_| open_history(client.clone(), &user))
        };
        let on_moderate = moderation_callback(&api_ctx, row.moderation, &user, &bundle);
        let trailing = match &row.trailing {
            RowTrailing::None => html! {},
            RowTrailing::Badge(text) => html! { <span class="badge">{text.clone()}</span> },
            RowTrailing::Note(text) => html! { <span class="muted">{text.clone()}</span> },
            RowTrailing::Progress(percent) => html! {
                <div class="progress" title={format!("{percent:.1}%")}>
                    <div class="progress-fill" style={format!("width: {percent:.1}%")}></div>
                </div>
            },
        };
        html! {
            <li class="row" key={user.user_id.to_string()}>
                <div class="row-main" onclick={on_user}>
                    if let Some(flag) = row.flag.clone() {
                        <span class="flag">{flag}</span>
                    }
                    <div class="row-text">
                        <div class="row-title">{row.title.clone()}</div>
                        <div class="row-meta muted">{row.meta.clone()}</div>
                        if let Some(detail) = row.detail.clone() {
                            <div class="row-detail">{detail}</div>
                        }
                    </div>
                </div>
                <div class="row-side">
                    {trailing}
                    <div class="row-actions">
                        if row.has_media {
                            <button class="icon" title={bundle.text("buttons.view_media")} onclick={on_media}>
                                {"🎬"}
                            </button>
                        }
                        <button class="icon" title={bundle.text("buttons.history")} onclick={on_history}>
                            {"📜"}
                        </button>
                        <button
                            class="icon"
                            title={bundle.text(moderation_label(row.moderation))}
                            onclick={on_moderate}
                        >
                            {row.moderation.glyph()}
                        </button>
                    </div>
                </div>
            </li>
        }
    });

    let expand = list.expand_control().label_key().map(|key| {
        html! { <button class="ghost expand" onclick={on_toggle}>{bundle.text(key)}</button> }
    });

    html! {
        <>
            {search}
            <ul class="list">{for rows}</ul>
            {for expand}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SimpleListProps {
    pub id: SimpleListId,
    /// Placeholder key shown while the list has no rows.
    pub empty_key: &'static str,
}

#[function_component(SimpleList)]
pub(crate) fn simple_list(props: &SimpleListProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let id = props.id;
    let model = use_selector(move |store: &AppStore| store.lists.simple(id).cloned());
    let dispatch = Dispatch::<AppStore>::new();

    let on_search = Callback::from(move |raw: String| {
        dispatch.reduce_mut(|store| store.lists.simple_mut(id).apply_filter(&raw));
    });
    let debounce_ms = api_ctx
        .as_ref()
        .map_or(250, |ctx| ctx.client.settings.search_debounce_ms);
    let search_text = (*model)
        .as_ref()
        .map(|model| model.search_text().to_string())
        .unwrap_or_default();
    let search = html! {
        <SearchInput
            class="list-search"
            placeholder={bundle.text("filters.search")}
            value={search_text}
            debounce_ms={debounce_ms}
            on_search={on_search}
        />
    };

    let Some(model) = (*model).as_ref().filter(|model| !model.is_empty()) else {
        return html! {
            <>
                {search}
                <EmptyState title={bundle.text(props.empty_key)} />
            </>
        };
    };

    let rows = model.rows().map(|(row, visible)| {
        let block = row.user_id.zip(api_ctx.as_ref()).map(|(user_id, ctx)| {
            let client = ctx.client.clone();
            let title = bundle.text("buttons.block");
            let bundle = bundle.clone();
            let onclick = Callback::from(move |_| {
                moderate_user(client.clone(), ModerationAction::Block, user_id, bundle.clone());
            });
            html! {
                <button class="icon" title={title} onclick={onclick}>
                    {ModerationAction::Block.glyph()}
                </button>
            }
        });
        html! {
            <li class={classes!("row", (!visible).then_some("hidden"))}>
                if let Some(marker) = row.marker.clone() {
                    <span class="marker">{marker}</span>
                }
                <div class="row-text">
                    <div class="row-title">{row.text.clone()}</div>
                    if let Some(detail) = row.detail.clone() {
                        <div class="row-meta muted">{detail}</div>
                    }
                </div>
                if let Some(badge) = row.badge {
                    <span class="badge">{badge.to_string()}</span>
                }
                {for block}
            </li>
        }
    });

    html! {
        <>
            {search}
            <ul class="list simple">{for rows}</ul>
        </>
    }
}

fn open_modal(
    dispatch: &Dispatch<AppStore>,
    title_key: &'static str,
    body: ModalBody,
) -> Callback<MouseEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |_| {
        let body = body.clone();
        dispatch.reduce_mut(|store| store.modal.open(ModalTitle::Key(title_key), body));
    })
}

fn moderation_callback(
    api_ctx: &ApiCtx,
    action: ModerationAction,
    user: &UserRecord,
    bundle: &TranslationBundle,
) -> Callback<MouseEvent> {
    let client = api_ctx.client.clone();
    let bundle = bundle.clone();
    let user_id = user.user_id;
    Callback::from(move |_| moderate_user(client.clone(), action, user_id, bundle.clone()))
}

const fn moderation_label(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Block => "buttons.block",
        ModerationAction::Unblock => "buttons.unblock",
    }
}
