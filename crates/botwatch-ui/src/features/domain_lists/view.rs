//! Lists tab: filter file statistics and the domain list editors.
//!
//! # Design
//! - Edits stay local to the store until the operator saves a whole list.
//! - Saves send the full list; the server replaces its file.

use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, SearchInput};
use crate::core::store::AppStore;
use crate::features::cards::state::{CardId, CardStatus};
use crate::features::domain_lists::state::{DomainListEditor, stats_rows};
use crate::features::system::actions::AdminAction;
use crate::features::system::api::run_admin_action;
use crate::i18n::TranslationBundle;
use gloo::console;
use gloo::dialogs::alert;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ListsTab)]
pub(crate) fn lists_tab() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let stats = use_selector(|store: &AppStore| store.data.lists_stats.clone());
    let stats_status = use_selector(|store: &AppStore| store.cards.status(CardId::ListsStats));
    let lists_status = use_selector(|store: &AppStore| store.cards.status(CardId::DomainLists));
    let names = use_selector(|store: &AppStore| {
        store
            .domain_lists
            .editors()
            .iter()
            .map(|editor| editor.name().to_string())
            .collect::<Vec<_>>()
    });
    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title="Missing API context." error=true /> };
    };

    let stats_body = match (&*stats_status, (*stats).as_ref()) {
        (CardStatus::Failed(error), _) => html! {
            <EmptyState title={bundle.format("cards.error", &[("error", error)])} error=true />
        },
        (_, Some(stats)) => html! {
            <dl class="details">
                {for stats_rows(stats).into_iter().map(|(file, lines)| html! {
                    <>
                        <dt>{file}</dt>
                        <dd>{bundle.format("lists.lines", &[("value", &lines)])}</dd>
                    </>
                })}
            </dl>
        },
        (_, None) => html! { <EmptyState title={bundle.text("misc.loading")} /> },
    };

    let on_update = {
        let client = api_ctx.client.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            run_admin_action(client.clone(), AdminAction::UpdateLists, bundle.clone());
        })
    };

    let editors = match &*lists_status {
        CardStatus::Failed(error) => html! {
            <EmptyState title={bundle.format("cards.error", &[("error", error)])} error=true />
        },
        CardStatus::Idle => html! { <EmptyState title={bundle.text("misc.loading")} /> },
        _ if names.is_empty() => html! { <EmptyState title={bundle.text("misc.empty")} /> },
        _ => html! {
            <>
                {for names.iter().map(|name| html! {
                    <DomainListCard key={name.clone()} name={name.clone()} />
                })}
            </>
        },
    };

    html! {
        <section class="card-grid">
            <article class="card">
                <header class="card-header">
                    <h2>{bundle.text("lists.stats")}</h2>
                    <button class="btn" onclick={on_update}>{bundle.text(AdminAction::UpdateLists.label_key())}</button>
                </header>
                {stats_body}
            </article>
            <article class="card wide">
                <header class="card-header"><h2>{bundle.text("lists.domains")}</h2></header>
                {editors}
            </article>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct DomainListCardProps {
    name: AttrValue,
}

#[function_component(DomainListCard)]
fn domain_list_card(props: &DomainListCardProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let name = props.name.clone();
    let editor = {
        let name = name.clone();
        use_selector(move |store: &AppStore| store.domain_lists.editor(&name).cloned())
    };
    let dispatch = Dispatch::<AppStore>::new();
    let (Some(api_ctx), Some(editor)) = (api_ctx, (*editor).clone()) else {
        return html! {};
    };

    let on_search = {
        let dispatch = dispatch.clone();
        let name = name.clone();
        Callback::from(move |raw: String| {
            edit_list(&dispatch, &name, move |editor| editor.set_search(raw));
        })
    };
    let on_draft = {
        let dispatch = dispatch.clone();
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let value = input.value();
                edit_list(&dispatch, &name, move |editor| editor.set_draft(value));
            }
        })
    };
    let on_add = {
        let dispatch = dispatch.clone();
        let name = name.clone();
        Callback::from(move |()| {
            edit_list(&dispatch, &name, |editor| {
                editor.add_draft();
            });
        })
    };
    let on_draft_key = {
        let on_add = on_add.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                on_add.emit(());
            }
        })
    };

    let on_save = {
        let client = api_ctx.client.clone();
        let bundle = bundle.clone();
        let name = name.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let Some(request) = dispatch
                .get()
                .domain_lists
                .editor(&name)
                .map(|editor| editor.payload())
            else {
                return;
            };
            let client = client.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                let list = request.list_name.clone();
                let key = match client.update_domain_list(&request).await {
                    Ok(response) if response.is_ok() => "lists.saved",
                    Ok(_) => "lists.save_failed",
                    Err(err) => {
                        console::warn!("domain list save failed", list.clone(), err.to_string());
                        "lists.save_failed"
                    }
                };
                alert(&bundle.format(key, &[("list", &list)]));
            });
        })
    };

    let rows = editor.visible().map(|(index, item)| {
        let dispatch = dispatch.clone();
        let name = name.clone();
        let onclick = Callback::from(move |_| {
            edit_list(&dispatch, &name, |editor| {
                editor.remove(index);
            });
        });
        html! {
            <li class="row" key={format!("{index}:{item}")}>
                <span class="row-title">{item.to_string()}</span>
                <button class="icon" title={bundle.text("buttons.remove")} onclick={onclick}>{"🗑"}</button>
            </li>
        }
    });

    html! {
        <div class="domain-list">
            <header class="card-header">
                <h3>{format!("{} ({})", editor.name(), editor.len())}</h3>
                <button class="btn" onclick={on_save}>{bundle.text("buttons.save")}</button>
            </header>
            <SearchInput
                placeholder={bundle.text("filters.search")}
                value={editor.search().to_string()}
                debounce_ms={0}
                on_search={on_search}
            />
            <ul class="list">{for rows}</ul>
            <div class="add-row">
                <input
                    type="text"
                    placeholder={bundle.text("lists.add_placeholder")}
                    value={editor.draft().to_string()}
                    oninput={on_draft}
                    onkeydown={on_draft_key}
                />
                <button class="btn" onclick={on_add.reform(|_| ())}>{bundle.text("buttons.add")}</button>
            </div>
        </div>
    }
}

fn edit_list(dispatch: &Dispatch<AppStore>, name: &str, edit: impl FnOnce(&mut DomainListEditor)) {
    dispatch.reduce_mut(|store| {
        if let Some(editor) = store.domain_lists.editor_mut(name) {
            edit(editor);
        }
    });
}
