//! Configuration editor rows.
//!
//! # Design
//! - Rows save individually; validation failures never leave the browser.
//! - Credential changes show a one-time re-login notice instead of the saved label.

use crate::app::api::ApiCtx;
use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::config::form::{ConfigField, FieldKind, build_config_sections};
use crate::features::config::state::{RowStatus, SaveOutcome};
use crate::i18n::TranslationBundle;
use gloo::console;
use gloo::dialogs::alert;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector, use_selector_with_deps};

#[function_component(ConfigEditor)]
pub(crate) fn config_editor() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let snapshot = use_selector(|store: &AppStore| store.data.config.clone());
    let sections = use_memo(
        |snapshot| {
            (**snapshot)
                .as_ref()
                .map(build_config_sections)
                .unwrap_or_default()
        },
        snapshot.clone(),
    );

    if snapshot.is_none() {
        return html! { <EmptyState title={bundle.text("misc.loading")} /> };
    }

    html! {
        <div class="config-sections">
            {for sections.iter().map(|section| html! {
                <fieldset class="config-section">
                    <legend>{bundle.text(section.title_key)}</legend>
                    {for section.fields.iter().map(|field| html! {
                        <ConfigRow key={field.key.clone()} field={field.clone()} />
                    })}
                </fieldset>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfigRowProps {
    field: ConfigField,
}

#[function_component(ConfigRow)]
fn config_row(props: &ConfigRowProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let field = props.field.clone();
    let (value, status) = {
        let selected = use_selector_with_deps(
            |store: &AppStore, field: &ConfigField| {
                (store.config_rows.value(field), store.config_rows.status(&field.key))
            },
            field.clone(),
        );
        (*selected).clone()
    };
    let dispatch = Dispatch::<AppStore>::new();
    let Some(api_ctx) = api_ctx else {
        return html! {};
    };

    let on_edit = {
        let dispatch = dispatch.clone();
        let key = field.key.clone();
        move |raw: String| {
            let key = key.clone();
            dispatch.reduce_mut(move |store| store.config_rows.set_draft(&key, raw));
        }
    };

    let on_save = {
        let field = field.clone();
        let client = api_ctx.client.clone();
        let bundle = bundle.clone();
        Callback::from(move |_: MouseEvent| {
            let mut request = None;
            dispatch.reduce_mut(|store| request = Some(store.config_rows.begin_save(&field)));
            let request = match request {
                Some(Ok(request)) => request,
                Some(Err(err)) => {
                    alert(&bundle.text(err.message_key()));
                    return;
                }
                None => return,
            };
            let dispatch = dispatch.clone();
            let field = field.clone();
            let client = client.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                let failure = match client.update_config(&request).await {
                    Ok(response) if response.is_ok() => None,
                    Ok(response) => Some(
                        response
                            .message
                            .unwrap_or_else(|| bundle.text("misc.unknown")),
                    ),
                    Err(err) => Some(err.to_string()),
                };
                if let Some(message) = &failure {
                    console::warn!("config update failed", field.key.clone(), message.clone());
                }
                let mut outcome = None;
                dispatch.reduce_mut(|store| {
                    outcome = store.config_rows.finish(&field, failure.is_none());
                });
                match outcome {
                    Some(SaveOutcome::Saved) => {
                        let key = field.key.clone();
                        let _ = Timeout::new(client.settings.saved_feedback_ms, move || {
                            dispatch.reduce_mut(|store| store.config_rows.clear_feedback(&key));
                        })
                        .forget();
                    }
                    Some(SaveOutcome::ReauthRequired { notice_key, .. }) => {
                        alert(&bundle.text(notice_key));
                    }
                    None => {
                        let error = failure.unwrap_or_default();
                        alert(&bundle.format("actions.error", &[("error", &error)]));
                    }
                }
            });
        })
    };

    let control = match field.kind {
        FieldKind::Select(options) => {
            let onchange = Callback::from(move |event: Event| {
                if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                    on_edit(select.value());
                }
            });
            html! {
                <select onchange={onchange}>
                    {for options.iter().map(|option| html! {
                        <option value={*option} selected={*option == value}>{*option}</option>
                    })}
                </select>
            }
        }
        kind => {
            let oninput = Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                    on_edit(input.value());
                }
            });
            html! {
                <input
                    type={kind.input_type()}
                    value={value.clone()}
                    placeholder={field.placeholder_key.map(|key| AttrValue::from(bundle.text(key)))}
                    oninput={oninput}
                />
            }
        }
    };

    let save_label = match status {
        RowStatus::Saved => bundle.text("buttons.saved"),
        RowStatus::Idle | RowStatus::Saving => bundle.text("buttons.save"),
    };

    html! {
        <div class="config-row">
            <label>{field.label.resolve(&bundle)}</label>
            {control}
            <button
                class={classes!("btn", (status == RowStatus::Saved).then_some("saved"))}
                disabled={status == RowStatus::Saving}
                onclick={on_save}
            >
                {save_label}
            </button>
        </div>
    }
}
