//! System tab: metrics, versions, admin actions and the config editor.

use crate::app::api::ApiCtx;
use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::cards::state::{CardId, CardStatus};
use crate::features::config::view::ConfigEditor;
use crate::features::system::actions::AdminAction;
use crate::features::system::api::run_admin_action;
use crate::features::system::metrics::{metric_rows, version_rows};
use crate::i18n::TranslationBundle;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(SystemTab)]
pub(crate) fn system_tab() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let metrics = use_selector(|store: &AppStore| store.data.metrics.clone());
    let versions = use_selector(|store: &AppStore| store.data.versions.clone());
    let metrics_status = use_selector(|store: &AppStore| store.cards.status(CardId::SystemMetrics));
    let versions_status =
        use_selector(|store: &AppStore| store.cards.status(CardId::PackageVersions));
    let config_status = use_selector(|store: &AppStore| store.cards.status(CardId::ConfigSettings));
    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title="Missing API context." error=true /> };
    };

    let metrics_body = card_state(&metrics_status, &bundle).unwrap_or_else(|| {
        match (*metrics).as_ref().map(|metrics| metric_rows(metrics, &bundle)) {
            Some(Ok(rows)) => html! {
                <dl class="details">
                    {for rows.into_iter().map(|row| html! {
                        <>
                            <dt>{bundle.text(row.label_key)}</dt>
                            <dd>{row.value}</dd>
                        </>
                    })}
                </dl>
            },
            Some(Err(error)) => html! {
                <EmptyState title={bundle.format("cards.error", &[("error", &error)])} error=true />
            },
            None => html! { <EmptyState title={bundle.text("misc.loading")} /> },
        }
    });

    let versions_body = card_state(&versions_status, &bundle).unwrap_or_else(|| {
        match (*versions).as_ref() {
            Some(versions) if !versions.is_empty() => html! {
                <dl class="details">
                    {for version_rows(versions).into_iter().map(|(name, version)| html! {
                        <>
                            <dt>{name.to_string()}</dt>
                            <dd>{version.to_string()}</dd>
                        </>
                    })}
                </dl>
            },
            Some(_) => html! { <EmptyState title={bundle.text("misc.empty")} /> },
            None => html! { <EmptyState title={bundle.text("misc.loading")} /> },
        }
    });

    let actions = AdminAction::SYSTEM.into_iter().map(|action| {
        let client = api_ctx.client.clone();
        let bundle = bundle.clone();
        let label = bundle.text(action.label_key());
        let onclick =
            Callback::from(move |_| run_admin_action(client.clone(), action, bundle.clone()));
        html! { <button class="btn" onclick={onclick}>{label}</button> }
    });

    let config_body = match &*config_status {
        CardStatus::Failed(error) => html! {
            <EmptyState title={bundle.format("cards.error", &[("error", error)])} error=true />
        },
        _ => html! { <ConfigEditor /> },
    };

    html! {
        <section class="card-grid">
            <article class="card">
                <header class="card-header"><h2>{bundle.text("system.metrics")}</h2></header>
                {metrics_body}
                <div class="admin-actions">{for actions}</div>
            </article>
            <article class="card">
                <header class="card-header"><h2>{bundle.text("system.versions")}</h2></header>
                {versions_body}
            </article>
            <article class="card wide">
                <header class="card-header"><h2>{bundle.text("system.config")}</h2></header>
                {config_body}
            </article>
        </section>
    }
}

/// Placeholder for a card that failed or has not been requested yet.
fn card_state(status: &CardStatus, bundle: &TranslationBundle) -> Option<Html> {
    match status {
        CardStatus::Failed(error) => Some(html! {
            <EmptyState title={bundle.format("cards.error", &[("error", error)])} error=true />
        }),
        CardStatus::Idle => Some(html! { <EmptyState title={bundle.text("misc.loading")} /> }),
        CardStatus::Loading | CardStatus::Ready => None,
    }
}
