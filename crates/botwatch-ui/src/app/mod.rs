//! Application root: preferences, refresh scheduling, tab routing and contexts.

use crate::app::api::ApiCtx;
use crate::components::locale_menu::LocaleMenu;
use crate::components::shell::AppShell;
use crate::core::store::AppStore;
use crate::core::theme::ThemeMode;
use crate::core::ui::Tab;
use crate::features::cards::api::load_cards;
use crate::features::cards::logic::{LocaleChangePolicy, on_locale_changed};
use crate::features::cards::state::PRIMARY_CARDS;
use crate::features::cards::view::TabCards;
use crate::features::domain_lists::view::ListsTab;
use crate::features::history::view::HistoryTab;
use crate::features::modal::view::ModalHost;
use crate::features::system::actions::LOGIN_PAGE;
use crate::features::system::view::SystemTab;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::utils::window;
use gloo_timers::callback::Interval;
use preferences::{api_base_url, load_locale, load_theme, persist_locale, persist_theme};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
mod preferences;

#[function_component(BotwatchApp)]
pub(crate) fn botwatch_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let preferences = use_selector(|store: &AppStore| store.preferences);
    let tab = use_selector(|store: &AppStore| store.ui.tab);
    let status = use_selector(|store: &AppStore| store.status.mode());
    let locale_seen = use_mut_ref(|| None as Option<LocaleCode>);
    let bundle = {
        let locale = preferences.locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let theme = preferences.theme;
        use_effect_with_deps(
            move |theme| {
                apply_theme(*theme);
                persist_theme(*theme);
                || ()
            },
            theme,
        );
    }
    {
        let client = api_ctx.client.clone();
        let bundle = (*bundle).clone();
        use_effect_with_deps(
            move |locale| {
                apply_locale(&bundle);
                persist_locale(*locale);
                let previous = locale_seen.borrow_mut().replace(*locale);
                if previous.is_some_and(|previous| previous != *locale) {
                    load_cards(client, on_locale_changed(LocaleChangePolicy::default()));
                }
                || ()
            },
            preferences.locale,
        );
    }
    {
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                load_cards(client.clone(), &PRIMARY_CARDS);
                let period = client.settings.refresh_interval_ms;
                let interval = Interval::new(period, move || {
                    load_cards(client.clone(), &PRIMARY_CARDS);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_tab = {
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |next: Tab| {
            let mut lazy: &'static [_] = &[];
            dispatch.reduce_mut(|store| lazy = store.activate_tab(next));
            load_cards(client.clone(), lazy);
        })
    };
    let on_toggle_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| {
                store.preferences.theme = store.preferences.theme.toggled();
            });
        })
    };
    let on_locale = {
        let dispatch = dispatch.clone();
        Callback::from(move |locale: LocaleCode| {
            dispatch.reduce_mut(|store| store.preferences.locale = locale);
        })
    };
    let on_logout = {
        let client = api_ctx.client.clone();
        Callback::from(move |()| {
            let client = client.clone();
            yew::platform::spawn_local(async move {
                if let Err(err) = client.logout().await {
                    console::warn!("logout request failed", err.to_string());
                }
                if let Err(err) = window().location().set_href(LOGIN_PAGE) {
                    console::error!("navigation to login failed", err);
                }
            });
        })
    };

    let body = match *tab {
        Tab::Activity | Tab::Users | Tab::Content | Tab::Moderation => {
            html! { <TabCards tab={*tab} /> }
        }
        Tab::History => html! { <HistoryTab /> },
        Tab::System => html! { <SystemTab /> },
        Tab::Lists => html! { <ListsTab /> },
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <AppShell
                    theme={preferences.theme}
                    status={*status}
                    tab={*tab}
                    on_tab={on_tab}
                    on_toggle_theme={on_toggle_theme}
                    on_logout={on_logout}
                    locale_selector={html! {
                        <LocaleMenu locale={preferences.locale} on_select={on_locale} />
                    }}
                >
                    {body}
                </AppShell>
                <ModalHost />
            </ContextProvider<ApiCtx>>
        </ContextProvider<TranslationBundle>>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

fn apply_locale(bundle: &TranslationBundle) {
    if let Some(root) = window()
        .document()
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute("lang", bundle.locale.code());
        let _ = root.set_attribute("dir", bundle.dir());
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        store.preferences.locale = load_locale();
        store.preferences.theme = load_theme();
    });
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BotwatchApp>::with_root(root).render();
    } else {
        yew::Renderer::<BotwatchApp>::new().render();
    }
}
