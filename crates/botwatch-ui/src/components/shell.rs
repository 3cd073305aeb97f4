//! Page chrome: header, status chip, preferences and tab navigation.

use crate::core::status::StatusMode;
use crate::core::theme::ThemeMode;
use crate::core::ui::Tab;
use crate::i18n::TranslationBundle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeMode,
    pub status: StatusMode,
    pub tab: Tab,
    pub on_tab: Callback<Tab>,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
    pub locale_selector: Html,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let t = |key: &str| bundle.text(key);
    let busy = props.status == StatusMode::Busy;

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <header class="topbar">
                <div class="brand">
                    <h1>{t("header.title")}</h1>
                    <p class="muted">{t("header.subtitle")}</p>
                </div>
                <div class="top-actions">
                    <span class={classes!("status-chip", busy.then_some("busy"))}>
                        {t(props.status.label_key())}
                    </span>
                    {props.locale_selector.clone()}
                    <button class="ghost" onclick={props.on_toggle_theme.reform(|_| ())}>
                        {t(props.theme.toggle_label_key())}
                    </button>
                    <button class="ghost" onclick={props.on_logout.reform(|_| ())}>
                        {t("buttons.logout")}
                    </button>
                </div>
            </header>
            <nav class="tabs">
                {for Tab::all().into_iter().map(|tab| {
                    let on_tab = props.on_tab.clone();
                    html! {
                        <button
                            class={classes!("tab", (tab == props.tab).then_some("active"))}
                            onclick={Callback::from(move |_| on_tab.emit(tab))}
                        >
                            {t(tab.label_key())}
                        </button>
                    }
                })}
            </nav>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}
