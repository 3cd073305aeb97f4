//! Locale selection dropdown used in the header.
//!
//! # Design
//! - Keep presentation focused on UI; selection state is managed by the caller.
//! - Avoid side effects inside the component; emit the selected locale via callback.

use crate::i18n::LocaleCode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                    on_select.emit(locale);
                }
            }
        })
    };

    html! {
        <select class="locale-select" aria-label="Locale" onchange={onchange}>
            {for LocaleCode::all().iter().map(|lc| html! {
                <option value={lc.code()} selected={*lc == props.locale}>
                    {format!("{} {}", locale_flag(*lc), lc.label())}
                </option>
            })}
        </select>
    }
}

const fn locale_flag(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => "🇺🇸",
        LocaleCode::Ru => "🇷🇺",
        LocaleCode::Hi => "🇮🇳",
        LocaleCode::Ar => "🇸🇦",
    }
}
