//! Ranking period selector.

use crate::i18n::TranslationBundle;
use botwatch_api_models::Period;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PeriodSelectProps {
    pub value: Period,
    pub on_change: Callback<Period>,
}

#[function_component(PeriodSelect)]
pub(crate) fn period_select(props: &PeriodSelectProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(period) = Period::parse(&select.value()) {
                    on_change.emit(period);
                }
            }
        })
    };
    html! {
        <select class="period-select" onchange={onchange}>
            {for Period::all().into_iter().map(|period| html! {
                <option value={period.as_str()} selected={period == props.value}>
                    {bundle.text(&format!("filters.{}", period.as_str()))}
                </option>
            })}
        </select>
    }
}
