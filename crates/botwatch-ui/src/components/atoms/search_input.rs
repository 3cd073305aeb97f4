//! Debounced search input for list filters.
//!
//! # Design
//! - Keep local input state for immediate typing feedback.
//! - Emit debounced values to the caller; a new keystroke replaces the pending timer.

use crate::core::debounce::Debounce;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(250)]
    pub debounce_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let value_state = use_state(|| props.value.to_string());
    let debounce = props.debounce_ms;
    let timer = use_mut_ref(Debounce::<Timeout>::default);

    {
        let value_state = value_state.clone();
        let incoming = props.value.clone();
        use_effect_with_deps(
            move |incoming| {
                let next = incoming.to_string();
                if *value_state != next {
                    value_state.set(next);
                }
                || ()
            },
            incoming,
        );
    }

    let oninput = {
        let on_search = props.on_search.clone();
        let value_state = value_state.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let next = input.value();
            value_state.set(next.clone());
            if debounce == 0 {
                timer.borrow_mut().cancel();
                on_search.emit(next);
                return;
            }
            let on_search = on_search.clone();
            timer
                .borrow_mut()
                .arm(Timeout::new(debounce, move || on_search.emit(next)));
        })
    };

    html! {
        <input
            class={classes!("search-input", props.class.clone())}
            type="search"
            placeholder={props.placeholder.clone()}
            value={AttrValue::from((*value_state).clone())}
            oninput={oninput}
        />
    }
}
