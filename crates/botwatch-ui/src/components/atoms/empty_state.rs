//! Placeholder panel for empty, loading and failed containers.
//!
//! # Design
//! - Keep copy entirely prop-driven.
//! - Render the error tone only when asked.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub error: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class={classes!(
            "empty-state",
            props.error.then_some("error"),
            props.class.clone()
        )}>
            {props.title.clone()}
        </div>
    }
}
