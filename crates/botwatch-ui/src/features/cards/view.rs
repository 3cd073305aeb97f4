//! Card grid for the data tabs.
//!
//! # Design
//! - Each card reads its own status, so one failed loader never blanks a sibling.
//! - Parameter controls write the query through a reducer, then reload only the affected cards.

use crate::app::api::ApiCtx;
use crate::components::atoms::{EmptyState, PeriodSelect};
use crate::core::debounce::Debounce;
use crate::core::store::AppStore;
use crate::core::ui::Tab;
use crate::features::cards::api::load_cards;
use crate::features::cards::logic::{PowerFilterInput, PowerInputEvent, PowerReload, power_reload};
use crate::features::cards::state::{CardId, CardStatus, PRIMARY_CARDS, PeriodGroup};
use crate::features::lists::view::{ItemizedList, SimpleList};
use crate::i18n::TranslationBundle;
use crate::services::api::ApiClient;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct TabCardsProps {
    pub tab: Tab,
}

#[function_component(TabCards)]
pub(crate) fn tab_cards(props: &TabCardsProps) -> Html {
    let tab = props.tab;
    html! {
        <section class="card-grid">
            {for PRIMARY_CARDS
                .into_iter()
                .filter(|card| card.tab() == tab)
                .map(|card| html! { <CardPanel key={format!("{card:?}")} card={card} /> })}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CardPanelProps {
    card: CardId,
}

#[function_component(CardPanel)]
fn card_panel(props: &CardPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let card = props.card;
    let status = use_selector(move |store: &AppStore| store.cards.status(card));
    let query = use_selector(|store: &AppStore| store.query.clone());
    let active_total = use_selector(|store: &AppStore| store.data.active_total);
    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title="Missing API context." error=true /> };
    };
    let client = api_ctx.client.clone();

    let bindings: [(&str, &dyn std::fmt::Display); 4] = [
        ("hours", &query.channel_hours),
        ("minutes", &query.active_minutes),
        ("min_urls", &query.power.min_urls),
        ("days", &query.power.days),
    ];
    let title = bundle.format(card.title_key(), &bindings);
    let subtitle = card.subtitle_key().map(|key| bundle.format(key, &bindings));

    let period = PeriodGroup::hosted_by(card).map(|group| {
        let client = client.clone();
        let on_change = Callback::from(move |period| {
            let mut reload: &'static [CardId] = &[];
            Dispatch::<AppStore>::new()
                .reduce_mut(|store| reload = store.query.set_period(group, period));
            load_cards(client.clone(), reload);
        });
        html! { <PeriodSelect value={query.period(group)} on_change={on_change} /> }
    });

    let controls = match card {
        CardId::ActiveUsers => html! {
            <>
                <ActiveWindowSelect client={client.clone()} value={query.active_minutes} />
                if let Some(total) = *active_total {
                    <span class="badge total">
                        {format!("{}: {total}", bundle.text("cards.active.count_label"))}
                    </span>
                }
            </>
        },
        CardId::PowerUsers => html! { <PowerFilter client={client.clone()} /> },
        _ => html! {},
    };

    let body = match &*status {
        CardStatus::Failed(error) => html! {
            <EmptyState title={bundle.format("cards.error", &[("error", error)])} error=true />
        },
        CardStatus::Idle => html! { <EmptyState title={bundle.text("misc.loading")} /> },
        CardStatus::Loading | CardStatus::Ready => match (card.list(), card.simple_list()) {
            (Some(list), _) => {
                html! { <ItemizedList id={list} empty_key={status.empty_list_key()} /> }
            }
            (None, Some(simple)) => {
                html! { <SimpleList id={simple} empty_key={status.empty_list_key()} /> }
            }
            (None, None) => html! {},
        },
    };

    html! {
        <article class={classes!("card", matches!(*status, CardStatus::Loading).then_some("loading"))}>
            <header class="card-header">
                <div>
                    <h2>{title}</h2>
                    if let Some(subtitle) = subtitle {
                        <p class="muted">{subtitle}</p>
                    }
                </div>
                <div class="card-controls">
                    {for period}
                    {controls}
                </div>
            </header>
            {body}
        </article>
    }
}

#[derive(Properties)]
struct ClientProps {
    client: Rc<ApiClient>,
    #[prop_or_default]
    value: u32,
}

impl PartialEq for ClientProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) && self.value == other.value
    }
}

#[function_component(ActiveWindowSelect)]
fn active_window_select(props: &ClientProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let choices = props.client.settings.active_minute_choices;
    let onchange = {
        let client = props.client.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            let Ok(minutes) = select.value().parse::<u32>() else {
                return;
            };
            Dispatch::<AppStore>::new().reduce_mut(|store| store.query.active_minutes = minutes);
            load_cards(client.clone(), &[CardId::ActiveUsers]);
        })
    };
    html! {
        <label class="inline-field">
            <span class="muted">{bundle.text("cards.active.window")}</span>
            <select onchange={onchange}>
                {for choices.iter().map(|minutes| html! {
                    <option value={minutes.to_string()} selected={*minutes == props.value}>
                        {format!("{minutes} min")}
                    </option>
                })}
            </select>
        </label>
    }
}

#[function_component(PowerFilter)]
fn power_filter(props: &ClientProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let thresholds = use_selector(|store: &AppStore| store.query.power);
    let input = {
        let thresholds = *thresholds;
        use_state(move || PowerFilterInput::from_thresholds(thresholds))
    };
    let timer = use_mut_ref(Debounce::<Timeout>::default);

    let apply = {
        let client = props.client.clone();
        Rc::new(move |next: PowerFilterInput| {
            Dispatch::<AppStore>::new().reduce_mut(|store| {
                store.query.power = next.thresholds(store.query.power);
            });
            load_cards(client.clone(), &[CardId::PowerUsers]);
        })
    };

    let schedule = {
        let settings = props.client.settings.clone();
        let timer = timer.clone();
        let apply = apply.clone();
        Rc::new(move |event: PowerInputEvent, next: PowerFilterInput| {
            match power_reload(event, &settings) {
                PowerReload::Debounced(delay) => {
                    let apply = apply.clone();
                    timer
                        .borrow_mut()
                        .arm(Timeout::new(delay, move || apply(next)));
                }
                PowerReload::Now => {
                    timer.borrow_mut().cancel();
                    apply(next);
                }
            }
        })
    };

    let field = |is_days: bool| {
        let on_input = {
            let input = input.clone();
            let schedule = schedule.clone();
            Callback::from(move |event: InputEvent| {
                let Some(target) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                    return;
                };
                let mut next = (*input).clone();
                if is_days {
                    next.days = target.value();
                } else {
                    next.min_urls = target.value();
                }
                input.set(next.clone());
                schedule(PowerInputEvent::Edited, next);
            })
        };
        let on_keydown = {
            let input = input.clone();
            let schedule = schedule.clone();
            Callback::from(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    schedule(PowerInputEvent::Submitted, (*input).clone());
                }
            })
        };
        let (label, value) = if is_days {
            ("power.days", input.days.clone())
        } else {
            ("power.min_urls", input.min_urls.clone())
        };
        html! {
            <label class="inline-field">
                <span class="muted">{bundle.text(label)}</span>
                <input
                    type="number"
                    min="1"
                    value={value}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
            </label>
        }
    };

    html! {
        <div class="power-filter">
            {field(false)}
            {field(true)}
        </div>
    }
}
