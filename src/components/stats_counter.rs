use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS, COUNTER_VISIBLE_THRESHOLD};
use crate::counter::StatCounter;
use crate::viewport::hooks::use_in_view;

#[derive(Properties, PartialEq)]
struct StatItemProps {
    number: &'static str,
    label: &'static str,
}

#[function_component(StatItem)]
fn stat_item(props: &StatItemProps) -> Html {
    let element_ref = use_node_ref();
    let in_view = use_in_view(element_ref.clone(), COUNTER_VISIBLE_THRESHOLD);
    let display = use_state(|| "0".to_string());
    let has_animated = use_state(|| false);
    let ticker = use_mut_ref(|| None::<Interval>);

    {
        let display = display.setter();
        let has_animated_setter = has_animated.setter();
        let already_animated = *has_animated;
        let ticker = ticker.clone();
        let number = props.number;
        use_effect_with_deps(
            move |in_view| {
                if *in_view && !already_animated {
                    has_animated_setter.set(true);
                    let counter = Rc::new(RefCell::new(StatCounter::new(
                        number,
                        COUNTER_DURATION_MS,
                        COUNTER_TICK_MS,
                    )));
                    let ticker_handle = ticker.clone();
                    *ticker.borrow_mut() = Some(Interval::new(COUNTER_TICK_MS, move || {
                        let mut counter = counter.borrow_mut();
                        display.set(counter.tick());
                        if counter.is_finished() {
                            // last frame already shows the exact target
                            ticker_handle.borrow_mut().take();
                        }
                    }));
                }
                || ()
            },
            in_view,
        );
    }

    {
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    ticker.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div ref={element_ref} class="stat-item">
            <div class={classes!("stat-number", (*has_animated).then(|| "shown"))}>
                {(*display).clone()}
            </div>
            <div class="stat-label">{props.label}</div>
        </div>
    }
}

#[function_component(StatsCounter)]
pub fn stats_counter() -> Html {
    html! {
        <div class="stats-grid">
            <StatItem number="15+" label="Years of experience" />
            <StatItem number="200+" label="Pilots trained" />
            <StatItem number="500+" label="Flight hours logged" />
            <StatItem number="10,000+" label="Training hours" />

            <style>
                {r#"
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .stat-item {
                    text-align: left;
                    padding-top: 3rem;
                    border-top: 2px solid #d1d5db;
                }
                .stat-number {
                    font-size: 3rem;
                    font-weight: 500;
                    color: #1f2937;
                    line-height: 1;
                    margin-bottom: 0.5rem;
                    opacity: 0;
                    transform: translateY(1.25rem);
                    transition: all 0.6s ease;
                }
                .stat-number.shown {
                    opacity: 1;
                    transform: translateY(0);
                }
                .stat-label {
                    color: #1f2937;
                }
                @media (max-width: 1024px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
