use yew::prelude::*;

use crate::hooks::use_interval;
use crate::widgets::{Countdown, CountdownAction};

const TICK_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub start: Countdown,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let start = props.start;
    let countdown = use_reducer(move || start);

    let on_tick = {
        let dispatcher = countdown.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CountdownAction::Tick))
    };
    // Interval is released once the clock hits zero.
    use_interval(if countdown.is_expired() { 0 } else { TICK_MS }, on_tick);

    html! {
        <div class="countdown">
            {
                countdown.display_units().into_iter().map(|(value, label)| html! {
                    <div class="countdown-unit" key={label}>
                        <div class="countdown-value">
                            <span>{value}</span>
                        </div>
                        <span class="countdown-label">{label}</span>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
