use yew::prelude::*;

use crate::content::{recent_buyer, PRODUCT_NAME};
use crate::hooks::{use_interval, use_timeout_slot};
use crate::utils::now_ms;
use crate::widgets::{hide_deadline, NotificationAction, NotificationSchedule};

#[derive(Properties, PartialEq)]
pub struct PurchaseNotificationProps {
    pub period_ms: u32,
    pub display_ms: u32,
}

/// Periodic "someone just bought" toast.
///
/// Owns two timers: the recurring show interval and a single auto-hide slot.
/// Every show reschedules the slot and a manual close cancels it, and both go
/// away with the component.
#[function_component(PurchaseNotification)]
pub fn purchase_notification(props: &PurchaseNotificationProps) -> Html {
    let display_ms = props.display_ms;
    let schedule = use_reducer(move || NotificationSchedule::new(display_ms as u64));
    let hide_timer = use_timeout_slot();

    let on_period = {
        let dispatcher = schedule.dispatcher();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_| {
            let now = now_ms();
            let deadline = hide_deadline(now, display_ms as u64);
            dispatcher.dispatch(NotificationAction::Show { now_ms: now });

            let dispatcher = dispatcher.clone();
            hide_timer.schedule(display_ms, move || {
                dispatcher.dispatch(NotificationAction::Expire {
                    deadline_ms: deadline,
                })
            });
        })
    };
    use_interval(props.period_ms, on_period);

    let on_close = {
        let dispatcher = schedule.dispatcher();
        let hide_timer = hide_timer.clone();
        Callback::from(move |_: MouseEvent| {
            hide_timer.cancel();
            dispatcher.dispatch(NotificationAction::Dismiss);
        })
    };

    if !schedule.is_visible() {
        return html! {};
    }

    html! {
        <div class="purchase-notification">
            <div class="purchase-notification-icon">
                <i class="fas fa-bell"></i>
            </div>
            <div class="purchase-notification-text">
                <p>
                    <span class="highlight">{recent_buyer(schedule.shown_count())}</span>
                    {format!(" acabou de adquirir o {}", PRODUCT_NAME)}
                </p>
                <p class="purchase-notification-time">{"há 2 minutos atrás"}</p>
            </div>
            <button class="purchase-notification-close" onclick={on_close} aria-label="Fechar">
                <i class="fas fa-xmark"></i>
            </button>
        </div>
    }
}
