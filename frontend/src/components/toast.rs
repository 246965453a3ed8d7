use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_timeout_slot;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push { title: String, description: String },
    Remove(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { title, description } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    title,
                    description,
                });
                next.next_id += 1;
            }
            ToastAction::Remove(id) => {
                if !next.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    pub on_close: Callback<u32>,
}

#[function_component(ToastViewport)]
pub fn toast_viewport(props: &ToastViewportProps) -> Html {
    html! {
        <div class="toast-viewport">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_close={props.on_close.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_close: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let auto_close = use_timeout_slot();
    {
        let on_close = props.on_close.clone();
        let id = props.toast.id;
        use_effect_with_deps(
            move |_| {
                auto_close.schedule(TOAST_DURATION_MS, move || on_close.emit(id));
                || ()
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    html! {
        <div class="toast">
            <div class="toast-text">
                <p class="toast-title">{&props.toast.title}</p>
                <p class="toast-description">{&props.toast.description}</p>
            </div>
            <button class="toast-close" onclick={close} aria-label="Fechar">
                <i class="fas fa-xmark"></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, title: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            title: title.to_string(),
            description: String::new(),
        })
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        let ids: Vec<u32> = queue.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn remove_unknown_id_keeps_state() {
        let queue = push(Rc::new(ToastQueue::default()), "a");
        let after = queue.clone().reduce(ToastAction::Remove(42));
        assert!(Rc::ptr_eq(&queue, &after));

        let after = after.reduce(ToastAction::Remove(0));
        assert!(after.toasts.is_empty());
    }
}
