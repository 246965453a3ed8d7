use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::error::js_to_string;
use crate::widgets::FloatingCtaTrigger;

/// True once the bottom of `target` has scrolled above the viewport.
/// The window scroll listener is removed on unmount.
#[hook]
pub fn use_scrolled_past(target: NodeRef) -> bool {
    let scrolled_past = use_state(|| false);
    {
        let scrolled_past = scrolled_past.clone();
        use_effect_with_deps(
            move |target: &NodeRef| {
                let target = target.clone();
                let trigger = Rc::new(RefCell::new(FloatingCtaTrigger::default()));
                let listener = Closure::<dyn Fn()>::new(move || {
                    if let Some(element) = target.cast::<Element>() {
                        let bottom = element.get_bounding_client_rect().bottom();
                        let mut trigger = trigger.borrow_mut();
                        if trigger.observe(bottom) {
                            scrolled_past.set(trigger.is_visible());
                        }
                    }
                });

                let registered = match web_sys::window() {
                    Some(window) => match window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                    {
                        Ok(()) => true,
                        Err(e) => {
                            log::warn!("Failed to register scroll listener: {}", js_to_string(&e));
                            false
                        }
                    },
                    None => false,
                };

                move || {
                    if registered {
                        if let Some(window) = web_sys::window() {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                listener.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    drop(listener);
                }
            },
            target,
        );
    }
    *scrolled_past
}
