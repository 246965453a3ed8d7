use yew::prelude::*;

use crate::config;
use crate::error::{js_to_string, FunnelError};

/// Sends the browser to the payment page. Nothing comes back from it.
pub fn go_to_checkout(url: &str) -> Result<(), FunnelError> {
    let window = web_sys::window().ok_or(FunnelError::NoWindow)?;
    log::info!("Redirecting to checkout");
    window
        .location()
        .set_href(url)
        .map_err(|e| FunnelError::Navigation {
            url: url.to_string(),
            reason: js_to_string(&e),
        })
}

/// Click handler used by every purchase button on the page.
pub fn checkout_callback() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| {
        if let Err(e) = go_to_checkout(&config::get().checkout_url) {
            log::error!("{}", e);
        }
    })
}
