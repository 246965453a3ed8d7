use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::TrackingConfig;
use crate::error::FunnelError;

/// Adds the attribution pixel and UTM scripts to `<head>`.
///
/// Both load async/defer and the page never waits on or calls into them.
/// Blocked or failed scripts leave the page untouched.
pub fn install(tracking: &TrackingConfig) -> Result<(), FunnelError> {
    if !tracking.enabled {
        log::debug!("Tracking disabled");
        return Ok(());
    }
    let window = web_sys::window().ok_or(FunnelError::NoWindow)?;
    let document = window
        .document()
        .ok_or_else(|| FunnelError::Dom("no document".to_string()))?;

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str("pixelId"),
        &JsValue::from_str(&tracking.pixel_id),
    )
    .map_err(FunnelError::dom)?;

    append_script(&document, &tracking.pixel_script_url, &[])?;
    append_script(
        &document,
        &tracking.utms_script_url,
        &["data-utmify-prevent-xcod-sck", "data-utmify-prevent-subids"],
    )?;
    Ok(())
}

fn append_script(document: &Document, src: &str, flags: &[&str]) -> Result<(), FunnelError> {
    let head = document
        .head()
        .ok_or_else(|| FunnelError::Dom("no <head> element".to_string()))?;
    let script = document.create_element("script").map_err(FunnelError::dom)?;
    for attr in ["async", "defer"].iter().chain(flags) {
        script.set_attribute(attr, "").map_err(FunnelError::dom)?;
    }
    script.set_attribute("src", src).map_err(FunnelError::dom)?;
    head.append_child(&script).map_err(FunnelError::dom)?;
    Ok(())
}
