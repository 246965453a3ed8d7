pub mod checkout;
pub mod tracking;

/// Milliseconds since the epoch, from the browser clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
