pub mod scroll;
pub mod timers;

pub use scroll::use_scrolled_past;
pub use timers::{use_interval, use_timeout_slot};
