//! DOM-free state machines behind the page's interactive pieces. Each one is
//! owned by a single component and shares nothing with the others.

pub mod accordion;
pub mod countdown;
pub mod floating_cta;
pub mod notification;
pub mod reveal;
pub mod scarcity;

pub use accordion::Accordion;
pub use countdown::{Countdown, CountdownAction};
pub use floating_cta::FloatingCtaTrigger;
pub use notification::{hide_deadline, NotificationAction, NotificationSchedule};
pub use reveal::RevealTracker;
pub use scarcity::{ScarcityAction, ScarcityCounter};
