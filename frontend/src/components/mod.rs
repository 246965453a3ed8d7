pub mod countdown_timer;
pub mod expandable_module;
pub mod faq_item;
pub mod floating_cta;
pub mod purchase_notification;
pub mod revealable_bonus;
pub mod spots_badge;
pub mod toast;
