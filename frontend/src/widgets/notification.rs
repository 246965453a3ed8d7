use std::rc::Rc;

use yew::Reducible;

/// Visibility of the "recent purchase" toast.
///
/// Times are milliseconds from `Date.now()`. A show always replaces the
/// previous hide deadline, and an auto-hide only takes effect when it carries
/// the current deadline, so a timer left over from an earlier show can never
/// close a newer toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSchedule {
    display_ms: u64,
    visible: bool,
    hide_at: Option<u64>,
    shown_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    Show { now_ms: u64 },
    Expire { deadline_ms: u64 },
    Dismiss,
}

pub fn hide_deadline(shown_at_ms: u64, display_ms: u64) -> u64 {
    shown_at_ms.saturating_add(display_ms)
}

impl NotificationSchedule {
    pub fn new(display_ms: u64) -> Self {
        Self {
            display_ms,
            visible: false,
            hide_at: None,
            shown_count: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn shown_count(&self) -> u32 {
        self.shown_count
    }

    /// Returns the new hide deadline.
    pub fn show(&mut self, now_ms: u64) -> u64 {
        let deadline = hide_deadline(now_ms, self.display_ms);
        self.visible = true;
        self.hide_at = Some(deadline);
        self.shown_count += 1;
        deadline
    }

    /// Auto-hide scheduled for `deadline_ms`. Ignored unless that is still
    /// the pending deadline. Returns whether the toast was hidden.
    pub fn expire(&mut self, deadline_ms: u64) -> bool {
        if self.hide_at != Some(deadline_ms) {
            return false;
        }
        self.visible = false;
        self.hide_at = None;
        true
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    pub fn apply(&mut self, action: NotificationAction) -> bool {
        let before = *self;
        match action {
            NotificationAction::Show { now_ms } => {
                self.show(now_ms);
            }
            NotificationAction::Expire { deadline_ms } => {
                self.expire(deadline_ms);
            }
            NotificationAction::Dismiss => self.dismiss(),
        }
        before != *self
    }
}

impl Reducible for NotificationSchedule {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
#[path = "tests/notification_tests.rs"]
mod tests;
