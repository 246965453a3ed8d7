use std::rc::Rc;

use serde::Deserialize;
use yew::Reducible;

/// Remaining time of the offer, split into the four units shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

pub enum CountdownAction {
    Tick,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days as u64 * 86_400
            + self.hours as u64 * 3_600
            + self.minutes as u64 * 60
            + self.seconds as u64
    }

    pub fn is_expired(&self) -> bool {
        *self == Self::ZERO
    }

    /// Every unit within its display range.
    pub fn is_well_formed(&self) -> bool {
        self.seconds < 60 && self.minutes < 60 && self.hours < 24
    }

    /// Advances one second, borrowing from the larger units.
    /// At zero this is a no-op: the borrow never wraps an empty countdown back to 23:59:59.
    pub fn tick(&mut self) {
        if self.is_expired() {
            return;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
            return;
        }
        self.seconds = 59;
        if self.minutes > 0 {
            self.minutes -= 1;
            return;
        }
        self.minutes = 59;
        if self.hours > 0 {
            self.hours -= 1;
            return;
        }
        self.hours = 23;
        // Non-zero overall with h/m/s all zero means days > 0.
        self.days -= 1;
    }

    /// (value, label) pairs, zero padded, in display order.
    pub fn display_units(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "Dias"),
            (format!("{:02}", self.hours), "Horas"),
            (format!("{:02}", self.minutes), "Minutos"),
            (format!("{:02}", self.seconds), "Segundos"),
        ]
    }
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => {
                if self.is_expired() {
                    return self;
                }
                let mut next = *self;
                next.tick();
                if next.is_expired() {
                    log::info!("Offer countdown reached zero");
                }
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/countdown_tests.rs"]
mod tests;
