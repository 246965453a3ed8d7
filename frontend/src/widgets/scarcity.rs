use std::rc::Rc;

use yew::Reducible;

pub const SPOTS_FLOOR: u32 = 1;

/// Cosmetic "spots remaining" figure. Only ever goes down, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScarcityCounter {
    remaining: u32,
}

pub enum ScarcityAction {
    Tick,
}

impl ScarcityCounter {
    pub fn new(start: u32) -> Self {
        Self {
            remaining: start.max(SPOTS_FLOOR),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn at_floor(&self) -> bool {
        self.remaining == SPOTS_FLOOR
    }

    pub fn tick(&mut self) {
        if self.remaining > SPOTS_FLOOR {
            self.remaining -= 1;
        }
    }
}

impl Reducible for ScarcityCounter {
    type Action = ScarcityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ScarcityAction::Tick => {
                if self.at_floor() {
                    return self;
                }
                let mut next = *self;
                next.tick();
                if next.at_floor() {
                    log::debug!("Spots counter reached its floor");
                }
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_down_by_one() {
        let mut counter = ScarcityCounter::new(37);
        counter.tick();
        assert_eq!(counter.remaining(), 36);
    }

    #[test]
    fn starting_at_floor_stays_at_floor() {
        let mut counter = ScarcityCounter::new(1);
        counter.tick();
        assert_eq!(counter.remaining(), 1);
    }

    #[test]
    fn never_drops_below_one() {
        let mut counter = ScarcityCounter::new(5);
        let mut previous = counter.remaining();
        for _ in 0..100 {
            counter.tick();
            assert!(counter.remaining() >= 1);
            assert!(counter.remaining() <= previous);
            previous = counter.remaining();
        }
        assert_eq!(counter.remaining(), 1);
    }

    #[test]
    fn zero_start_is_raised_to_floor() {
        assert_eq!(ScarcityCounter::new(0).remaining(), 1);
    }

    #[test]
    fn reducer_at_floor_returns_same_state() {
        let state = Rc::new(ScarcityCounter::new(1));
        let next = state.clone().reduce(ScarcityAction::Tick);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
