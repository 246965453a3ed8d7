use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// Emits `on_tick` every `millis` while the component is mounted.
///
/// The interval is dropped (and so cleared) when the component unmounts or
/// `millis` changes. `millis == 0` means no interval. The callback is captured
/// when the interval starts, so pass something stable like a reducer dispatcher.
#[hook]
pub fn use_interval(millis: u32, on_tick: Callback<()>) {
    use_effect_with_deps(
        move |millis| {
            let interval = start_unless_zero(*millis, |ms| {
                Interval::new(ms, move || on_tick.emit(()))
            });
            move || drop(interval)
        },
        millis,
    );
}

fn start_unless_zero<H>(millis: u32, start: impl FnOnce(u32) -> H) -> Option<H> {
    (millis > 0).then(|| start(millis))
}

/// Holds at most one live timer handle. Storing a new handle drops the
/// previous one, which clears it.
pub struct HandleSlot<H> {
    slot: Rc<RefCell<Option<H>>>,
}

impl<H> Clone for HandleSlot<H> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<H> HandleSlot<H> {
    fn from_shared(slot: Rc<RefCell<Option<H>>>) -> Self {
        Self { slot }
    }

    pub fn replace(&self, handle: H) {
        let previous = self.slot.replace(Some(handle));
        drop(previous);
    }

    pub fn cancel(&self) {
        drop(self.slot.take());
    }
}

/// A single pending timeout. Scheduling replaces the previous timeout rather
/// than stacking another one.
pub type TimeoutSlot = HandleSlot<Timeout>;

impl HandleSlot<Timeout> {
    pub fn schedule<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.replace(Timeout::new(millis, callback));
    }
}

/// A `TimeoutSlot` that is cancelled when the component unmounts.
#[hook]
pub fn use_timeout_slot() -> TimeoutSlot {
    let slot = use_mut_ref(|| None::<Timeout>);
    {
        let slot = HandleSlot::from_shared(slot.clone());
        use_effect_with_deps(move |_| move || slot.cancel(), ());
    }
    HandleSlot::from_shared(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Stands in for a browser timer: counts how many handles were cleared.
    struct FakeTimer {
        cleared: Rc<Cell<u32>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cleared.set(self.cleared.get() + 1);
        }
    }

    fn timer(cleared: &Rc<Cell<u32>>) -> FakeTimer {
        FakeTimer {
            cleared: Rc::clone(cleared),
        }
    }

    fn empty_slot() -> HandleSlot<FakeTimer> {
        HandleSlot::from_shared(Rc::new(RefCell::new(None)))
    }

    #[test]
    fn replacing_clears_the_previous_timer() {
        let cleared = Rc::new(Cell::new(0));
        let slot = empty_slot();

        slot.replace(timer(&cleared));
        assert_eq!(cleared.get(), 0);

        slot.replace(timer(&cleared));
        assert_eq!(cleared.get(), 1);
        assert!(slot.slot.borrow().is_some());
    }

    #[test]
    fn cancel_clears_the_pending_timer_once() {
        let cleared = Rc::new(Cell::new(0));
        let slot = empty_slot();

        slot.replace(timer(&cleared));
        slot.cancel();
        assert_eq!(cleared.get(), 1);
        assert!(slot.slot.borrow().is_none());

        slot.cancel();
        assert_eq!(cleared.get(), 1);
    }

    #[test]
    fn clones_share_one_slot() {
        let cleared = Rc::new(Cell::new(0));
        let slot = empty_slot();
        let unmount = slot.clone();

        slot.replace(timer(&cleared));
        unmount.cancel();
        assert_eq!(cleared.get(), 1);
        assert!(slot.slot.borrow().is_none());
    }

    #[test]
    fn zero_millis_starts_no_interval() {
        let mut started = false;
        let handle = start_unless_zero(0, |_| started = true);
        assert!(handle.is_none());
        assert!(!started);
    }

    #[test]
    fn interval_handle_is_cleared_on_teardown() {
        let cleared = Rc::new(Cell::new(0));
        let handle = start_unless_zero(1000, |ms| {
            assert_eq!(ms, 1000);
            timer(&cleared)
        });
        assert!(handle.is_some());
        assert_eq!(cleared.get(), 0);

        drop(handle);
        assert_eq!(cleared.get(), 1);
    }
}
