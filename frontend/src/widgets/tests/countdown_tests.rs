use super::{Countdown, CountdownAction};

use std::rc::Rc;
use yew::Reducible;

#[test]
fn tick_decrements_seconds() {
    let mut c = Countdown::new(0, 11, 45, 19);
    c.tick();
    assert_eq!(c, Countdown::new(0, 11, 45, 18));
}

#[test]
fn tick_borrows_through_every_unit() {
    let mut c = Countdown::new(0, 0, 1, 0);
    c.tick();
    assert_eq!(c, Countdown::new(0, 0, 0, 59));

    let mut c = Countdown::new(0, 1, 0, 0);
    c.tick();
    assert_eq!(c, Countdown::new(0, 0, 59, 59));

    let mut c = Countdown::new(2, 0, 0, 0);
    c.tick();
    assert_eq!(c, Countdown::new(1, 23, 59, 59));
}

#[test]
fn tick_at_zero_stays_at_zero() {
    let mut c = Countdown::ZERO;
    c.tick();
    assert_eq!(c, Countdown::new(0, 0, 0, 0));
    assert_ne!(c, Countdown::new(0, 23, 59, 59));
}

#[test]
fn total_seconds_never_increases_and_stops_at_zero() {
    let mut c = Countdown::new(0, 0, 2, 5);
    let mut previous = c.total_seconds();
    for _ in 0..500 {
        c.tick();
        let now = c.total_seconds();
        assert!(now <= previous);
        assert!(c.is_well_formed());
        previous = now;
    }
    assert!(c.is_expired());
    assert_eq!(c.total_seconds(), 0);
}

#[test]
fn each_tick_removes_exactly_one_second_until_zero() {
    let start = Countdown::new(1, 0, 0, 3);
    let mut c = start;
    for elapsed in 1..=start.total_seconds() {
        c.tick();
        assert_eq!(c.total_seconds(), start.total_seconds() - elapsed);
    }
    assert!(c.is_expired());
}

#[test]
fn total_seconds_counts_every_unit() {
    let c = Countdown::new(1, 2, 3, 4);
    assert_eq!(c.total_seconds(), 86_400 + 3_600 * 2 + 60 * 3 + 4);
}

#[test]
fn display_units_are_zero_padded() {
    let units = Countdown::new(0, 11, 5, 9).display_units();
    let values: Vec<&str> = units.iter().map(|(v, _)| v.as_str()).collect();
    assert_eq!(values, vec!["00", "11", "05", "09"]);
    assert_eq!(units[3].1, "Segundos");
}

#[test]
fn reducer_keeps_same_rc_once_expired() {
    let state = Rc::new(Countdown::ZERO);
    let next = state.clone().reduce(CountdownAction::Tick);
    assert!(Rc::ptr_eq(&state, &next));
}

#[test]
fn reducer_ticks() {
    let state = Rc::new(Countdown::new(0, 0, 0, 2));
    let next = state.reduce(CountdownAction::Tick);
    assert_eq!(*next, Countdown::new(0, 0, 0, 1));
}
