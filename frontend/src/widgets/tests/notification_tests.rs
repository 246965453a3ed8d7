use super::{hide_deadline, NotificationAction, NotificationSchedule};

const DISPLAY: u64 = 5_000;
const PERIOD: u64 = 45_000;

#[test]
fn show_then_auto_hide_after_display_duration() {
    let mut n = NotificationSchedule::new(DISPLAY);
    assert!(!n.is_visible());

    let deadline = n.show(PERIOD);
    assert!(n.is_visible());
    assert_eq!(deadline, PERIOD + DISPLAY);

    assert!(n.expire(deadline));
    assert!(!n.is_visible());
}

#[test]
fn dismiss_cancels_pending_hide() {
    let mut n = NotificationSchedule::new(DISPLAY);
    let deadline = n.show(0);
    n.dismiss();
    assert!(!n.is_visible());

    // The hide that would have fired does nothing.
    assert!(!n.expire(deadline));
}

#[test]
fn stale_hide_after_dismiss_does_not_close_next_show() {
    let mut n = NotificationSchedule::new(DISPLAY);
    let first = n.show(0);
    n.dismiss();

    // Next show lands before the first show's hide would have fired.
    let second = n.show(3_000);
    assert!(!n.expire(first));
    assert!(n.is_visible());

    assert!(n.expire(second));
    assert!(!n.is_visible());
}

#[test]
fn show_while_visible_resets_deadline_instead_of_stacking() {
    let mut n = NotificationSchedule::new(DISPLAY);
    let first = n.show(0);
    let second = n.show(4_000);
    assert_eq!(second, 4_000 + DISPLAY);

    // The first show's hide arrives: the toast stays up.
    assert!(!n.expire(first));
    assert!(n.is_visible());
    assert!(n.expire(second));
}

#[test]
fn recurring_cycle_shows_and_hides_each_period() {
    let mut n = NotificationSchedule::new(DISPLAY);
    for cycle in 1..=4u64 {
        let deadline = n.show(cycle * PERIOD);
        assert!(n.is_visible());
        assert!(n.expire(deadline));
        assert!(!n.is_visible());
    }
    assert_eq!(n.shown_count(), 4);
}

#[test]
fn apply_reports_changes() {
    let mut n = NotificationSchedule::new(DISPLAY);
    assert!(!n.apply(NotificationAction::Dismiss));
    assert!(n.apply(NotificationAction::Show { now_ms: 10 }));
    assert!(!n.apply(NotificationAction::Expire { deadline_ms: 11 }));
    assert!(n.apply(NotificationAction::Expire {
        deadline_ms: hide_deadline(10, DISPLAY)
    }));
}
