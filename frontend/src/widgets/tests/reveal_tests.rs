use super::RevealTracker;

fn states(tracker: &RevealTracker) -> Vec<bool> {
    (0..tracker.len()).map(|i| tracker.is_revealed(i)).collect()
}

#[test]
fn starts_all_hidden() {
    let tracker = RevealTracker::new(5);
    assert_eq!(states(&tracker), vec![false; 5]);
    assert_eq!(tracker.revealed_count(), 0);
    assert_eq!(tracker.percent(), 0.0);
}

#[test]
fn revealing_twice_is_the_same_as_once() {
    let mut tracker = RevealTracker::new(5);
    let first = tracker.reveal(2);
    let second = tracker.reveal(2);

    assert_eq!(states(&tracker), vec![false, false, true, false, false]);
    assert_eq!(first.revealed_count, 1);
    assert_eq!(second.revealed_count, 1);
    assert!(!second.completed);
}

#[test]
fn idempotence_holds_for_every_index() {
    for i in 0..5 {
        let mut once = RevealTracker::new(5);
        once.reveal(i);
        let mut twice = RevealTracker::new(5);
        twice.reveal(i);
        twice.reveal(i);
        assert_eq!(once, twice);
    }
}

fn permutations(items: Vec<usize>) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.clone();
        let head = rest.remove(i);
        for mut tail in permutations(rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn completion_fires_exactly_once_in_any_order() {
    for order in permutations((0..5).collect()) {
        let mut tracker = RevealTracker::new(5);
        let mut completions = 0;
        for &i in &order {
            if tracker.reveal(i).completed {
                completions += 1;
            }
        }
        // Extra reveals after completion never fire again.
        for &i in &order {
            if tracker.reveal(i).completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1, "order {:?}", order);
        assert!(tracker.all_revealed());
    }
}

#[test]
fn completion_is_reported_on_the_last_reveal() {
    let mut tracker = RevealTracker::new(3);
    assert!(!tracker.reveal(0).completed);
    assert!(!tracker.reveal(1).completed);
    let last = tracker.reveal(2);
    assert!(last.completed);
    assert_eq!(last.revealed_count, 3);
    assert_eq!(tracker.percent(), 100.0);
}

#[test]
fn reveals_never_revert() {
    let mut tracker = RevealTracker::new(5);
    tracker.reveal(4);
    tracker.reveal(0);
    tracker.reveal(4);
    assert!(tracker.is_revealed(0));
    assert!(tracker.is_revealed(4));
    assert_eq!(tracker.revealed_count(), 2);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_index_is_a_contract_violation() {
    let mut tracker = RevealTracker::new(5);
    tracker.reveal(5);
}

#[test]
fn is_revealed_out_of_range_reads_false() {
    let tracker = RevealTracker::new(2);
    assert!(!tracker.is_revealed(9));
}
