use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use yew::Reducible;

/// Expand/collapse state for a list of items. Items are independent: opening
/// one never closes another. Ids that were never toggled read as collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion<K: Eq + Hash> {
    expanded: HashMap<K, bool>,
}

impl<K: Eq + Hash> Default for Accordion<K> {
    fn default() -> Self {
        Self {
            expanded: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Accordion<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips `id` and returns its new state.
    pub fn toggle(&mut self, id: K) -> bool {
        let entry = self.expanded.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }
}

impl<K: Eq + Hash + Clone + 'static> Reducible for Accordion<K> {
    type Action = K;

    fn reduce(self: Rc<Self>, id: K) -> Rc<Self> {
        let mut next = (*self).clone();
        next.toggle(id);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_ids_start_collapsed() {
        let acc: Accordion<u32> = Accordion::new();
        assert!(!acc.is_expanded(&7));
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut acc = Accordion::new();
        for id in ["a", "b", "c"] {
            let before = acc.is_expanded(&id);
            acc.toggle(id);
            acc.toggle(id);
            assert_eq!(acc.is_expanded(&id), before);
        }

        acc.toggle("a");
        acc.toggle("a");
        acc.toggle("a");
        assert!(acc.is_expanded(&"a"));
    }

    #[test]
    fn toggling_one_item_leaves_others_alone() {
        let mut acc = Accordion::new();
        acc.toggle(1u32);
        assert!(acc.toggle(2));
        assert!(acc.is_expanded(&1));
        assert!(acc.is_expanded(&2));
        assert!(!acc.toggle(1));
        assert!(!acc.is_expanded(&1));
        assert!(acc.is_expanded(&2));
        assert!(!acc.is_expanded(&3));
    }

    #[test]
    fn separate_pools_do_not_share_state() {
        let mut modules: Accordion<u32> = Accordion::new();
        let faqs: Accordion<u32> = Accordion::new();
        modules.toggle(0);
        assert!(modules.is_expanded(&0));
        assert!(!faqs.is_expanded(&0));
    }

    #[test]
    fn reducer_toggles_without_mutating_previous_state() {
        let before: Rc<Accordion<usize>> = Rc::new(Accordion::new());
        let after = before.clone().reduce(4);
        assert!(!before.is_expanded(&4));
        assert!(after.is_expanded(&4));
    }
}
