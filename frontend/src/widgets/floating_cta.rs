/// Scroll trigger for the floating call-to-action: shown once the offer
/// section's bottom edge has scrolled above the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatingCtaTrigger {
    visible: bool,
}

impl FloatingCtaTrigger {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds the section's `getBoundingClientRect().bottom`. Returns true when
    /// visibility changed, so callers only re-render on edges.
    pub fn observe(&mut self, section_bottom: f64) -> bool {
        let visible = section_bottom < 0.0;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_after_section_scrolls_out_and_hides_on_return() {
        let mut trigger = FloatingCtaTrigger::default();
        assert!(!trigger.observe(300.0));
        assert!(!trigger.is_visible());

        assert!(trigger.observe(-1.0));
        assert!(trigger.is_visible());
        assert!(!trigger.observe(-500.0));

        assert!(trigger.observe(0.0));
        assert!(!trigger.is_visible());
    }
}
