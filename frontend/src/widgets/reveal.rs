/// Tracks which bonus cards have been unlocked.
///
/// Reveals are one-way. The tracker reports completion exactly once: on the
/// call that flips the last hidden entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    completion_reported: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOutcome {
    pub revealed_count: usize,
    /// True only for the reveal that completed the set.
    pub completed: bool,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
            completion_reported: false,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Panics if `index` is out of range.
    pub fn reveal(&mut self, index: usize) -> RevealOutcome {
        assert!(
            index < self.revealed.len(),
            "bonus index {} out of range for {} bonuses",
            index,
            self.revealed.len()
        );
        self.revealed[index] = true;

        let completed = self.all_revealed() && !self.completion_reported;
        if completed {
            self.completion_reported = true;
        }
        RevealOutcome {
            revealed_count: self.revealed_count(),
            completed,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// Progress bar width, 0..=100.
    pub fn percent(&self) -> f64 {
        if self.revealed.is_empty() {
            return 100.0;
        }
        self.revealed_count() as f64 / self.revealed.len() as f64 * 100.0
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
