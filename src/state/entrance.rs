//! One-shot entrance animation bookkeeping.
//!
//! Targets are addressed by their index in the list collected at setup. An
//! explicit per-target flag records whether the entrance already ran, so a
//! late or duplicated intersection report never restarts it.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

/// One intersection report for a tracked target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub target: usize,
    pub is_intersecting: bool,
    /// Zero-based position among the target's element siblings.
    pub sibling_index: usize,
}

/// A target that should start its entrance animation now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub target: usize,
    pub delay_ms: u64,
}

impl Reveal {
    /// Value for the `animation-delay` style property.
    pub fn delay_css(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EntranceTracker {
    animated: Vec<bool>,
    stagger_ms: u32,
}

impl EntranceTracker {
    pub fn new(target_count: usize, stagger_ms: u32) -> Self {
        Self { animated: vec![false; target_count], stagger_ms }
    }

    pub fn is_animated(&self, target: usize) -> bool {
        self.animated.get(target).copied().unwrap_or(false)
    }

    /// Targets still waiting for their entrance.
    pub fn pending(&self) -> usize {
        self.animated.iter().filter(|done| !**done).count()
    }

    /// Consume a batch of reports, returning the targets to reveal.
    ///
    /// Non-intersecting reports, unknown targets, and targets already
    /// revealed are dropped.
    pub fn observe<I>(&mut self, entries: I) -> Vec<Reveal>
    where
        I: IntoIterator<Item = Intersection>,
    {
        let mut reveals = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(done) = self.animated.get_mut(entry.target) else {
                continue;
            };
            if *done {
                continue;
            }
            *done = true;
            let position = u64::try_from(entry.sibling_index).unwrap_or(u64::MAX);
            reveals.push(Reveal { target: entry.target, delay_ms: position.saturating_mul(u64::from(self.stagger_ms)) });
        }
        reveals
    }
}
