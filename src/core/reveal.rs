use super::constants::REVEAL_STAGGER_MS;

/// Inline styles applied to reveal children before observation starts.
pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px) scale(0.95)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Resting styles a child animates to once its section is revealed.
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0) scale(1)";

/// Visible state of one section. Only ever moves hidden -> visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    /// Feed one intersection report. Returns true only for the report that
    /// flips the section to visible.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Reveal state for every observed section, owned by the controller rather
/// than read back from markup classes.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    latches: Vec<RevealLatch>,
}

impl RevealTracker {
    pub fn new(sections: usize) -> Self {
        Self {
            latches: vec![RevealLatch::default(); sections],
        }
    }

    /// Returns true when section `index` should run its reveal now.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        self.latches
            .get_mut(index)
            .is_some_and(|latch| latch.observe(is_intersecting))
    }

    pub fn revealed_count(&self) -> usize {
        self.latches.iter().filter(|l| l.is_visible()).count()
    }
}

#[inline]
pub fn stagger_delay_ms(child_index: usize) -> i32 {
    i32::try_from(child_index)
        .unwrap_or(i32::MAX)
        .saturating_mul(REVEAL_STAGGER_MS)
}
