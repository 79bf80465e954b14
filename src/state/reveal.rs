/// One-way latch for scroll-triggered entrance transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
    fired: u32,
}

impl RevealLatch {
    /// Feed the latest visibility; returns true only on the first entry
    pub fn observe(&mut self, in_view: bool) -> bool {
        if self.revealed || !in_view {
            return false;
        }
        self.revealed = true;
        self.fired += 1;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn fired(&self) -> u32 {
        self.fired
    }
}

/// Whether an element spanning `top..bottom` overlaps a viewport of the
/// given height (client coordinates)
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    viewport_height > 0.0 && top < viewport_height && bottom > 0.0
}

/// Transition delay for the `index`th child of a staggered group
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_once_across_scroll_passes() {
        let mut latch = RevealLatch::default();
        let passes = [false, true, true, false, false, true, false, true];
        let fired: Vec<bool> = passes.iter().map(|&v| latch.observe(v)).collect();
        assert_eq!(fired.iter().filter(|&&f| f).count(), 1);
        assert!(fired[1]);
        assert_eq!(latch.fired(), 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn latch_stays_closed_until_in_view() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
        assert_eq!(latch.fired(), 0);
    }

    #[test]
    fn viewport_intersection() {
        assert!(intersects_viewport(100.0, 300.0, 800.0));
        assert!(intersects_viewport(-200.0, 10.0, 800.0));
        assert!(!intersects_viewport(900.0, 1200.0, 800.0));
        assert!(!intersects_viewport(-300.0, -1.0, 800.0));
        assert!(!intersects_viewport(0.0, 100.0, 0.0));
    }

    #[test]
    fn stagger_grows_linearly() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay_ms(i, 200)).collect();
        assert_eq!(delays, [0, 200, 400, 600]);
    }
}
