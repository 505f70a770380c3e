//! Dot-navigable rotator for the testimonial cards

/// Circular index over a fixed number of cards with auto-advance
#[derive(Debug, Clone)]
pub struct Rotator {
    index: usize,
    len: usize,
    interval: f32,
    elapsed: f32,
}

impl Rotator {
    /// `len == 0` yields a rotator that never moves
    pub fn new(len: usize, interval: f32) -> Self {
        Self {
            index: 0,
            len,
            interval,
            elapsed: 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.elapsed = 0.0;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.elapsed = 0.0;
        self.index
    }

    /// Jump to a dot. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
            self.elapsed = 0.0;
        }
        self.index
    }

    /// Advance the auto-rotate clock. Returns the new index when it rotated.
    pub fn tick(&mut self, dt: f32) -> Option<usize> {
        if self.len < 2 || self.interval <= 0.0 {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed -= self.interval;
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut r = Rotator::new(3, 5.0);
        assert_eq!(r.previous(), 2);
        assert_eq!(r.next(), 0);
        assert_eq!(r.next(), 1);
    }

    #[test]
    fn test_show_ignores_out_of_range() {
        let mut r = Rotator::new(3, 5.0);
        assert_eq!(r.show(2), 2);
        assert_eq!(r.show(7), 2);
    }

    #[test]
    fn test_auto_advance() {
        let mut r = Rotator::new(3, 5.0);
        assert_eq!(r.tick(4.0), None);
        assert_eq!(r.tick(1.5), Some(1));
        assert_eq!(r.tick(4.0), None);
        assert_eq!(r.tick(0.5), Some(2));
    }

    #[test]
    fn test_manual_navigation_restarts_interval() {
        let mut r = Rotator::new(3, 5.0);
        r.tick(4.5);
        r.show(0);
        assert_eq!(r.tick(1.0), None);
    }

    #[test]
    fn test_empty_never_moves() {
        let mut r = Rotator::new(0, 5.0);
        assert_eq!(r.next(), 0);
        assert_eq!(r.previous(), 0);
        assert_eq!(r.tick(100.0), None);
    }
}
