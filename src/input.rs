//! Input mapping
//!
//! Keys, swipes and button clicks all reduce to a `Command` for the showcase.

/// User intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    TogglePreview,
    ToggleWishlist,
}

/// Arrow keys navigate; everything else is ignored
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowRight" => Some(Command::Next),
        "ArrowLeft" => Some(Command::Previous),
        _ => None,
    }
}

/// Horizontal swipe detector for touch input
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finger lifted at `x`. A leftward swipe shows the next product.
    pub fn finish(&mut self, x: f32) -> Option<Command> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(Command::Next)
        } else {
            Some(Command::Previous)
        }
    }
}
