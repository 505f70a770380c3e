//! Preview panel state machine
//!
//! Closed -> Opening -> Open -> Closing -> Closed. A toggle is only accepted
//! from a settled phase; the in-between phases end when the caller reports
//! the panel transition finished.

use serde::{Deserialize, Serialize};

/// Phase of the preview panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreviewPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PreviewPhase {
    /// Opening or Closing
    pub fn is_transitioning(&self) -> bool {
        matches!(self, PreviewPhase::Opening | PreviewPhase::Closing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewPhase::Closed => "closed",
            PreviewPhase::Opening => "opening",
            PreviewPhase::Open => "open",
            PreviewPhase::Closing => "closing",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PreviewPanel {
    phase: PreviewPhase,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PreviewPhase {
        self.phase
    }

    /// Settled open
    pub fn is_open(&self) -> bool {
        self.phase == PreviewPhase::Open
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_transitioning()
    }

    /// Carousel navigation is only allowed while fully closed
    pub fn blocks_navigation(&self) -> bool {
        self.phase != PreviewPhase::Closed
    }

    /// Start opening or closing. Returns the phase entered, or `None` while a
    /// transition is still in flight.
    pub fn toggle(&mut self) -> Option<PreviewPhase> {
        let next = match self.phase {
            PreviewPhase::Closed => PreviewPhase::Opening,
            PreviewPhase::Open => PreviewPhase::Closing,
            PreviewPhase::Opening | PreviewPhase::Closing => {
                log::debug!("preview toggle ignored while {}", self.phase.as_str());
                return None;
            }
        };
        self.phase = next;
        Some(next)
    }

    /// Finish the in-flight transition. Settled phases are left unchanged.
    pub fn settle(&mut self) -> PreviewPhase {
        self.phase = match self.phase {
            PreviewPhase::Opening => PreviewPhase::Open,
            PreviewPhase::Closing => PreviewPhase::Closed,
            settled => settled,
        };
        self.phase
    }
}
