//! Showcase settings
//!
//! Read from a JSON block embedded in the page; every field has a default so
//! a partial block only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// What happens when navigation arrives while slides are still moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPolicy {
    /// Accept the step and retarget in-flight slide transitions
    #[default]
    Overlap,
    /// Refuse the step until the previous re-layout has settled
    Debounce,
}

impl NavigationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationPolicy::Overlap => "overlap",
            NavigationPolicy::Debounce => "debounce",
        }
    }
}

/// Showcase settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Slides kept on each side of the active one
    pub buffer_size: usize,
    /// Horizontal distance between slides (px)
    pub slide_width: f32,
    pub active_scale: f32,
    pub inactive_scale: f32,
    pub active_z: i32,
    pub inactive_z: i32,
    pub navigation: NavigationPolicy,

    // === Timing (seconds) ===
    pub slide_duration: f32,
    pub preview_duration: f32,
    pub price_duration: f32,
    pub testimonial_interval: f32,

    // === Input ===
    /// Minimum swipe travel (px)
    pub swipe_threshold: f32,

    // === Accessibility ===
    /// Skip eased transitions entirely
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            buffer_size: BUFFER_SIZE,
            slide_width: SLIDE_WIDTH,
            active_scale: ACTIVE_SCALE,
            inactive_scale: INACTIVE_SCALE,
            active_z: ACTIVE_Z,
            inactive_z: INACTIVE_Z,
            navigation: NavigationPolicy::Overlap,

            slide_duration: SLIDE_DURATION,
            preview_duration: PREVIEW_DURATION,
            price_duration: PRICE_DURATION,
            testimonial_interval: TESTIMONIAL_INTERVAL,

            swipe_threshold: SWIPE_THRESHOLD,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse and validate a (possibly partial) JSON settings block
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_size > MAX_BUFFER_SIZE {
            return Err(Error::Config(format!(
                "buffer_size {} exceeds {}",
                self.buffer_size, MAX_BUFFER_SIZE
            )));
        }
        if !(self.slide_width.is_finite() && self.slide_width > 0.0) {
            return Err(Error::Config(format!(
                "slide_width must be positive, got {}",
                self.slide_width
            )));
        }
        let non_negative = [
            ("active_scale", self.active_scale),
            ("inactive_scale", self.inactive_scale),
            ("swipe_threshold", self.swipe_threshold),
            ("slide_duration", self.slide_duration),
            ("preview_duration", self.preview_duration),
            ("price_duration", self.price_duration),
            ("testimonial_interval", self.testimonial_interval),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::Config(format!("{name} must be >= 0, got {value}")));
            }
        }
        Ok(())
    }

    /// Number of live slides (2B + 1)
    pub fn window_len(&self) -> usize {
        self.buffer_size * 2 + 1
    }

    /// Effective slide duration (respects reduced_motion)
    pub fn effective_slide_duration(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { self.slide_duration }
    }

    /// Effective preview duration (respects reduced_motion)
    pub fn effective_preview_duration(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { self.preview_duration }
    }

    /// Effective price counter duration (respects reduced_motion)
    pub fn effective_price_duration(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { self.price_duration }
    }

    /// Element id of the embedded settings block
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "showcase-settings";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring showcase settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
