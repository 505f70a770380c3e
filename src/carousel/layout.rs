//! Slot placement
//!
//! Pure functions from a relative index to the visual target of that slot.

use glam::Vec2;

use crate::settings::Settings;
use crate::tween::Lerp;

/// Visual properties written to a slide's proxy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransform {
    /// Translation from the carousel centre (px)
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl Default for SlotTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
            z_index: 0,
        }
    }
}

impl Lerp for SlotTransform {
    fn lerp(self, to: Self, t: f32) -> Self {
        let z = self.z_index as f32 + (to.z_index - self.z_index) as f32 * t;
        Self {
            offset: self.offset.lerp(to.offset, t),
            scale: self.scale.lerp(to.scale, t),
            opacity: self.opacity.lerp(to.opacity, t),
            z_index: z.round() as i32,
        }
    }
}

/// Where a slot sits while browsing
pub fn resting(relative: i32, settings: &Settings) -> SlotTransform {
    let active = relative == 0;
    SlotTransform {
        offset: Vec2::new(relative as f32 * settings.slide_width, 0.0),
        scale: if active {
            settings.active_scale
        } else {
            settings.inactive_scale
        },
        opacity: 1.0,
        z_index: if active {
            settings.active_z
        } else {
            settings.inactive_z
        },
    }
}

/// Where a slot sits while the preview panel covers the carousel.
///
/// The two nearest neighbours on each side slide outward and fade, the
/// active slide shrinks and fades, the rest are already off-screen.
pub fn preview_open(relative: i32, settings: &Settings) -> SlotTransform {
    let rest = resting(relative, settings);
    match relative.unsigned_abs() {
        0 => SlotTransform {
            scale: settings.inactive_scale,
            opacity: 0.0,
            ..rest
        },
        1 | 2 => SlotTransform {
            offset: Vec2::new(relative as f32 * settings.slide_width * 1.5, 0.0),
            opacity: 0.0,
            ..rest
        },
        _ => rest,
    }
}
