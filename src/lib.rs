//! Product Showcase - a windowed product carousel for the browser
//!
//! Core modules:
//! - `carousel`: Circular catalog window (slot recycling, cursor, layout)
//! - `showcase`: Controller object owning carousel, preview panel and wishlist
//! - `tween`: Eased transitions with explicit completion signals
//! - `renderer`: Visual proxy abstraction (DOM on web, headless elsewhere)
//! - `catalog`: Product data and validation

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod input;
pub mod preview;
pub mod rating;
pub mod renderer;
pub mod rotator;
pub mod settings;
pub mod showcase;
pub mod tween;
pub mod view;
pub mod wishlist;

pub use catalog::{Catalog, Product};
pub use error::{Error, Result};
pub use settings::{NavigationPolicy, Settings};
pub use showcase::{Showcase, ShowcaseEvent};

/// Showcase configuration constants
pub mod consts {
    /// Slots rendered on each side of the active item
    pub const BUFFER_SIZE: usize = 5;
    /// Upper bound on the buffer half-width (2 * 64 + 1 live slides)
    pub const MAX_BUFFER_SIZE: usize = 64;
    /// Horizontal distance between neighbouring slides (px)
    pub const SLIDE_WIDTH: f32 = 0.375 * 1000.0;

    /// Active slide is enlarged, the rest shrink
    pub const ACTIVE_SCALE: f32 = 1.25;
    pub const INACTIVE_SCALE: f32 = 0.75;
    /// Stacking order
    pub const ACTIVE_Z: i32 = 100;
    pub const INACTIVE_Z: i32 = 1;

    /// Slide re-layout after navigation (seconds)
    pub const SLIDE_DURATION: f32 = 0.75;
    /// Preview panel open/close transition (seconds)
    pub const PREVIEW_DURATION: f32 = 0.6;
    /// Price counter roll (seconds)
    pub const PRICE_DURATION: f32 = 0.8;

    /// Minimum horizontal travel for a touch swipe (px)
    pub const SWIPE_THRESHOLD: f32 = 50.0;
    /// Testimonial auto-advance interval (seconds)
    pub const TESTIMONIAL_INTERVAL: f32 = 5.0;

    /// Ratings are out of this many stars
    pub const MAX_STARS: u8 = 5;
}

/// Map an unbounded cursor onto `[0, len)`.
///
/// `len` must be non-zero; `Catalog` guarantees this for every caller in the crate.
#[inline]
pub fn wrap_index(cursor: i64, len: usize) -> usize {
    cursor.rem_euclid(len as i64) as usize
}
