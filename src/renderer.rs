//! Visual proxy abstraction
//!
//! The carousel creates one proxy per live slot, writes transforms to it and
//! destroys it on eviction. It never reads rendering state back.

use std::collections::BTreeMap;

use crate::carousel::layout::SlotTransform;
use crate::catalog::Product;

/// Backend that owns the on-screen representation of slides
pub trait SlideRenderer {
    /// Exclusively owned by one slot
    type Handle;

    /// Create a proxy showing `product`, already placed at `transform`
    fn create(&mut self, product: &Product, relative: i32, transform: SlotTransform) -> Self::Handle;

    /// Write the current transform
    fn apply(&mut self, handle: &Self::Handle, transform: SlotTransform);

    /// Tear down an evicted proxy
    fn destroy(&mut self, handle: Self::Handle);
}

/// A slide as seen by the headless backend
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSlide {
    pub product: String,
    /// Relative index at creation time
    pub spawned_at: i32,
    pub transform: SlotTransform,
}

/// Renderer that keeps slides in memory (native builds and tests)
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    slides: BTreeMap<u32, HeadlessSlide>,
    next_id: u32,
    pub created: usize,
    pub destroyed: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live proxies
    pub fn live(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, handle: u32) -> Option<&HeadlessSlide> {
        self.slides.get(&handle)
    }
}

impl SlideRenderer for HeadlessRenderer {
    type Handle = u32;

    fn create(&mut self, product: &Product, relative: i32, transform: SlotTransform) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.created += 1;
        self.slides.insert(
            id,
            HeadlessSlide {
                product: product.name.clone(),
                spawned_at: relative,
                transform,
            },
        );
        id
    }

    fn apply(&mut self, handle: &u32, transform: SlotTransform) {
        if let Some(slide) = self.slides.get_mut(handle) {
            slide.transform = transform;
        } else {
            log::warn!("apply on destroyed slide {}", handle);
        }
    }

    fn destroy(&mut self, handle: u32) {
        if self.slides.remove(&handle).is_some() {
            self.destroyed += 1;
        }
    }
}
