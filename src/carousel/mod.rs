//! Windowed carousel over a circular catalog
//!
//! Keeps `2B + 1` live slides around an unbounded cursor. Navigation recycles
//! the window one slot at a time: the far slide is evicted, every other slide
//! shifts its relative index, and one new slide enters on the opposite edge.

pub mod layout;
pub mod window;

pub use layout::{SlotTransform, preview_open, resting};
pub use window::{SlideWindow, Slot, SlotId};

use crate::catalog::{Catalog, Product};
use crate::error::{Error, Result};
use crate::renderer::SlideRenderer;
use crate::settings::{NavigationPolicy, Settings};
use crate::tween::{Ease, Timeline, Tween};
use crate::wrap_index;

/// Circular carousel with a recycled window of slides
pub struct Carousel<R: SlideRenderer> {
    catalog: Catalog,
    settings: Settings,
    /// Unbounded logical position; only its residue mod N is observable
    cursor: i64,
    window: SlideWindow<R::Handle>,
    timeline: Timeline<SlotId, SlotTransform>,
    renderer: R,
    next_slot_id: u32,
    /// Set while an overlay owns the screen
    locked: bool,
    /// Slides are arranged around an open preview panel
    preview_layout: bool,
}

impl<R: SlideRenderer> Carousel<R> {
    /// Populate relative indices `-B..=B` around cursor 0
    pub fn new(catalog: Catalog, settings: &Settings, renderer: R) -> Result<Self> {
        settings.validate()?;
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut carousel = Self {
            catalog,
            settings: settings.clone(),
            cursor: 0,
            window: SlideWindow::new(settings.buffer_size),
            timeline: Timeline::new(),
            renderer,
            next_slot_id: 0,
            locked: false,
            preview_layout: false,
        };
        carousel.populate();

        log::info!(
            "Carousel initialized: {} products, {} live slides, {} navigation",
            carousel.catalog.len(),
            carousel.window.len(),
            carousel.settings.navigation.as_str()
        );
        Ok(carousel)
    }

    fn half_width(&self) -> i32 {
        self.window.half_width()
    }

    fn populate(&mut self) {
        let b = self.half_width();
        for relative in -b..=b {
            let slot = self.spawn(relative);
            self.window.push_back(slot);
        }
    }

    /// Create the slide for `relative` under the current cursor, placed at rest
    fn spawn(&mut self, relative: i32) -> Slot<R::Handle> {
        let position = self.cursor + relative as i64;
        let actual = wrap_index(position, self.catalog.len());
        let transform = layout::resting(relative, &self.settings);
        let handle = self
            .renderer
            .create(self.catalog.product_at(position), relative, transform);

        let id = SlotId(self.next_slot_id);
        self.next_slot_id = self.next_slot_id.wrapping_add(1);

        Slot {
            id,
            relative,
            actual,
            current: transform,
            handle,
        }
    }

    fn retire(&mut self, slot: Slot<R::Handle>) {
        self.timeline.cancel(slot.id);
        self.renderer.destroy(slot.handle);
    }

    fn step_forward(&mut self) {
        self.cursor += 1;
        let incoming = self.spawn(self.half_width());
        if let Some(evicted) = self.window.slide_forward(incoming) {
            self.retire(evicted);
        }
    }

    fn step_backward(&mut self) {
        self.cursor -= 1;
        let incoming = self.spawn(-self.half_width());
        if let Some(evicted) = self.window.slide_backward(incoming) {
            self.retire(evicted);
        }
    }

    /// Retarget every slide to its layout position
    fn relayout(&mut self, ease: Ease) {
        let tween = Tween::new(self.settings.effective_slide_duration(), ease);
        for slot in self.window.iter() {
            let target = if self.preview_layout {
                layout::preview_open(slot.relative, &self.settings)
            } else {
                layout::resting(slot.relative, &self.settings)
            };
            self.timeline.animate(slot.id, slot.current, target, tween);
        }
    }

    /// Whether `advance`/`retreat`/`jump_to` would currently be accepted
    pub fn can_navigate(&self) -> bool {
        if self.locked {
            return false;
        }
        match self.settings.navigation {
            NavigationPolicy::Overlap => true,
            NavigationPolicy::Debounce => !self.timeline.is_animating(),
        }
    }

    /// Move one product forward. Returns the new actual index, or `None` if refused.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.can_navigate() {
            log::debug!("advance refused");
            return None;
        }
        self.step_forward();
        self.relayout(Ease::Power3Out);
        log::debug!("advance -> cursor {}", self.cursor);
        Some(self.current_actual_index())
    }

    /// Move one product backward. Returns the new actual index, or `None` if refused.
    pub fn retreat(&mut self) -> Option<usize> {
        if !self.can_navigate() {
            log::debug!("retreat refused");
            return None;
        }
        self.step_backward();
        self.relayout(Ease::Power3Out);
        log::debug!("retreat -> cursor {}", self.cursor);
        Some(self.current_actual_index())
    }

    /// Bring catalog index `actual` to the centre along the shorter direction.
    ///
    /// Short hops recycle slides one step at a time; longer ones rebuild the
    /// window anchored at the target.
    pub fn jump_to(&mut self, actual: usize) -> Result<Option<usize>> {
        let len = self.catalog.len();
        if actual >= len {
            return Err(Error::IndexOutOfRange { index: actual, len });
        }
        if !self.can_navigate() {
            log::debug!("jump_to({}) refused", actual);
            return Ok(None);
        }

        let current = self.current_actual_index();
        let forward = (actual + len - current) % len;
        let delta = if forward <= len / 2 {
            forward as i64
        } else {
            forward as i64 - len as i64
        };
        if delta == 0 {
            return Ok(Some(current));
        }

        let steps = delta.unsigned_abs();
        if steps <= self.half_width() as u64 {
            for _ in 0..steps {
                if delta > 0 {
                    self.step_forward();
                } else {
                    self.step_backward();
                }
            }
        } else {
            for slot in self.window.drain() {
                self.timeline.cancel(slot.id);
                self.renderer.destroy(slot.handle);
            }
            self.cursor += delta;
            self.populate();
        }
        self.relayout(Ease::Power3Out);

        log::debug!("jump_to({}) -> cursor {} (delta {})", actual, self.cursor, delta);
        Ok(Some(self.current_actual_index()))
    }

    /// Arrange slides around (or back from) the preview panel
    pub fn set_preview_layout(&mut self, open: bool) {
        self.preview_layout = open;
        self.relayout(Ease::Power3InOut);
    }

    /// Advance slide transitions by `dt` seconds and push them to the renderer.
    /// Returns true once every slide has settled.
    pub fn tick(&mut self, dt: f32) -> bool {
        let frame = self.timeline.advance(dt);
        for (id, transform) in frame.samples {
            if let Some(slot) = self.window.find_mut(id) {
                slot.current = transform;
                self.renderer.apply(&slot.handle, transform);
            }
        }
        !self.timeline.is_animating()
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Slide transitions still in flight
    pub fn is_animating(&self) -> bool {
        self.timeline.is_animating()
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Catalog index of the centred slide, always in `[0, N)`
    pub fn current_actual_index(&self) -> usize {
        wrap_index(self.cursor, self.catalog.len())
    }

    pub fn active_product(&self) -> &Product {
        self.catalog.product_at(self.cursor)
    }

    /// `(relative, actual)` for every live slide, ordered by relative index
    pub fn window_map(&self) -> Vec<(i32, usize)> {
        self.window.iter().map(|s| (s.relative, s.actual)).collect()
    }

    pub fn window(&self) -> &SlideWindow<R::Handle> {
        &self.window
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::renderer::HeadlessRenderer;
    use proptest::prelude::*;

    fn catalog(n: usize) -> Catalog {
        let products = (0..n)
            .map(|i| {
                let name = ((b'A' + i as u8) as char).to_string();
                Product::new(name, format!("{i}.png"), "tag", format!("/p/{i}"), 10.0, 4.0)
            })
            .collect();
        Catalog::new(products).unwrap()
    }

    fn carousel(n: usize, buffer: usize) -> Carousel<HeadlessRenderer> {
        let settings = Settings {
            buffer_size: buffer,
            ..Default::default()
        };
        Carousel::new(catalog(n), &settings, HeadlessRenderer::new()).unwrap()
    }

    fn names(c: &Carousel<HeadlessRenderer>) -> Vec<(i32, String)> {
        c.window_map()
            .into_iter()
            .map(|(rel, actual)| (rel, c.catalog().get(actual).unwrap().name.clone()))
            .collect()
    }

    fn pairs(items: &[(i32, &str)]) -> Vec<(i32, String)> {
        items.iter().map(|(r, n)| (*r, n.to_string())).collect()
    }

    #[test]
    fn test_three_products_window_of_three() {
        let mut c = carousel(3, 1);
        assert_eq!(names(&c), pairs(&[(-1, "C"), (0, "A"), (1, "B")]));

        assert_eq!(c.advance(), Some(1));
        assert_eq!(c.cursor(), 1);
        assert_eq!(names(&c), pairs(&[(-1, "A"), (0, "B"), (1, "C")]));

        assert_eq!(c.advance(), Some(2));
        assert_eq!(names(&c), pairs(&[(-1, "B"), (0, "C"), (1, "A")]));

        assert_eq!(c.advance(), Some(0));
        assert_eq!(c.cursor(), 3);
        assert_eq!(names(&c), pairs(&[(-1, "C"), (0, "A"), (1, "B")]));
    }

    #[test]
    fn test_initial_placement() {
        let c = carousel(8, 5);
        assert_eq!(c.window().len(), 11);
        let active = c.window().active().unwrap();
        assert_eq!(active.current.scale, 1.25);
        assert_eq!(active.current.z_index, 100);
        let edge = c.window().get(-5).unwrap();
        assert_eq!(edge.current.offset.x, -5.0 * 375.0);
        assert_eq!(edge.current.scale, 0.75);
    }

    #[test]
    fn test_navigation_recycles_one_slide() {
        let mut c = carousel(8, 5);
        assert_eq!(c.renderer().created, 11);

        c.advance();
        assert_eq!(c.renderer().created, 12);
        assert_eq!(c.renderer().destroyed, 1);
        assert_eq!(c.renderer().live(), 11);

        c.retreat();
        assert_eq!(c.renderer().created, 13);
        assert_eq!(c.renderer().destroyed, 2);
        assert_eq!(c.renderer().live(), 11);
    }

    #[test]
    fn test_retreat_wraps_negative() {
        let mut c = carousel(4, 2);
        assert_eq!(c.retreat(), Some(3));
        assert_eq!(c.cursor(), -1);
        assert_eq!(c.active_product().name, "D");
        assert!(c.window().is_full());
    }

    #[test]
    fn test_tick_settles_slides_at_rest() {
        let mut c = carousel(5, 2);
        c.advance();
        assert!(c.is_animating());
        assert!(!c.tick(0.3));
        assert!(c.tick(0.5));

        for slot in c.window().iter() {
            let expected = resting(slot.relative, c.settings());
            assert_eq!(slot.current, expected);
            assert_eq!(c.renderer().slide(slot.handle).unwrap().transform, expected);
        }
    }

    #[test]
    fn test_locked_refuses_navigation() {
        let mut c = carousel(5, 2);
        c.set_locked(true);
        assert_eq!(c.advance(), None);
        assert_eq!(c.retreat(), None);
        assert_eq!(c.jump_to(3).unwrap(), None);
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn test_debounce_policy_waits_for_settle() {
        let settings = Settings {
            buffer_size: 2,
            navigation: NavigationPolicy::Debounce,
            ..Default::default()
        };
        let mut c = Carousel::new(catalog(5), &settings, HeadlessRenderer::new()).unwrap();
        assert_eq!(c.advance(), Some(1));
        assert_eq!(c.advance(), None);
        c.tick(1.0);
        assert_eq!(c.advance(), Some(2));
    }

    #[test]
    fn test_overlap_policy_accepts_rapid_steps() {
        let mut c = carousel(5, 2);
        assert_eq!(c.advance(), Some(1));
        assert_eq!(c.advance(), Some(2));
        assert_eq!(c.advance(), Some(3));
        assert!(c.window().is_full());
    }

    #[test]
    fn test_jump_to_short_hop_recycles() {
        let mut c = carousel(10, 3);
        assert_eq!(c.jump_to(2).unwrap(), Some(2));
        assert_eq!(c.cursor(), 2);
        assert_eq!(c.renderer().destroyed, 2);

        // Shorter to go backwards from 2 to 9
        assert_eq!(c.jump_to(9).unwrap(), Some(9));
        assert_eq!(c.cursor(), -1);
        assert!(c.window().is_full());
    }

    #[test]
    fn test_jump_to_short_hop_window_map() {
        let mut c = carousel(7, 3);
        assert_eq!(c.jump_to(5).unwrap(), Some(5));
        assert_eq!(c.cursor(), -2);
        assert_eq!(
            c.window_map(),
            vec![(-3, 2), (-2, 3), (-1, 4), (0, 5), (1, 6), (2, 0), (3, 1)]
        );
    }

    #[test]
    fn test_jump_to_far_rebuilds() {
        let mut c = carousel(20, 2);
        assert_eq!(c.jump_to(10).unwrap(), Some(10));
        assert_eq!(c.renderer().destroyed, 5);
        assert_eq!(c.renderer().live(), 5);
        let expected: Vec<_> = (-2..=2).map(|r| (r, (10 + r) as usize)).collect();
        assert_eq!(c.window_map(), expected);
    }

    #[test]
    fn test_jump_to_same_index_is_noop() {
        let mut c = carousel(4, 1);
        assert_eq!(c.jump_to(0).unwrap(), Some(0));
        assert_eq!(c.renderer().created, 3);
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut c = carousel(4, 1);
        assert!(matches!(
            c.jump_to(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_window_larger_than_catalog() {
        let mut c = carousel(1, 2);
        assert!(c.window_map().iter().all(|(_, actual)| *actual == 0));
        assert_eq!(c.advance(), Some(0));
        assert_eq!(c.retreat(), Some(0));
    }

    #[test]
    fn test_preview_layout_round_trip() {
        let mut c = carousel(6, 3);
        c.set_preview_layout(true);
        c.tick(1.0);
        let active = c.window().active().unwrap();
        assert_eq!(active.current.opacity, 0.0);
        assert_eq!(c.window().get(1).unwrap().current.offset.x, 375.0 * 1.5);

        c.set_preview_layout(false);
        c.tick(1.0);
        for slot in c.window().iter() {
            assert_eq!(slot.current, resting(slot.relative, c.settings()));
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            buffer_size: 1000,
            ..Default::default()
        };
        assert!(matches!(
            Carousel::new(catalog(3), &settings, HeadlessRenderer::new()),
            Err(Error::Config(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_advance_k_times(n in 1usize..12, buffer in 0usize..6, k in 0usize..60) {
            let mut c = carousel(n, buffer);
            for _ in 0..k {
                c.advance();
            }
            prop_assert_eq!(c.current_actual_index(), k % n);
            prop_assert!(c.window().is_full());
        }

        #[test]
        fn prop_retreat_k_times(n in 1usize..12, buffer in 0usize..6, k in 0i64..60) {
            let mut c = carousel(n, buffer);
            for _ in 0..k {
                c.retreat();
            }
            prop_assert_eq!(c.current_actual_index(), (-k).rem_euclid(n as i64) as usize);
        }

        #[test]
        fn prop_advance_retreat_round_trip(
            n in 1usize..12,
            buffer in 0usize..6,
            moves in proptest::collection::vec(any::<bool>(), 0..30),
        ) {
            let mut c = carousel(n, buffer);
            for forward in &moves {
                if *forward { c.advance(); } else { c.retreat(); }
            }
            let cursor = c.cursor();
            let map = c.window_map();

            c.advance();
            c.retreat();
            prop_assert_eq!(c.cursor(), cursor);
            prop_assert_eq!(c.window_map(), map.clone());

            c.retreat();
            c.advance();
            prop_assert_eq!(c.cursor(), cursor);
            prop_assert_eq!(c.window_map(), map);
        }

        #[test]
        fn prop_window_map_tracks_cursor(
            n in 1usize..12,
            buffer in 0usize..6,
            moves in proptest::collection::vec(any::<bool>(), 0..30),
        ) {
            let mut c = carousel(n, buffer);
            for forward in moves {
                if forward { c.advance(); } else { c.retreat(); }
                let b = buffer as i32;
                let expected: Vec<_> = (-b..=b)
                    .map(|r| (r, wrap_index(c.cursor() + r as i64, n)))
                    .collect();
                prop_assert_eq!(c.window_map(), expected);
                prop_assert_eq!(c.renderer().live(), 2 * buffer + 1);
            }
        }

        #[test]
        fn prop_jump_to_lands_on_target(n in 1usize..15, buffer in 0usize..5, target in 0usize..15) {
            let mut c = carousel(n, buffer);
            let target = target % n;
            prop_assert_eq!(c.jump_to(target).unwrap(), Some(target));
            prop_assert_eq!(c.active_product().name.clone(), c.catalog().get(target).unwrap().name.clone());
            prop_assert!(c.window().is_full());

            let b = buffer as i32;
            let expected: Vec<_> = (-b..=b)
                .map(|r| (r, wrap_index(c.cursor() + r as i64, n)))
                .collect();
            prop_assert_eq!(c.window_map(), expected);

            prop_assert!(c.tick(1.0));
            for slot in c.window().iter() {
                prop_assert_eq!(slot.current, resting(slot.relative, c.settings()));
            }
        }

        #[test]
        fn prop_rapid_steps_settle_at_rest(
            n in 1usize..12,
            buffer in 0usize..6,
            moves in proptest::collection::vec(any::<bool>(), 1..20),
        ) {
            let mut c = carousel(n, buffer);
            for forward in moves {
                if forward { c.advance(); } else { c.retreat(); }
                c.tick(0.1);
            }
            prop_assert!(c.tick(1.0));
            for slot in c.window().iter() {
                prop_assert_eq!(slot.current, resting(slot.relative, c.settings()));
                prop_assert_eq!(c.renderer().slide(slot.handle).unwrap().transform, slot.current);
            }
        }
    }
}
