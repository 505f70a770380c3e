//! Showcase controller
//!
//! Owns the carousel, preview panel, wishlist and display transitions. Input
//! layers call its operations; display layers drain `ShowcaseEvent`s after
//! each call or frame.

use crate::carousel::Carousel;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::input::Command;
use crate::preview::{PreviewPanel, PreviewPhase};
use crate::renderer::SlideRenderer;
use crate::settings::Settings;
use crate::tween::{Ease, Timeline, Tween};
use crate::view::ProductView;
use crate::wishlist::Wishlist;

/// Change notifications for the page
#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseEvent {
    /// Active product changed, or the preview is about to open
    ProductChanged(ProductView),
    /// Rolling price display value
    PriceCounter(u32),
    PreviewPhaseChanged(PreviewPhase),
    /// Panel position, 0 = hidden, 1 = fully shown
    PreviewMoved(f32),
    /// Navigation buttons enabled/disabled
    NavigationLocked(bool),
    WishlistChanged {
        index: usize,
        active: bool,
        count: usize,
    },
}

/// Scalar display transitions driven alongside the slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Panel,
    Price,
}

pub struct Showcase<R: SlideRenderer> {
    carousel: Carousel<R>,
    preview: PreviewPanel,
    wishlist: Wishlist,
    channels: Timeline<Channel, f32>,
    settings: Settings,
    /// Last sampled panel position
    panel: f32,
    /// Last sampled price counter value
    price: f32,
    events: Vec<ShowcaseEvent>,
}

impl<R: SlideRenderer> Showcase<R> {
    pub fn new(catalog: Catalog, settings: Settings, renderer: R) -> Result<Self> {
        let carousel = Carousel::new(catalog, &settings, renderer)?;
        let mut showcase = Self {
            carousel,
            preview: PreviewPanel::new(),
            wishlist: Wishlist::new(),
            channels: Timeline::new(),
            settings,
            panel: 0.0,
            price: 0.0,
            events: Vec::new(),
        };
        showcase.refresh_product();
        showcase.events.push(ShowcaseEvent::NavigationLocked(false));
        Ok(showcase)
    }

    /// Push the active product to the displays and roll the price toward it
    fn refresh_product(&mut self) {
        let view = self.current_view();
        let tween = Tween::new(self.settings.effective_price_duration(), Ease::Power2Out);
        self.channels
            .animate(Channel::Price, self.price, view.price as f32, tween);
        self.events.push(ShowcaseEvent::ProductChanged(view));
    }

    /// Show the next product. Returns the new actual index, or `None` if refused.
    pub fn next(&mut self) -> Option<usize> {
        if self.preview.blocks_navigation() {
            return None;
        }
        let index = self.carousel.advance()?;
        self.refresh_product();
        Some(index)
    }

    /// Show the previous product. Returns the new actual index, or `None` if refused.
    pub fn previous(&mut self) -> Option<usize> {
        if self.preview.blocks_navigation() {
            return None;
        }
        let index = self.carousel.retreat()?;
        self.refresh_product();
        Some(index)
    }

    /// Centre catalog index `actual`
    pub fn jump_to(&mut self, actual: usize) -> Result<Option<usize>> {
        if self.preview.blocks_navigation() {
            return Ok(None);
        }
        let moved = self.carousel.jump_to(actual)?;
        if moved.is_some() {
            self.refresh_product();
        }
        Ok(moved)
    }

    /// Open or close the preview panel. Returns the phase entered, or `None`
    /// while the previous open/close is still running.
    pub fn toggle_preview(&mut self) -> Option<PreviewPhase> {
        let phase = self.preview.toggle()?;
        let opening = phase == PreviewPhase::Opening;

        self.carousel.set_locked(true);
        self.events.push(ShowcaseEvent::NavigationLocked(true));
        if opening {
            self.refresh_product();
        }

        let target = if opening { 1.0 } else { 0.0 };
        let tween = Tween::new(self.settings.effective_preview_duration(), Ease::Power3InOut);
        self.channels.animate(Channel::Panel, self.panel, target, tween);
        self.carousel.set_preview_layout(opening);

        log::debug!("preview {}", phase.as_str());
        self.events.push(ShowcaseEvent::PreviewPhaseChanged(phase));
        Some(phase)
    }

    /// Flip the active product's wishlist membership. Returns the new membership.
    pub fn toggle_wishlist(&mut self) -> bool {
        let index = self.carousel.current_actual_index();
        let active = self.wishlist.toggle(index);
        log::debug!("wishlist {} -> {} ({} items)", index, active, self.wishlist.len());
        self.events.push(ShowcaseEvent::WishlistChanged {
            index,
            active,
            count: self.wishlist.len(),
        });
        active
    }

    /// Route an input command. Returns true if it changed anything.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::Next => self.next().is_some(),
            Command::Previous => self.previous().is_some(),
            Command::TogglePreview => self.toggle_preview().is_some(),
            Command::ToggleWishlist => {
                self.toggle_wishlist();
                true
            }
        }
    }

    /// Advance all transitions by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.carousel.tick(dt);

        let frame = self.channels.advance(dt);
        for (channel, value) in frame.samples {
            match channel {
                Channel::Panel => {
                    self.panel = value;
                    self.events.push(ShowcaseEvent::PreviewMoved(value));
                }
                Channel::Price => {
                    self.price = value;
                    self.events
                        .push(ShowcaseEvent::PriceCounter(value.max(0.0).round() as u32));
                }
            }
        }

        for (_, channel) in frame.finished {
            if channel == Channel::Panel {
                self.settle_preview();
            }
        }
    }

    /// Panel transition reported finished
    fn settle_preview(&mut self) {
        let phase = self.preview.settle();
        log::debug!("preview settled {}", phase.as_str());
        self.events.push(ShowcaseEvent::PreviewPhaseChanged(phase));
        if phase == PreviewPhase::Closed {
            self.carousel.set_locked(false);
            self.events.push(ShowcaseEvent::NavigationLocked(false));
        }
    }

    pub fn current_view(&self) -> ProductView {
        ProductView::new(
            self.carousel.catalog(),
            self.carousel.current_actual_index(),
            &self.wishlist,
        )
    }

    pub fn current_actual_index(&self) -> usize {
        self.carousel.current_actual_index()
    }

    pub fn preview_phase(&self) -> PreviewPhase {
        self.preview.phase()
    }

    pub fn navigation_locked(&self) -> bool {
        self.preview.blocks_navigation() || self.carousel.is_locked()
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn wishlist_names(&self) -> Vec<String> {
        self.wishlist
            .names(self.carousel.catalog())
            .map(str::to_owned)
            .collect()
    }

    pub fn carousel(&self) -> &Carousel<R> {
        &self.carousel
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<ShowcaseEvent> {
        std::mem::take(&mut self.events)
    }
}
