//! Snapshot of the active product for the detail and progress displays

use crate::catalog::Catalog;
use crate::rating::{StarRating, format_rating};
use crate::wishlist::Wishlist;

/// Id of the `<style>` element carrying [`Progress::fill_rule`]
pub const PROGRESS_STYLE_ID: &str = "progress-style";

/// Position indicator ("3 / 8")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based
    pub position: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(actual: usize, total: usize) -> Self {
        Self {
            position: actual + 1,
            total,
        }
    }

    /// Fill width of the progress bar, 0-100
    pub fn percent(&self) -> f32 {
        self.position as f32 / self.total as f32 * 100.0
    }

    /// Stylesheet rule sizing the bar's `::after` fill
    pub fn fill_rule(&self) -> String {
        format!(
            ".progress-bar::after {{ width: {:.2}% !important; }}",
            self.percent()
        )
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }
}

/// Everything the detail display shows for one product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub index: usize,
    pub name: String,
    pub image: String,
    pub tag: String,
    pub url: String,
    pub price: f64,
    pub rating: f32,
    pub rating_label: String,
    pub stars: StarRating,
    pub badge: Option<String>,
    pub wishlisted: bool,
    pub progress: Progress,
}

impl ProductView {
    /// `actual` must be in range; out-of-range indices wrap
    pub fn new(catalog: &Catalog, actual: usize, wishlist: &Wishlist) -> Self {
        let product = catalog.product_at(actual as i64);
        let index = actual % catalog.len();
        Self {
            index,
            name: product.name.clone(),
            image: product.image.clone(),
            tag: product.tag.clone(),
            url: product.url.clone(),
            price: product.price,
            rating: product.rating,
            rating_label: format_rating(product.rating),
            stars: StarRating::from_rating(product.rating),
            badge: product.badge.clone(),
            wishlisted: wishlist.contains(index),
            progress: Progress::new(index, catalog.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let progress = Progress::new(1, 4);
        assert_eq!(progress.position, 2);
        assert_eq!(progress.percent(), 50.0);
        assert_eq!(Progress::new(3, 4).percent(), 100.0);
        assert_eq!(progress.label(), "2 / 4");
    }

    #[test]
    fn test_fill_rule() {
        assert_eq!(
            Progress::new(1, 4).fill_rule(),
            ".progress-bar::after { width: 50.00% !important; }"
        );
        assert_eq!(
            Progress::new(0, 3).fill_rule(),
            ".progress-bar::after { width: 33.33% !important; }"
        );
    }

    #[test]
    fn test_view_fields() {
        let catalog = Catalog::builtin();
        let mut wishlist = Wishlist::new();
        wishlist.toggle(3);

        let view = ProductView::new(&catalog, 3, &wishlist);
        assert_eq!(view.name, "Drift Lite");
        assert_eq!(view.rating_label, "3.5");
        assert_eq!(view.stars.full, 3);
        assert!(view.stars.half);
        assert_eq!(view.badge, None);
        assert!(view.wishlisted);
        assert_eq!(view.progress.position, 4);
        assert_eq!(view.progress.total, 8);

        let view = ProductView::new(&catalog, 0, &wishlist);
        assert_eq!(view.badge.as_deref(), Some("New"));
        assert!(!view.wishlisted);
    }
}
