//! Star rating breakdown for the detail display

use crate::consts::MAX_STARS;

/// How many full, half and empty star icons to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Any fractional remainder renders as one half star
    pub fn from_rating(rating: f32) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, MAX_STARS as f32)
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = rating.fract() != 0.0;
        let empty = MAX_STARS - full - half as u8;
        Self { full, half, empty }
    }

    /// Half star count as a number (0 or 1)
    pub fn half_count(&self) -> u8 {
        self.half as u8
    }
}

/// Rating label with one decimal ("4.0", "3.5")
pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_and_a_half() {
        let stars = StarRating::from_rating(3.5);
        assert_eq!((stars.full, stars.half_count(), stars.empty), (3, 1, 1));
    }

    #[test]
    fn test_full_marks() {
        let stars = StarRating::from_rating(5.0);
        assert_eq!((stars.full, stars.half_count(), stars.empty), (5, 0, 0));
    }

    #[test]
    fn test_zero() {
        let stars = StarRating::from_rating(0.0);
        assert_eq!((stars.full, stars.half_count(), stars.empty), (0, 0, 5));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(StarRating::from_rating(7.0), StarRating::from_rating(5.0));
        assert_eq!(StarRating::from_rating(-1.0), StarRating::from_rating(0.0));
        assert_eq!(StarRating::from_rating(f32::NAN), StarRating::from_rating(0.0));
    }

    #[test]
    fn test_always_five_icons() {
        for tenths in 0..=50 {
            let stars = StarRating::from_rating(tenths as f32 / 10.0);
            assert_eq!(stars.full + stars.half_count() + stars.empty, MAX_STARS);
        }
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(3.5), "3.5");
    }
}
