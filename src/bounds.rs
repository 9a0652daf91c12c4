//! Viewport bounds: the range the bubble's origin may occupy.

use crate::config::BubbleConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// Per-axis clamp range for the bubble's top-left origin, derived from the
/// viewport dimensions and the configured size and padding.
///
/// Recomputed whenever the host reports a resize. If the viewport is too
/// small to hold the object plus padding, the range collapses to the single
/// point `padding` and the bubble is pinned there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    /// Compute bounds for a viewport of `width` x `height` pixels.
    pub fn from_viewport(width: F, height: F, config: &BubbleConfig<F>) -> Self {
        let min = Vec2::splat(config.padding);
        // Degenerate viewports collapse the range to the padding corner.
        let max = Vec2::new(
            (width - config.size - config.padding).max(min.x),
            (height - config.size - config.padding).max(min.y),
        );
        Bounds { min, max }
    }

    /// Clamp a position into the valid range.
    pub fn clamp(&self, pos: Vec2<F>) -> Vec2<F> {
        pos.clamp(self.min, self.max)
    }

    /// True when `pos` lies within the range on both axes.
    pub fn contains(&self, pos: Vec2<F>) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BubbleConfig<f32> {
        BubbleConfig::new()
    }

    #[test]
    fn normal_viewport() {
        let b = Bounds::from_viewport(800.0, 600.0, &config());
        assert_eq!(b.min, Vec2::new(10.0, 10.0));
        assert_eq!(b.max, Vec2::new(730.0, 530.0));
    }

    #[test]
    fn clamps_out_of_range() {
        let b = Bounds::from_viewport(800.0, 600.0, &config());
        let p = b.clamp(Vec2::new(-50.0, 900.0));
        assert_eq!(p, Vec2::new(10.0, 530.0));
        assert!(b.contains(p));
    }

    #[test]
    fn degenerate_viewport_pins_to_padding() {
        // Viewport smaller than size + padding on both axes.
        let b = Bounds::from_viewport(40.0, 40.0, &config());
        assert_eq!(b.min, b.max);
        assert_eq!(b.clamp(Vec2::new(500.0, 500.0)), Vec2::new(10.0, 10.0));
    }
}
