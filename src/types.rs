//! Core types for ember-ui.
//!
//! These types define the foundation that everything builds on: the
//! geometry controls hit-test against and the color values that flow
//! down to the drawing surface.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Transparent color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Return the same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Lighten toward white by `amount` (0.0 = unchanged, 1.0 = white).
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 { (c as f32 + (255.0 - c as f32) * amount).round() as u8 };
        Self::new(mix(self.r), mix(self.g), mix(self.b), self.a)
    }

    /// Darken toward black by `amount` (0.0 = unchanged, 1.0 = black).
    pub fn darken(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 { (c as f32 * (1.0 - amount)).round() as u8 };
        Self::new(mix(self.r), mix(self.g), mix(self.b), self.a)
    }
}

// =============================================================================
// Rect - Axis-aligned rectangle
// =============================================================================

/// An axis-aligned rectangle in surface coordinates.
///
/// Every interactive element hit-tests against one of these. Coordinates
/// are f32 surface pixels (already display-scale corrected).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rect.
    ///
    /// The left/top edges are inclusive, right/bottom exclusive, so two
    /// rects sharing an edge never both claim the same point.
    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Vertical center.
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Shrink the rect by `amount` on every side.
    ///
    /// Width and height are floored at zero so an over-inset rect stays
    /// degenerate rather than inverting.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            w: (self.w - 2.0 * amount).max(0.0),
            h: (self.h - 2.0 * amount).max(0.0),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);

        // Left/top inclusive
        assert!(r.contains(10.0, 10.0));
        // Right/bottom exclusive
        assert!(!r.contains(30.0, 15.0));
        assert!(!r.contains(20.0, 20.0));

        assert!(r.contains(29.9, 19.9));
        assert!(!r.contains(9.9, 15.0));
    }

    #[test]
    fn test_contains_degenerate() {
        let r = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert!(!r.contains(0.0, 0.0));
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = r.inset(2.0);
        assert_eq!(inner, Rect::new(2.0, 2.0, 6.0, 6.0));

        // Over-inset stays degenerate
        let tiny = r.inset(8.0);
        assert_eq!(tiny.w, 0.0);
        assert_eq!(tiny.h, 0.0);
    }

    #[test]
    fn test_lighten_darken() {
        let c = Rgba::rgb(100, 100, 100);
        assert_eq!(c.lighten(1.0), Rgba::rgb(255, 255, 255));
        assert_eq!(c.darken(1.0), Rgba::rgb(0, 0, 0));
        assert_eq!(c.lighten(0.0), c);
    }
}
