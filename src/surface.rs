//! Surface Module - The drawing collaborator boundary.
//!
//! ember-ui never draws pixels itself. Everything renders through the
//! [`Surface`] trait, which a host backend (GPU canvas, software
//! rasterizer, SVG recorder) implements. The toolkit consumes a small
//! set of 2D primitives plus text metrics for word wrapping.
//!
//! [`HeadlessSurface`] is the built-in backend for tests and CI: it
//! records every draw call and measures text from Unicode cell widths
//! without a font rasterizer.

use unicode_width::UnicodeWidthStr;

use crate::types::{Rect, Rgba};

// =============================================================================
// TYPES
// =============================================================================

/// Horizontal text alignment relative to the given x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// =============================================================================
// SURFACE TRAIT
// =============================================================================

/// An immediate-mode 2D drawing target.
///
/// Coordinates are surface-native pixels. Text baselines: `fill_text`
/// receives the **top** edge of the line box, not the baseline, so
/// callers never need font ascent metrics.
///
/// `radius == 0.0` on the rounded variants must degenerate to the plain
/// rectangle primitives.
pub trait Surface {
    /// Surface size in native pixels (width, height).
    fn size(&self) -> (f32, f32);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Rgba, line_width: f32);

    /// Fill a rounded rectangle. Radius 0 is a plain rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba);

    /// Stroke a rounded rectangle outline. Radius 0 is a plain rectangle.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba, line_width: f32);

    /// Fill a rectangle with a two-stop linear gradient.
    /// `vertical` runs top-to-bottom, otherwise left-to-right.
    fn fill_gradient(&mut self, rect: Rect, from: Rgba, to: Rgba, vertical: bool);

    /// Draw a single line of text with its line box top at `y`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, color: Rgba, align: TextAlign);

    /// Measure the advance width of a single line of text, in pixels.
    fn measure_text(&self, text: &str, font_px: f32) -> f32;
}

// =============================================================================
// HEADLESS SURFACE - Recording backend for tests
// =============================================================================

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect { rect: Rect, color: Rgba },
    StrokeRect { rect: Rect, color: Rgba, line_width: f32 },
    FillRoundedRect { rect: Rect, radius: f32, color: Rgba },
    StrokeRoundedRect { rect: Rect, radius: f32, color: Rgba, line_width: f32 },
    FillGradient { rect: Rect, from: Rgba, to: Rgba, vertical: bool },
    FillText { text: String, x: f32, y: f32, font_px: f32, color: Rgba, align: TextAlign },
}

/// A surface that records draw calls instead of rasterizing.
///
/// Text measurement assumes a monospace-like advance of `0.6 * font_px`
/// per terminal cell (wide CJK glyphs count as two cells). Good enough
/// for layout decisions; exact metrics belong to real backends.
pub struct HeadlessSurface {
    width: f32,
    height: f32,
    calls: Vec<DrawCall>,
}

/// Advance width per text cell, as a fraction of the font size.
const HEADLESS_ADVANCE: f32 = 0.6;

impl HeadlessSurface {
    /// Create a headless surface with the given native size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// All draw calls recorded since the last clear, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drop all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Count text draws containing `needle` (test convenience).
    pub fn text_draws_containing(&self, needle: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillText { text, .. } if text.contains(needle)))
            .count()
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(DrawCall::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba, line_width: f32) {
        self.calls.push(DrawCall::StrokeRect { rect, color, line_width });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::FillRoundedRect { rect, radius, color });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba, line_width: f32) {
        self.calls.push(DrawCall::StrokeRoundedRect { rect, radius, color, line_width });
    }

    fn fill_gradient(&mut self, rect: Rect, from: Rgba, to: Rgba, vertical: bool) {
        self.calls.push(DrawCall::FillGradient { rect, from, to, vertical });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, color: Rgba, align: TextAlign) {
        self.calls.push(DrawCall::FillText {
            text: text.to_string(),
            x,
            y,
            font_px,
            color,
            align,
        });
    }

    fn measure_text(&self, text: &str, font_px: f32) -> f32 {
        text.width() as f32 * font_px * HEADLESS_ADVANCE
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut s = HeadlessSurface::new(800.0, 600.0);
        s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba::BLACK);
        s.fill_text("hi", 5.0, 5.0, 14.0, Rgba::WHITE, TextAlign::Left);

        assert_eq!(s.calls().len(), 2);
        assert!(matches!(s.calls()[0], DrawCall::FillRect { .. }));
        assert!(matches!(s.calls()[1], DrawCall::FillText { .. }));

        s.clear();
        assert!(s.calls().is_empty());
    }

    #[test]
    fn test_measure_scales_with_font() {
        let s = HeadlessSurface::new(100.0, 100.0);
        let small = s.measure_text("hello", 10.0);
        let large = s.measure_text("hello", 20.0);
        assert!(large > small);
        assert_eq!(s.measure_text("", 16.0), 0.0);
    }

    #[test]
    fn test_measure_wide_glyphs() {
        let s = HeadlessSurface::new(100.0, 100.0);
        // CJK glyphs occupy two cells
        assert_eq!(s.measure_text("日本", 10.0), s.measure_text("abcd", 10.0));
    }
}
