//! Panel - A non-interactive background layer.
//!
//! Panels draw but never participate in input: they refuse hit tests,
//! are not focusable, and implement no handlers. Register them before
//! interactive elements so they sit underneath in the z-order.

use crate::surface::Surface;
use crate::types::{Rect, Rgba};
use crate::widgets::control::{Control, DrawContext};

/// A purely decorative background rectangle.
pub struct Panel {
    rect: Rect,
    background: Option<Rgba>,
    bordered: bool,
}

impl Panel {
    /// Create a panel using the theme's surface background.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            background: None,
            bordered: false,
        }
    }

    /// Override the background color.
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Draw a border around the panel.
    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }
}

impl Control for Panel {
    fn bounds(&self) -> Rect {
        self.rect
    }

    // Never claims a click, so elements drawn above always win
    fn contains_point(&self, _x: f32, _y: f32) -> bool {
        false
    }

    fn focusable(&self) -> bool {
        false
    }

    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext) {
        let theme = cx.theme;
        let bg = self.background.unwrap_or(theme.surface_bg);
        surface.fill_rounded_rect(self.rect, theme.radius, bg);
        if self.bordered {
            surface.stroke_rounded_rect(self.rect, theme.radius, theme.border, 1.0);
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
    fn test_never_hit_tests_positive() {
        let p = Panel::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!p.contains_point(50.0, 50.0));
        assert!(!p.focusable());
    }
}
