//! Toggle - A labeled on/off switch.
//!
//! Flips its boolean on click, Enter/Space, or controller confirm, and
//! reports the new value to the callback.

use tracing::trace;

use crate::state::keyboard::KeyEvent;
use crate::surface::{Surface, TextAlign};
use crate::types::Rect;
use crate::widgets::control::{Control, DrawContext};

/// A labeled on/off switch.
pub struct Toggle {
    rect: Rect,
    label: String,
    value: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Toggle {
    /// Create a toggle with the given bounds, label, and initial value.
    pub fn new(rect: Rect, label: impl Into<String>, value: bool) -> Self {
        Self {
            rect,
            label: label.into(),
            value,
            on_change: None,
        }
    }

    /// Set the change callback. Receives the new value after each flip.
    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current value.
    pub fn value(&self) -> bool {
        self.value
    }
}

impl Control for Toggle {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn handle_click(&mut self, _x: f32, _y: f32) {
        self.activate();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if matches!(event.key.as_str(), "Enter" | " ") {
            self.activate();
        }
    }

    fn activate(&mut self) {
        self.value = !self.value;
        trace!(label = %self.label, value = self.value, "toggle flipped");
        if let Some(cb) = self.on_change.as_mut() {
            cb(self.value);
        }
    }

    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext) {
        let theme = cx.theme;

        // Track: a pill on the right edge, knob on the active side
        let track_w = self.rect.h * 1.8;
        let track = Rect::new(
            self.rect.x + self.rect.w - track_w,
            self.rect.y + self.rect.h * 0.15,
            track_w,
            self.rect.h * 0.7,
        );
        let track_color = if self.value { theme.accent } else { theme.widget_bg };
        surface.fill_rounded_rect(track, track.h / 2.0, track_color);
        surface.stroke_rounded_rect(track, track.h / 2.0, theme.border, 1.0);

        let knob_d = track.h - 4.0;
        let knob_x = if self.value {
            track.x + track.w - knob_d - 2.0
        } else {
            track.x + 2.0
        };
        let knob = Rect::new(knob_x, track.y + 2.0, knob_d, knob_d);
        surface.fill_rounded_rect(knob, knob_d / 2.0, theme.accent_text);

        surface.fill_text(
            &self.label,
            self.rect.x,
            self.rect.center_y() - theme.font_px / 2.0,
            theme.font_px,
            theme.text,
            TextAlign::Left,
        );

        if cx.focused {
            surface.stroke_rounded_rect(self.rect.inset(-2.0), theme.radius, theme.focus_ring, 2.0);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_flip_reports_new_value() {
        let seen = Rc::new(Cell::new(None));
        let seen_clone = seen.clone();
        let mut t = Toggle::new(Rect::new(0.0, 0.0, 120.0, 24.0), "Sound", false)
            .on_change(move |v| seen_clone.set(Some(v)));

        t.activate();
        assert!(t.value());
        assert_eq!(seen.get(), Some(true));

        t.activate();
        assert!(!t.value());
        assert_eq!(seen.get(), Some(false));
    }

    #[test]
    fn test_click_and_keys_flip() {
        let mut t = Toggle::new(Rect::new(0.0, 0.0, 120.0, 24.0), "Sound", false);
        t.handle_click(5.0, 5.0);
        assert!(t.value());
        t.handle_key(&KeyEvent::new("Enter"));
        assert!(!t.value());
        t.handle_key(&KeyEvent::new(" "));
        assert!(t.value());
        // Unrelated key leaves it alone
        t.handle_key(&KeyEvent::new("x"));
        assert!(t.value());
    }
}
