//! Button - A labeled push button.
//!
//! Activates on click, Enter/Space while focused, or controller
//! confirm. Activation arms a transient "pressed" visual state that
//! auto-clears after a fixed duration, advanced by the per-frame
//! `update` pass.

use tracing::trace;

use crate::state::keyboard::KeyEvent;
use crate::surface::{Surface, TextAlign};
use crate::types::Rect;
use crate::widgets::control::{Control, DrawContext};

/// Seconds the pressed flash stays visible after activation.
const PRESS_FLASH_SECS: f32 = 0.15;

/// A labeled push button.
pub struct Button {
    rect: Rect,
    label: String,
    on_press: Option<Box<dyn FnMut()>>,
    /// Accumulate-and-reset press timer: set on activation, counted
    /// down by `update`, pressed visual while positive.
    press_remaining: f32,
}

impl Button {
    /// Create a button with the given bounds and label.
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            on_press: None,
            press_remaining: 0.0,
        }
    }

    /// Set the activation callback.
    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    /// The button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the pressed flash is currently showing.
    pub fn is_pressed(&self) -> bool {
        self.press_remaining > 0.0
    }
}

impl Control for Button {
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
        trace!(label = %self.label, "button activated");
        self.press_remaining = PRESS_FLASH_SECS;
        if let Some(cb) = self.on_press.as_mut() {
            cb();
        }
    }

    fn update(&mut self, dt: f32) {
        if self.press_remaining > 0.0 {
            self.press_remaining = (self.press_remaining - dt).max(0.0);
        }
    }

    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext) {
        let theme = cx.theme;

        let (top, bottom) = if self.is_pressed() {
            (theme.accent.darken(0.1), theme.accent)
        } else if cx.hovered(self.rect) {
            (theme.widget_bg_hot.lighten(0.08), theme.widget_bg_hot)
        } else {
            (theme.widget_bg.lighten(0.08), theme.widget_bg)
        };

        surface.fill_gradient(self.rect, top, bottom, true);
        surface.stroke_rounded_rect(self.rect, theme.radius, theme.border, 1.0);
        if cx.focused {
            surface.stroke_rounded_rect(self.rect.inset(-2.0), theme.radius, theme.focus_ring, 2.0);
        }

        let fg = if self.is_pressed() { theme.accent_text } else { theme.text };
        surface.fill_text(
            &self.label,
            self.rect.center_x(),
            self.rect.center_y() - theme.font_px / 2.0,
            theme.font_px,
            fg,
            TextAlign::Center,
        );
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

    fn button() -> (Button, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let b = Button::new(Rect::new(0.0, 0.0, 100.0, 30.0), "OK")
            .on_press(move || count_clone.set(count_clone.get() + 1));
        (b, count)
    }

    #[test]
    fn test_click_activates() {
        let (mut b, count) = button();
        b.handle_click(10.0, 10.0);
        assert_eq!(count.get(), 1);
        assert!(b.is_pressed());
    }

    #[test]
    fn test_enter_and_space_activate() {
        let (mut b, count) = button();
        b.handle_key(&KeyEvent::new("Enter"));
        b.handle_key(&KeyEvent::new(" "));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_other_keys_ignored() {
        let (mut b, count) = button();
        b.handle_key(&KeyEvent::new("a"));
        b.handle_key(&KeyEvent::new("ArrowLeft"));
        assert_eq!(count.get(), 0);
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_press_flash_clears_via_update() {
        let (mut b, _count) = button();
        b.activate();
        assert!(b.is_pressed());

        b.update(PRESS_FLASH_SECS / 2.0);
        assert!(b.is_pressed());

        b.update(PRESS_FLASH_SECS);
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_button_without_callback() {
        let mut b = Button::new(Rect::new(0.0, 0.0, 50.0, 20.0), "quiet");
        // Activation without a callback is a no-op beyond the flash
        b.activate();
        assert!(b.is_pressed());
    }
}
