//! RadioGroup - Mutually exclusive option list.
//!
//! Unlike [`Menu`](crate::widgets::Menu), moving the selection *is* the
//! action: the callback fires on every move with both the index and the
//! value, and on click.

use tracing::trace;

use crate::state::keyboard::KeyEvent;
use crate::surface::{Surface, TextAlign};
use crate::types::Rect;
use crate::widgets::control::{AxisDirection, Control, DrawContext};

/// A vertical list of mutually exclusive options.
pub struct RadioGroup {
    rect: Rect,
    items: Vec<String>,
    selected: usize,
    on_change: Option<Box<dyn FnMut(usize, &str)>>,
}

impl RadioGroup {
    /// Create a radio group with the given options. The first option
    /// starts selected.
    pub fn new(rect: Rect, items: Vec<String>) -> Self {
        Self {
            rect,
            items,
            selected: 0,
            on_change: None,
        }
    }

    /// Set the change callback. Receives `(index, value)` on every
    /// selection change.
    pub fn on_change(mut self, f: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Currently selected index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no options.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index;
        trace!(index, value = %self.items[index], "radio selection changed");
        if let Some(cb) = self.on_change.take() {
            let mut cb = cb;
            cb(index, &self.items[index]);
            self.on_change = Some(cb);
        }
    }

    fn step(&mut self, forward: bool) {
        if self.items.is_empty() {
            return;
        }
        let n = self.items.len();
        let next = if forward {
            (self.selected + 1) % n
        } else {
            (self.selected + n - 1) % n
        };
        self.set_selected(next);
    }

    fn item_rect(&self, index: usize) -> Rect {
        let h = self.rect.h / self.items.len().max(1) as f32;
        Rect::new(self.rect.x, self.rect.y + index as f32 * h, self.rect.w, h)
    }
}

impl Control for RadioGroup {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn handle_click(&mut self, x: f32, y: f32) {
        if let Some(index) = (0..self.items.len()).find(|&i| self.item_rect(i).contains(x, y)) {
            self.set_selected(index);
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        match event.key.as_str() {
            "ArrowUp" | "ArrowLeft" => self.step(false),
            "ArrowDown" | "ArrowRight" => self.step(true),
            _ => {}
        }
    }

    fn handle_axis(&mut self, direction: AxisDirection) -> bool {
        match direction {
            AxisDirection::Up | AxisDirection::Left => self.step(false),
            AxisDirection::Down | AxisDirection::Right => self.step(true),
        }
        true
    }

    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext) {
        let theme = cx.theme;

        for (i, item) in self.items.iter().enumerate() {
            let r = self.item_rect(i);
            let dot_d = (r.h * 0.5).min(14.0);
            let dot = Rect::new(r.x + 4.0, r.center_y() - dot_d / 2.0, dot_d, dot_d);

            surface.stroke_rounded_rect(dot, dot_d / 2.0, theme.border, 1.5);
            if i == self.selected {
                surface.fill_rounded_rect(dot.inset(3.0), (dot_d - 6.0).max(0.0) / 2.0, theme.accent);
            }

            surface.fill_text(
                item,
                dot.x + dot_d + 8.0,
                r.center_y() - theme.font_px / 2.0,
                theme.font_px,
                theme.text,
                TextAlign::Left,
            );
        }

        if cx.focused {
            surface.stroke_rounded_rect(self.rect.inset(-2.0), theme.radius, theme.focus_ring, 2.0);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
