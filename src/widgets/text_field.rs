//! TextField - Single-line text entry.
//!
//! Editing is grapheme-aware: cursor positions index grapheme clusters,
//! never bytes, so multi-codepoint input can't be split. The cursor
//! blink is an accumulate-and-reset timer advanced by the per-frame
//! `update` pass and reset to visible by any key press.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::state::keyboard::KeyEvent;
use crate::surface::{Surface, TextAlign};
use crate::types::Rect;
use crate::widgets::control::{Control, DrawContext};

/// Seconds between blink phase flips.
const BLINK_INTERVAL_SECS: f32 = 0.5;

/// Single-line text entry field.
pub struct TextField {
    rect: Rect,
    value: String,
    /// Cursor position in grapheme clusters, 0..=len.
    cursor: usize,
    placeholder: Option<String>,
    on_change: Option<Box<dyn FnMut(&str)>>,
    font_px: f32,
    blink_timer: f32,
    blink_visible: bool,
}

impl TextField {
    /// Create an empty text field.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            value: String::new(),
            cursor: 0,
            placeholder: None,
            on_change: None,
            font_px: 14.0,
            blink_timer: 0.0,
            blink_visible: true,
        }
    }

    /// Set the initial value. Cursor moves to the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.grapheme_len();
        self
    }

    /// Set the placeholder shown while empty.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Set the change callback. Receives the value after each edit.
    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in grapheme clusters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the cursor is in the visible blink phase.
    pub fn cursor_visible(&self) -> bool {
        self.blink_visible
    }

    fn grapheme_len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme boundary at `index`.
    fn byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map(|(o, _)| o)
            .unwrap_or(self.value.len())
    }

    fn notify(&mut self) {
        if let Some(cb) = self.on_change.take() {
            let mut cb = cb;
            cb(&self.value);
            self.on_change = Some(cb);
        }
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        self.notify();
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        self.notify();
    }

    fn delete_forward(&mut self) {
        if self.cursor >= self.grapheme_len() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
        self.notify();
    }

    /// Approximate advance width of one grapheme, in pixels.
    fn advance_px(&self, grapheme: &str) -> f32 {
        grapheme.width() as f32 * self.font_px * 0.6
    }

    /// Map a surface x coordinate to the nearest cursor position.
    ///
    /// Uses the monospace advance estimate; exact glyph metrics belong
    /// to the drawing backend and are not available here.
    fn cursor_index_for_x(&self, x: f32) -> usize {
        let mut local = x - self.rect.x - self.pad();
        if local <= 0.0 {
            return 0;
        }
        for (i, g) in self.value.graphemes(true).enumerate() {
            let w = self.advance_px(g);
            if local < w / 2.0 {
                return i;
            }
            local -= w;
        }
        self.grapheme_len()
    }

    fn pad(&self) -> f32 {
        6.0
    }

    fn reset_blink(&mut self) {
        self.blink_timer = 0.0;
        self.blink_visible = true;
    }
}

impl Control for TextField {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn handle_click(&mut self, x: f32, _y: f32) {
        self.cursor = self.cursor_index_for_x(x);
        self.reset_blink();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        // Any key press makes the cursor visible again
        self.reset_blink();

        match event.key.as_str() {
            "ArrowLeft" => self.cursor = self.cursor.saturating_sub(1),
            "ArrowRight" => self.cursor = (self.cursor + 1).min(self.grapheme_len()),
            "Home" => self.cursor = 0,
            "End" => self.cursor = self.grapheme_len(),
            "Backspace" => self.backspace(),
            "Delete" => self.delete_forward(),
            _ => {
                if let Some(c) = event.printable_char() {
                    self.insert_char(c);
                }
            }
        }
    }

    fn update(&mut self, dt: f32) {
        self.blink_timer += dt;
        while self.blink_timer >= BLINK_INTERVAL_SECS {
            self.blink_timer -= BLINK_INTERVAL_SECS;
            self.blink_visible = !self.blink_visible;
        }
    }

    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext) {
        let theme = cx.theme;

        surface.fill_rounded_rect(self.rect, theme.radius, theme.widget_bg);
        let border = if cx.focused { theme.focus_ring } else { theme.border };
        surface.stroke_rounded_rect(self.rect, theme.radius, border, 1.0);

        let text_x = self.rect.x + self.pad();
        let text_y = self.rect.center_y() - theme.font_px / 2.0;

        if self.value.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                surface.fill_text(placeholder, text_x, text_y, theme.font_px, theme.text_muted, TextAlign::Left);
            }
        } else {
            surface.fill_text(&self.value, text_x, text_y, theme.font_px, theme.text, TextAlign::Left);
        }

        if cx.focused && self.blink_visible {
            let before: f32 = self
                .value
                .graphemes(true)
                .take(self.cursor)
                .map(|g| self.advance_px(g))
                .sum();
            let caret = Rect::new(text_x + before, self.rect.y + 4.0, 1.5, self.rect.h - 8.0);
            surface.fill_rect(caret, theme.text);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> TextField {
        TextField::new(Rect::new(0.0, 0.0, 200.0, 28.0))
    }

    fn type_str(f: &mut TextField, s: &str) {
        for c in s.chars() {
            f.handle_key(&KeyEvent::new(c.to_string()));
        }
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut f = field();
        type_str(&mut f, "abc");
        assert_eq!(f.value(), "abc");
        assert_eq!(f.cursor(), 3);

        f.handle_key(&KeyEvent::new("ArrowLeft"));
        type_str(&mut f, "X");
        assert_eq!(f.value(), "abXc");
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn test_home_end_jump() {
        let mut f = field().with_value("hello");
        f.handle_key(&KeyEvent::new("Home"));
        assert_eq!(f.cursor(), 0);
        f.handle_key(&KeyEvent::new("End"));
        assert_eq!(f.cursor(), 5);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut f = field().with_value("abc");
        f.handle_key(&KeyEvent::new("Backspace"));
        assert_eq!(f.value(), "ab");

        f.handle_key(&KeyEvent::new("Home"));
        f.handle_key(&KeyEvent::new("Delete"));
        assert_eq!(f.value(), "b");

        // At the boundaries both are no-ops
        f.handle_key(&KeyEvent::new("Delete"));
        f.handle_key(&KeyEvent::new("Delete"));
        assert_eq!(f.value(), "");
        f.handle_key(&KeyEvent::new("Backspace"));
        assert_eq!(f.value(), "");
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut f = field().with_value("ab");
        f.handle_key(&KeyEvent::new("ArrowRight"));
        assert_eq!(f.cursor(), 2);
        f.handle_key(&KeyEvent::new("Home"));
        f.handle_key(&KeyEvent::new("ArrowLeft"));
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn test_grapheme_aware_editing() {
        // Family emoji is one grapheme of many codepoints
        let mut f = field().with_value("a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}b");
        assert_eq!(f.cursor(), 3);

        f.handle_key(&KeyEvent::new("ArrowLeft"));
        f.handle_key(&KeyEvent::new("Backspace"));
        assert_eq!(f.value(), "ab");
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn test_blink_toggles_and_resets() {
        let mut f = field();
        assert!(f.cursor_visible());

        f.update(BLINK_INTERVAL_SECS + 0.01);
        assert!(!f.cursor_visible());

        f.update(BLINK_INTERVAL_SECS);
        assert!(f.cursor_visible());

        // Key press while hidden snaps back to visible
        f.update(BLINK_INTERVAL_SECS);
        assert!(!f.cursor_visible());
        f.handle_key(&KeyEvent::new("a"));
        assert!(f.cursor_visible());
    }

    #[test]
    fn test_click_positions_cursor() {
        let mut f = field().with_value("hello");
        // Advance is 14 * 0.6 = 8.4px per char, pad 6. Click near the
        // third boundary.
        f.handle_click(6.0 + 8.4 * 2.0 + 1.0, 10.0);
        assert_eq!(f.cursor(), 2);

        // Far left clamps to 0, far right to len
        f.handle_click(0.0, 10.0);
        assert_eq!(f.cursor(), 0);
        f.handle_click(190.0, 10.0);
        assert_eq!(f.cursor(), 5);
    }

    #[test]
    fn test_on_change_fires_per_edit() {
        use std::cell::Cell;
        use std::rc::Rc;

        let edits = Rc::new(Cell::new(0));
        let edits_clone = edits.clone();
        let mut f = field().on_change(move |_| edits_clone.set(edits_clone.get() + 1));

        type_str(&mut f, "hi");
        f.handle_key(&KeyEvent::new("Backspace"));
        assert_eq!(edits.get(), 3);

        // Pure cursor moves do not fire
        f.handle_key(&KeyEvent::new("Home"));
        assert_eq!(edits.get(), 3);
    }
}
