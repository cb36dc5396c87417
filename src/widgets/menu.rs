//! Menu - A list of selectable items, vertical or horizontal.
//!
//! Each item carries its own callback, invoked when that item is
//! activated (click, Enter/Space, controller confirm) - never when the
//! selection merely moves. Selection wraps at both ends.

use tracing::trace;

use crate::state::keyboard::KeyEvent;
use crate::surface::{Surface, TextAlign};
use crate::types::Rect;
use crate::widgets::control::{AxisDirection, Control, DrawContext};

/// Menu layout orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// One menu entry: a label plus its activation callback.
pub struct MenuItem {
    label: String,
    on_select: Option<Box<dyn FnMut()>>,
}

impl MenuItem {
    /// Create an item with no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_select: None,
        }
    }

    /// Set the activation callback for this item.
    pub fn on_select(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// The item label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A list of selectable items.
pub struct Menu {
    rect: Rect,
    items: Vec<MenuItem>,
    selected: usize,
    orientation: Orientation,
}

impl Menu {
    /// Create a menu. Items evenly divide the bounds along the main
    /// axis. An empty item list is legal and inert.
    pub fn new(rect: Rect, items: Vec<MenuItem>) -> Self {
        Self {
            rect,
            items,
            selected: 0,
            orientation: Orientation::Vertical,
        }
    }

    /// Switch to a horizontal layout.
    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    /// Currently selected item index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    fn select_previous(&mut self) {
        if !self.items.is_empty() {
            let n = self.items.len();
            self.selected = (self.selected + n - 1) % n;
        }
    }

    /// Item bounds along the main axis.
    fn item_rect(&self, index: usize) -> Rect {
        let n = self.items.len().max(1) as f32;
        match self.orientation {
            Orientation::Vertical => {
                let h = self.rect.h / n;
                Rect::new(self.rect.x, self.rect.y + index as f32 * h, self.rect.w, h)
            }
            Orientation::Horizontal => {
                let w = self.rect.w / n;
                Rect::new(self.rect.x + index as f32 * w, self.rect.y, w, self.rect.h)
            }
        }
    }

    /// Item index at a surface point, if any.
    fn item_at(&self, x: f32, y: f32) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.item_rect(i).contains(x, y))
    }

    fn invoke(&mut self, index: usize) {
        trace!(index, label = %self.items[index].label, "menu item activated");
        if let Some(cb) = self.items[index].on_select.as_mut() {
            cb();
        }
    }
}

impl Control for Menu {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn handle_click(&mut self, x: f32, y: f32) {
        if let Some(index) = self.item_at(x, y) {
            self.selected = index;
            self.invoke(index);
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let (prev_key, next_key) = match self.orientation {
            Orientation::Vertical => ("ArrowUp", "ArrowDown"),
            Orientation::Horizontal => ("ArrowLeft", "ArrowRight"),
        };

        match event.key.as_str() {
            k if k == prev_key => self.select_previous(),
            k if k == next_key => self.select_next(),
            "Enter" | " " => self.activate(),
            _ => {}
        }
    }

    fn activate(&mut self) {
        if !self.items.is_empty() {
            self.invoke(self.selected);
        }
    }

    fn handle_axis(&mut self, direction: AxisDirection) -> bool {
        // Controller left/right step any menu, regardless of layout,
        // so d-pad up/down stays free for focus navigation.
        match direction {
            AxisDirection::Left | AxisDirection::Up => self.select_previous(),
            AxisDirection::Right | AxisDirection::Down => self.select_next(),
        }
        true
    }

    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext) {
        let theme = cx.theme;

        surface.fill_rounded_rect(self.rect, theme.radius, theme.widget_bg);
        surface.stroke_rounded_rect(self.rect, theme.radius, theme.border, 1.0);

        for (i, item) in self.items.iter().enumerate() {
            let r = self.item_rect(i);
            if i == self.selected {
                surface.fill_rect(r.inset(2.0), theme.accent);
            } else if cx.hovered(r) {
                surface.fill_rect(r.inset(2.0), theme.widget_bg_hot);
            }
            let fg = if i == self.selected { theme.accent_text } else { theme.text };
            surface.fill_text(
                &item.label,
                r.center_x(),
                r.center_y() - theme.font_px / 2.0,
                theme.font_px,
                fg,
                TextAlign::Center,
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn menu_with_counters(n: usize) -> (Menu, Vec<Rc<Cell<u32>>>) {
        let mut counters = Vec::new();
        let mut items = Vec::new();
        for i in 0..n {
            let count = Rc::new(Cell::new(0));
            counters.push(count.clone());
            items.push(
                MenuItem::new(format!("item {i}")).on_select(move || count.set(count.get() + 1)),
            );
        }
        (Menu::new(Rect::new(0.0, 0.0, 100.0, 90.0), items), counters)
    }

    #[test]
    fn test_selection_wraps_both_ends() {
        let (mut m, _) = menu_with_counters(3);
        assert_eq!(m.selected(), 0);

        m.handle_key(&KeyEvent::new("ArrowUp"));
        assert_eq!(m.selected(), 2);

        m.handle_key(&KeyEvent::new("ArrowDown"));
        assert_eq!(m.selected(), 0);

        // Any sequence of moves stays in bounds
        for _ in 0..10 {
            m.handle_key(&KeyEvent::new("ArrowDown"));
            assert!(m.selected() < m.len());
        }
    }

    #[test]
    fn test_moves_do_not_invoke_callbacks() {
        let (mut m, counters) = menu_with_counters(3);
        m.handle_key(&KeyEvent::new("ArrowDown"));
        m.handle_key(&KeyEvent::new("ArrowUp"));
        assert!(counters.iter().all(|c| c.get() == 0));
    }

    #[test]
    fn test_activation_invokes_selected_item_only() {
        let (mut m, counters) = menu_with_counters(3);
        m.handle_key(&KeyEvent::new("ArrowDown"));
        m.handle_key(&KeyEvent::new("Enter"));
        assert_eq!(counters[0].get(), 0);
        assert_eq!(counters[1].get(), 1);
        assert_eq!(counters[2].get(), 0);
    }

    #[test]
    fn test_click_selects_and_invokes() {
        // 3 items over 90px: item 2 spans y 60..90
        let (mut m, counters) = menu_with_counters(3);
        m.handle_click(50.0, 75.0);
        assert_eq!(m.selected(), 2);
        assert_eq!(counters[2].get(), 1);
    }

    #[test]
    fn test_horizontal_uses_left_right_arrows() {
        let (m, _) = menu_with_counters(3);
        let mut m = m.horizontal();

        m.handle_key(&KeyEvent::new("ArrowDown"));
        assert_eq!(m.selected(), 0); // Cross-axis arrow ignored

        m.handle_key(&KeyEvent::new("ArrowRight"));
        assert_eq!(m.selected(), 1);
        m.handle_key(&KeyEvent::new("ArrowLeft"));
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_axis_adjust_steps_vertical_menu() {
        let (mut m, _) = menu_with_counters(3);
        assert!(m.handle_axis(AxisDirection::Right));
        assert_eq!(m.selected(), 1);
        assert!(m.handle_axis(AxisDirection::Left));
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_empty_menu_is_inert() {
        let mut m = Menu::new(Rect::new(0.0, 0.0, 100.0, 30.0), vec![]);
        m.handle_key(&KeyEvent::new("ArrowDown"));
        m.activate();
        m.handle_click(10.0, 10.0);
        assert_eq!(m.selected(), 0);
    }
}
