//! Control Trait - The capability-optional element contract.
//!
//! Controls implement only the handlers relevant to their behavior;
//! every input method defaults to a no-op. The coordinator calls
//! without checking presence - dispatching a capability an element does
//! not support simply does nothing.
//!
//! A control is created standalone and becomes live only once
//! registered with a [`Ui`](crate::ui::Ui); it is destroyed by explicit
//! removal. Controls never hold a reference back to their coordinator -
//! ambient state they need for drawing (focus, pointer, theme) arrives
//! through [`DrawContext`].

use crate::state::keyboard::KeyEvent;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::Rect;

// =============================================================================
// TYPES
// =============================================================================

/// Direction of a generic directional-adjust input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Per-element ambient state threaded into `draw`.
pub struct DrawContext<'a> {
    /// Whether this element currently holds focus.
    pub focused: bool,
    /// Ambient pointer position in surface coordinates, for hover
    /// rendering. Elements may ignore it.
    pub pointer: (f32, f32),
    /// The coordinator's theme.
    pub theme: &'a Theme,
}

impl DrawContext<'_> {
    /// Whether the ambient pointer is over `rect`.
    pub fn hovered(&self, rect: Rect) -> bool {
        rect.contains(self.pointer.0, self.pointer.1)
    }
}

// =============================================================================
// CONTROL TRAIT
// =============================================================================

/// An interactive, focusable, drawable UI element.
///
/// Only `bounds` and `draw` are mandatory. Input handlers default to
/// no-ops; `contains_point` defaults to rect containment.
///
/// User callbacks stored inside a control must not panic across the
/// dispatch boundary: the coordinator never catches, so a panicking
/// callback unwinds out of the dispatch call.
pub trait Control {
    /// The element's bounding rectangle in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Hit test. Elements that should never receive clicks (panels)
    /// override this to return false.
    fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(x, y)
    }

    /// Whether focus navigation should consider this element.
    fn focusable(&self) -> bool {
        true
    }

    /// A pointer click landed at (x, y), already surface-local.
    /// The coordinator focuses the element before calling this.
    fn handle_click(&mut self, _x: f32, _y: f32) {}

    /// A key event routed to this element while focused.
    fn handle_key(&mut self, _event: &KeyEvent) {}

    /// Activation entry point: Enter/Space equivalent, controller
    /// confirm.
    fn activate(&mut self) {}

    /// Generic directional adjust. Return true when handled; the
    /// coordinator falls back to [`handle_left`](Control::handle_left)/
    /// [`handle_right`](Control::handle_right) on false.
    fn handle_axis(&mut self, _direction: AxisDirection) -> bool {
        false
    }

    /// Discrete directional fallback, left.
    fn handle_left(&mut self) {}

    /// Discrete directional fallback, right.
    fn handle_right(&mut self) {}

    /// Advance timer-driven visual state by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    /// Draw the element.
    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert {
        rect: Rect,
    }

    impl Control for Inert {
        fn bounds(&self) -> Rect {
            self.rect
        }
        fn draw(&self, _surface: &mut dyn Surface, _cx: &DrawContext) {}
    }

    #[test]
    fn test_defaults_are_silent_noops() {
        let mut c = Inert {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        };

        // None of these should do anything, and none should panic
        c.handle_click(5.0, 5.0);
        c.handle_key(&KeyEvent::new("Enter"));
        c.activate();
        assert!(!c.handle_axis(AxisDirection::Left));
        c.handle_left();
        c.handle_right();
        c.update(0.016);

        assert!(c.focusable());
        assert!(c.contains_point(5.0, 5.0));
        assert!(!c.contains_point(15.0, 5.0));
    }

    #[test]
    fn test_draw_context_hover() {
        let theme = Theme::default();
        let cx = DrawContext {
            focused: false,
            pointer: (12.0, 12.0),
            theme: &theme,
        };
        assert!(cx.hovered(Rect::new(10.0, 10.0, 10.0, 10.0)));
        assert!(!cx.hovered(Rect::new(20.0, 20.0, 10.0, 10.0)));
    }
}
