//! Modal - Stack-scoped exclusive-input dialog.
//!
//! While a modal sits on the coordinator's stack it is the only input
//! target; controls and the global Escape hook are unreachable. The
//! modal keeps its own `selected` action index, independent of the
//! coordinator's focus index, and computes its geometry exactly once at
//! construction.
//!
//! Input handlers return a [`ModalOutcome`] instead of mutating the
//! stack: the coordinator owns the stack and applies the outcome (pop,
//! then run the action's callback) after the borrow ends.

use tracing::trace;

use crate::state::gamepad;
use crate::state::keyboard::KeyEvent;
use crate::surface::{Surface, TextAlign};
use crate::text::wrap_text;
use crate::theme::Theme;
use crate::types::Rect;

// Sizing bounds. Width is additionally capped by a fraction of the
// surface so small surfaces never get an oversized dialog.
const MAX_WIDTH: f32 = 420.0;
const MIN_WIDTH: f32 = 240.0;
const MIN_HEIGHT: f32 = 130.0;
const MAX_WIDTH_FRAC: f32 = 0.8;
const MAX_HEIGHT_FRAC: f32 = 0.8;

const PAD: f32 = 16.0;
const BUTTON_H: f32 = 32.0;
const BUTTON_MIN_W: f32 = 80.0;
const BUTTON_GAP: f32 = 12.0;

/// Labels Escape treats as the cancel-equivalent action.
const CANCEL_LABELS: [&str; 3] = ["exit", "close", "cancel"];

// =============================================================================
// TYPES
// =============================================================================

/// Handle to an open modal; pass to
/// [`Ui::close_modal`](crate::ui::Ui::close_modal) to force-close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalHandle(pub(crate) u64);

/// One labeled action in a modal's button row.
pub struct ModalAction {
    label: String,
    on_invoke: Option<Box<dyn FnMut()>>,
}

impl ModalAction {
    /// Create an action that just closes the modal.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_invoke: None,
        }
    }

    /// Set the callback run when this action is invoked.
    pub fn on_invoke(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_invoke = Some(Box::new(f));
        self
    }

    /// The action label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// What the coordinator should do after a modal handled an event.
///
/// Every event reaching a modal is consumed; the variants only differ
/// in the stack mutation that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    /// Event consumed, modal stays open.
    Consumed,
    /// Invoke the action at this index, then close.
    Invoke(usize),
    /// Close without invoking anything.
    Close,
}

// =============================================================================
// MODAL
// =============================================================================

/// An exclusive-input dialog with a title, a wrapped message, and a
/// horizontally centered action row near its bottom edge.
pub struct Modal {
    id: u64,
    title: String,
    lines: Vec<String>,
    actions: Vec<ModalAction>,
    selected: usize,
    bounds: Rect,
    action_rects: Vec<Rect>,
}

impl Modal {
    /// Build a modal, computing geometry once.
    ///
    /// `size` overrides auto-sizing; otherwise the message wraps
    /// against `min(420, 80% of surface width)` and the height derives
    /// from title + wrapped lines + button row, clamped to a minimum
    /// and to 80% of surface height. Empty action lists get a default
    /// "OK" that just closes.
    pub(crate) fn new(
        id: u64,
        title: impl Into<String>,
        message: &str,
        actions: Vec<ModalAction>,
        size: Option<(f32, f32)>,
        surface: &dyn Surface,
        theme: &Theme,
    ) -> Self {
        let title = title.into();
        let actions = if actions.is_empty() {
            vec![ModalAction::new("OK")]
        } else {
            actions
        };

        let (surface_w, surface_h) = surface.size();
        let measure = |s: &str| surface.measure_text(s, theme.font_px);

        let max_w = MAX_WIDTH.min(surface_w * MAX_WIDTH_FRAC);
        let button_widths: Vec<f32> = actions
            .iter()
            .map(|a| (measure(&a.label) + 2.0 * PAD).max(BUTTON_MIN_W))
            .collect();
        let row_w: f32 = button_widths.iter().sum::<f32>()
            + BUTTON_GAP * (actions.len() as f32 - 1.0).max(0.0);

        let (w, h, lines) = match size {
            Some((w, h)) => {
                let lines = wrap_text(message, w - 2.0 * PAD, measure);
                (w, h, lines)
            }
            None => {
                let lines = wrap_text(message, max_w - 2.0 * PAD, measure);
                let content_w = lines
                    .iter()
                    .map(|l| measure(l))
                    .chain([measure(&title), row_w])
                    .fold(0.0f32, f32::max);
                let w = (content_w + 2.0 * PAD).clamp(MIN_WIDTH, max_w);

                let title_h = theme.font_px * 1.6;
                let h = (PAD + title_h + lines.len() as f32 * theme.line_height() + PAD + BUTTON_H + PAD)
                    .clamp(MIN_HEIGHT, surface_h * MAX_HEIGHT_FRAC);
                (w, h, lines)
            }
        };

        let bounds = Rect::new((surface_w - w) / 2.0, (surface_h - h) / 2.0, w, h);

        // Button row: evenly spaced, centered, near the bottom edge
        let row_y = bounds.y + bounds.h - PAD - BUTTON_H;
        let mut x = bounds.center_x() - row_w / 2.0;
        let action_rects = button_widths
            .iter()
            .map(|&bw| {
                let r = Rect::new(x, row_y, bw, BUTTON_H);
                x += bw + BUTTON_GAP;
                r
            })
            .collect();

        Self {
            id,
            title,
            lines,
            actions,
            selected: 0,
            bounds,
            action_rects,
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// The modal's computed body rect.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Currently selected action index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Action labels, in order.
    pub fn action_labels(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.label.as_str()).collect()
    }

    pub(crate) fn take_callback(&mut self, index: usize) -> Option<Box<dyn FnMut()>> {
        self.actions.get_mut(index).and_then(|a| a.on_invoke.take())
    }

    fn select_previous(&mut self) {
        let n = self.actions.len();
        self.selected = (self.selected + n - 1) % n;
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.actions.len();
    }

    /// Escape/cancel path: a cancel-equivalent label gets invoked,
    /// otherwise the modal just closes.
    fn cancel_outcome(&self) -> ModalOutcome {
        self.actions
            .iter()
            .position(|a| CANCEL_LABELS.iter().any(|l| a.label.eq_ignore_ascii_case(l)))
            .map_or(ModalOutcome::Close, ModalOutcome::Invoke)
    }

    /// Handle a key event. The modal consumes every key.
    pub(crate) fn handle_key(&mut self, event: &KeyEvent) -> ModalOutcome {
        match event.key.as_str() {
            "ArrowLeft" => {
                self.select_previous();
                ModalOutcome::Consumed
            }
            "ArrowRight" => {
                self.select_next();
                ModalOutcome::Consumed
            }
            "Enter" | " " => ModalOutcome::Invoke(self.selected),
            "Escape" => self.cancel_outcome(),
            _ => ModalOutcome::Consumed,
        }
    }

    /// Hit-test a click against the action row. Misses are consumed
    /// without closing - the only exits are an action or Escape.
    pub(crate) fn handle_click(&mut self, x: f32, y: f32) -> ModalOutcome {
        match self.action_rects.iter().position(|r| r.contains(x, y)) {
            Some(index) => {
                self.selected = index;
                ModalOutcome::Invoke(index)
            }
            None => ModalOutcome::Consumed,
        }
    }

    /// Handle an edge-triggered controller button by protocol index.
    pub(crate) fn handle_button(&mut self, button: usize) -> ModalOutcome {
        match button {
            gamepad::BUTTON_CONFIRM => ModalOutcome::Invoke(self.selected),
            gamepad::BUTTON_CANCEL => self.cancel_outcome(),
            gamepad::BUTTON_DPAD_LEFT => {
                self.select_previous();
                ModalOutcome::Consumed
            }
            gamepad::BUTTON_DPAD_RIGHT => {
                self.select_next();
                ModalOutcome::Consumed
            }
            _ => ModalOutcome::Consumed,
        }
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        let (sw, sh) = surface.size();

        // Dim everything underneath
        surface.fill_rect(Rect::new(0.0, 0.0, sw, sh), theme.overlay_dim);

        surface.fill_rounded_rect(self.bounds, theme.radius, theme.modal_bg);
        surface.stroke_rounded_rect(self.bounds, theme.radius, theme.modal_border, 1.5);

        surface.fill_text(
            &self.title,
            self.bounds.center_x(),
            self.bounds.y + PAD,
            theme.font_px * 1.15,
            theme.text,
            TextAlign::Center,
        );

        let text_top = self.bounds.y + PAD + theme.font_px * 1.6;
        for (i, line) in self.lines.iter().enumerate() {
            surface.fill_text(
                line,
                self.bounds.center_x(),
                text_top + i as f32 * theme.line_height(),
                theme.font_px,
                theme.text_muted,
                TextAlign::Center,
            );
        }

        for (i, (action, rect)) in self.actions.iter().zip(&self.action_rects).enumerate() {
            let selected = i == self.selected;
            let bg = if selected { theme.accent } else { theme.widget_bg };
            surface.fill_rounded_rect(*rect, theme.radius, bg);
            surface.stroke_rounded_rect(*rect, theme.radius, theme.border, 1.0);
            let fg = if selected { theme.accent_text } else { theme.text };
            surface.fill_text(
                &action.label,
                rect.center_x(),
                rect.center_y() - theme.font_px / 2.0,
                theme.font_px,
                fg,
                TextAlign::Center,
            );
        }

        trace!(id = self.id, "modal drawn");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    fn modal(actions: Vec<ModalAction>) -> Modal {
        let surface = HeadlessSurface::new(800.0, 600.0);
        Modal::new(1, "Title", "A short message.", actions, None, &surface, &Theme::default())
    }

    #[test]
    fn test_selection_wraps() {
        let mut m = modal(vec![
            ModalAction::new("Yes"),
            ModalAction::new("No"),
            ModalAction::new("Maybe"),
        ]);
        assert_eq!(m.selected(), 0);

        assert_eq!(m.handle_key(&KeyEvent::new("ArrowLeft")), ModalOutcome::Consumed);
        assert_eq!(m.selected(), 2);

        m.handle_key(&KeyEvent::new("ArrowRight"));
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn test_enter_invokes_selected() {
        let mut m = modal(vec![ModalAction::new("Yes"), ModalAction::new("No")]);
        m.handle_key(&KeyEvent::new("ArrowRight"));
        assert_eq!(m.handle_key(&KeyEvent::new("Enter")), ModalOutcome::Invoke(1));
        assert_eq!(m.handle_key(&KeyEvent::new(" ")), ModalOutcome::Invoke(1));
    }

    #[test]
    fn test_escape_prefers_cancel_equivalent_label() {
        let mut m = modal(vec![ModalAction::new("Resume"), ModalAction::new("Exit")]);
        assert_eq!(m.handle_key(&KeyEvent::new("Escape")), ModalOutcome::Invoke(1));

        // Case-insensitive
        let mut m = modal(vec![ModalAction::new("CANCEL"), ModalAction::new("Go")]);
        assert_eq!(m.handle_key(&KeyEvent::new("Escape")), ModalOutcome::Invoke(0));

        // No cancel-equivalent: just close
        let mut m = modal(vec![ModalAction::new("Yes"), ModalAction::new("No")]);
        assert_eq!(m.handle_key(&KeyEvent::new("Escape")), ModalOutcome::Close);
    }

    #[test]
    fn test_unhandled_keys_consumed() {
        let mut m = modal(vec![]);
        assert_eq!(m.handle_key(&KeyEvent::new("a")), ModalOutcome::Consumed);
        assert_eq!(m.handle_key(&KeyEvent::new("Tab")), ModalOutcome::Consumed);
    }

    #[test]
    fn test_default_action_is_ok() {
        let m = modal(vec![]);
        assert_eq!(m.action_labels(), vec!["OK"]);
    }

    #[test]
    fn test_click_on_button_invokes() {
        let mut m = modal(vec![ModalAction::new("Yes"), ModalAction::new("No")]);
        let rect = m.action_rects[1];
        let outcome = m.handle_click(rect.center_x(), rect.center_y());
        assert_eq!(outcome, ModalOutcome::Invoke(1));
    }

    #[test]
    fn test_click_miss_never_closes() {
        let mut m = modal(vec![ModalAction::new("Yes")]);
        // Inside the body but off the buttons
        assert_eq!(m.handle_click(m.bounds.x + 4.0, m.bounds.y + 4.0), ModalOutcome::Consumed);
        // Outside the body entirely
        assert_eq!(m.handle_click(1.0, 1.0), ModalOutcome::Consumed);
    }

    #[test]
    fn test_controller_buttons() {
        let mut m = modal(vec![ModalAction::new("Resume"), ModalAction::new("Exit")]);

        assert_eq!(m.handle_button(gamepad::BUTTON_DPAD_RIGHT), ModalOutcome::Consumed);
        assert_eq!(m.selected(), 1);
        assert_eq!(m.handle_button(gamepad::BUTTON_CONFIRM), ModalOutcome::Invoke(1));
        assert_eq!(m.handle_button(gamepad::BUTTON_CANCEL), ModalOutcome::Invoke(1));
        assert_eq!(m.handle_button(7), ModalOutcome::Consumed);
    }

    #[test]
    fn test_auto_size_within_bounds() {
        let surface = HeadlessSurface::new(800.0, 600.0);
        let theme = Theme::default();

        let small = Modal::new(1, "T", "hi", vec![], None, &surface, &theme);
        assert!(small.bounds().w >= MIN_WIDTH);
        assert!(small.bounds().h >= MIN_HEIGHT);

        let long_message = "word ".repeat(300);
        let big = Modal::new(2, "T", &long_message, vec![], None, &surface, &theme);
        assert!(big.bounds().w <= MAX_WIDTH.min(800.0 * MAX_WIDTH_FRAC));
        assert!(big.bounds().h <= 600.0 * MAX_HEIGHT_FRAC);
        assert!(big.lines.len() > 1);
    }

    #[test]
    fn test_explicit_size_respected() {
        let surface = HeadlessSurface::new(800.0, 600.0);
        let m = Modal::new(1, "T", "msg", vec![], Some((300.0, 200.0)), &surface, &Theme::default());
        assert_eq!(m.bounds().w, 300.0);
        assert_eq!(m.bounds().h, 200.0);
        // Centered
        assert_eq!(m.bounds().x, 250.0);
        assert_eq!(m.bounds().y, 200.0);
    }

    #[test]
    fn test_button_row_centered_near_bottom() {
        let m = modal(vec![ModalAction::new("A"), ModalAction::new("B")]);
        let b = m.bounds();
        for r in &m.action_rects {
            assert!(r.y + r.h <= b.y + b.h);
            assert!(r.y > b.center_y());
        }
        // Evenly spaced: constant gap
        let gap = m.action_rects[1].x - (m.action_rects[0].x + m.action_rects[0].w);
        assert!((gap - BUTTON_GAP).abs() < 0.01);
    }
}
