//! Slider - Step-quantized value selection on a horizontal track.
//!
//! Every mutation path goes through the same snap: the raw value maps
//! to `round((raw - min) / step) * step + min`, then clamps to
//! `[min, max]`, so the value always sits on the step grid.

use tracing::trace;

use crate::state::keyboard::KeyEvent;
use crate::surface::{Surface, TextAlign};
use crate::types::Rect;
use crate::widgets::control::{AxisDirection, Control, DrawContext};

/// Knob radius, also the track's horizontal inset.
const KNOB_RADIUS: f32 = 8.0;

/// A horizontal step-quantized slider.
pub struct Slider {
    rect: Rect,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    on_change: Option<Box<dyn FnMut(f32)>>,
}

impl Slider {
    /// Create a slider over `[min, max]` with the given step.
    ///
    /// The initial value is snapped to the grid immediately. A
    /// non-positive step is coerced to 1.0.
    pub fn new(rect: Rect, min: f32, max: f32, step: f32, value: f32) -> Self {
        let step = if step > 0.0 { step } else { 1.0 };
        let mut s = Self {
            rect,
            min,
            max,
            step,
            value: min,
            on_change: None,
        };
        s.value = s.snap(value);
        s
    }

    /// Set the change callback. Receives the snapped value.
    pub fn on_change(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current value, always on the step grid within `[min, max]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Snap a raw value onto the step grid and clamp.
    fn snap(&self, raw: f32) -> f32 {
        let stepped = ((raw - self.min) / self.step).round() * self.step + self.min;
        stepped.clamp(self.min, self.max)
    }

    fn set_value(&mut self, raw: f32) {
        let snapped = self.snap(raw);
        if (snapped - self.value).abs() > f32::EPSILON {
            self.value = snapped;
            trace!(value = self.value, "slider value changed");
            if let Some(cb) = self.on_change.as_mut() {
                cb(self.value);
            }
        }
    }

    /// The track rect, inset so the knob stays inside the bounds.
    fn track(&self) -> Rect {
        Rect::new(
            self.rect.x + KNOB_RADIUS,
            self.rect.center_y() - 2.0,
            (self.rect.w - 2.0 * KNOB_RADIUS).max(1.0),
            4.0,
        )
    }

    /// Fraction of the track the current value sits at.
    fn fraction(&self) -> f32 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }
}

impl Control for Slider {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn handle_click(&mut self, x: f32, _y: f32) {
        let track = self.track();
        let fraction = ((x - track.x) / track.w).clamp(0.0, 1.0);
        self.set_value(self.min + fraction * (self.max - self.min));
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        match event.key.as_str() {
            "ArrowLeft" => self.handle_left(),
            "ArrowRight" => self.handle_right(),
            _ => {}
        }
    }

    fn handle_axis(&mut self, direction: AxisDirection) -> bool {
        match direction {
            AxisDirection::Left | AxisDirection::Down => self.handle_left(),
            AxisDirection::Right | AxisDirection::Up => self.handle_right(),
        }
        true
    }

    fn handle_left(&mut self) {
        self.set_value(self.value - self.step);
    }

    fn handle_right(&mut self) {
        self.set_value(self.value + self.step);
    }

    fn draw(&self, surface: &mut dyn Surface, cx: &DrawContext) {
        let theme = cx.theme;
        let track = self.track();

        surface.fill_rounded_rect(track, track.h / 2.0, theme.widget_bg);
        let filled = Rect::new(track.x, track.y, track.w * self.fraction(), track.h);
        surface.fill_rounded_rect(filled, track.h / 2.0, theme.accent);

        let knob_x = track.x + track.w * self.fraction() - KNOB_RADIUS;
        let knob = Rect::new(
            knob_x,
            self.rect.center_y() - KNOB_RADIUS,
            KNOB_RADIUS * 2.0,
            KNOB_RADIUS * 2.0,
        );
        let knob_color = if cx.hovered(self.rect) { theme.accent_text } else { theme.text };
        surface.fill_rounded_rect(knob, KNOB_RADIUS, knob_color);
        surface.stroke_rounded_rect(knob, KNOB_RADIUS, theme.border, 1.0);

        if cx.focused {
            surface.stroke_rounded_rect(self.rect.inset(-2.0), theme.radius, theme.focus_ring, 2.0);
            surface.fill_text(
                &format!("{}", self.value),
                self.rect.center_x(),
                self.rect.y - theme.small_font_px - 2.0,
                theme.small_font_px,
                theme.text_muted,
                TextAlign::Center,
            );
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn on_grid(s: &Slider) -> bool {
        let rem = ((s.value() - 0.0) / 5.0).fract();
        rem.abs() < 1e-4 || (rem.abs() - 1.0).abs() < 1e-4
    }

    fn slider() -> Slider {
        Slider::new(Rect::new(0.0, 20.0, 200.0, 24.0), 0.0, 100.0, 5.0, 50.0)
    }

    #[test]
    fn test_three_left_steps() {
        let mut s = slider();
        s.handle_key(&KeyEvent::new("ArrowLeft"));
        s.handle_key(&KeyEvent::new("ArrowLeft"));
        s.handle_key(&KeyEvent::new("ArrowLeft"));
        assert_eq!(s.value(), 35.0);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut s = slider();
        for _ in 0..40 {
            s.handle_left();
        }
        assert_eq!(s.value(), 0.0);
        for _ in 0..40 {
            s.handle_right();
        }
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn test_arbitrary_direction_sequences_stay_on_grid() {
        let mut s = slider();
        let moves = [true, true, false, true, false, false, false, true, false, false];
        for (i, right) in moves.iter().cycle().take(50).enumerate() {
            if *right {
                s.handle_right();
            } else {
                s.handle_left();
            }
            assert!(s.value() >= 0.0 && s.value() <= 100.0, "move {i} escaped range");
            assert!(on_grid(&s), "move {i} left the step grid: {}", s.value());
        }
    }

    #[test]
    fn test_initial_value_snapped() {
        let s = Slider::new(Rect::new(0.0, 0.0, 200.0, 24.0), 0.0, 100.0, 5.0, 52.0);
        assert_eq!(s.value(), 50.0);

        let s = Slider::new(Rect::new(0.0, 0.0, 200.0, 24.0), 0.0, 100.0, 5.0, 53.0);
        assert_eq!(s.value(), 55.0);
    }

    #[test]
    fn test_click_maps_to_nearest_step() {
        let mut s = slider();
        // Track spans x 8..192 (184px). Click mid-track is 50, click
        // at the far right clamps to max.
        s.handle_click(8.0 + 184.0 / 2.0, 30.0);
        assert_eq!(s.value(), 50.0);
        s.handle_click(500.0, 30.0);
        assert_eq!(s.value(), 100.0);
        s.handle_click(0.0, 30.0);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_callback_receives_snapped_values() {
        use std::cell::Cell;
        use std::rc::Rc;

        let last = Rc::new(Cell::new(0.0f32));
        let last_clone = last.clone();
        let mut s = Slider::new(Rect::new(0.0, 0.0, 200.0, 24.0), 0.0, 1.0, 0.25, 0.5)
            .on_change(move |v| last_clone.set(v));

        s.handle_right();
        assert_eq!(last.get(), 0.75);

        // Clamped repeat at the edge does not re-fire
        s.handle_right();
        s.handle_right();
        assert_eq!(last.get(), 1.0);
    }

    #[test]
    fn test_axis_adjust_steps() {
        let mut s = slider();
        assert!(s.handle_axis(AxisDirection::Left));
        assert_eq!(s.value(), 45.0);
        assert!(s.handle_axis(AxisDirection::Right));
        assert_eq!(s.value(), 50.0);
    }
}
