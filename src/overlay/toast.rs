//! Toast - Transient, self-expiring notification.
//!
//! A toast schedules its own removal on a one-shot timer thread, keyed
//! to wall-clock duration and independent of the render loop - expiry
//! keeps advancing while the loop is stopped. The expiry flag is an
//! `Arc<AtomicBool>` latch, so removal is idempotent: dismissing or
//! pruning an already-expired toast is a no-op. The elapsed-time check
//! in `is_expired` backstops the thread, so a toast can never outlive
//! its duration even if the timer is lost.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::surface::{Surface, TextAlign};
use crate::theme::{Severity, Theme};
use crate::types::Rect;

const TOAST_W: f32 = 280.0;
const TOAST_H: f32 = 44.0;
const MARGIN: f32 = 12.0;
const GAP: f32 = 8.0;

/// Handle to a live toast; pass to
/// [`Ui::dismiss_toast`](crate::ui::Ui::dismiss_toast) to remove early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHandle(pub(crate) u64);

/// A transient notification entry.
pub struct Toast {
    id: u64,
    message: String,
    severity: Severity,
    created: Instant,
    duration: Duration,
    expired: Arc<AtomicBool>,
}

impl Toast {
    /// Create a toast and arm its expiry timer.
    pub(crate) fn new(id: u64, message: impl Into<String>, severity: Severity, duration: Duration) -> Self {
        let expired = Arc::new(AtomicBool::new(false));

        let flag = expired.clone();
        thread::spawn(move || {
            thread::sleep(duration);
            flag.store(true, Ordering::SeqCst);
        });

        let message = message.into();
        debug!(id, %message, ?severity, ?duration, "toast opened");
        Self {
            id,
            message,
            severity,
            created: Instant::now(),
            duration,
            expired,
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// The toast message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity category.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether this toast should be removed from the live list.
    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::SeqCst) || self.created.elapsed() >= self.duration
    }

    /// Latch the expiry flag (early dismissal). Idempotent.
    pub(crate) fn dismiss(&self) {
        self.expired.store(true, Ordering::SeqCst);
    }

    /// Display rect as a pure function of the toast's index among the
    /// currently live toasts: stacked down the top-right corner, newest
    /// below prior ones.
    pub(crate) fn rect_at(index: usize, surface_w: f32) -> Rect {
        Rect::new(
            surface_w - TOAST_W - MARGIN,
            MARGIN + index as f32 * (TOAST_H + GAP),
            TOAST_W,
            TOAST_H,
        )
    }

    pub(crate) fn draw(&self, surface: &mut dyn Surface, theme: &Theme, index: usize) {
        let (sw, _) = surface.size();
        let rect = Self::rect_at(index, sw);
        let style = theme.severity(self.severity);

        surface.fill_rounded_rect(rect, theme.radius, style.bg);
        surface.stroke_rounded_rect(rect, theme.radius, style.border, 1.0);
        // Severity accent bar on the left edge
        surface.fill_rect(Rect::new(rect.x, rect.y, 3.0, rect.h), style.border);

        surface.fill_text(
            &self.message,
            rect.x + 12.0,
            rect.center_y() - theme.small_font_px / 2.0,
            theme.small_font_px,
            style.fg,
            TextAlign::Left,
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let t = Toast::new(1, "saved", Severity::Success, Duration::from_millis(40));
        assert!(!t.is_expired());

        thread::sleep(Duration::from_millis(70));
        assert!(t.is_expired());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let t = Toast::new(1, "bye", Severity::Info, Duration::from_secs(60));
        assert!(!t.is_expired());

        t.dismiss();
        assert!(t.is_expired());
        // Second dismissal is a no-op, not an error
        t.dismiss();
        assert!(t.is_expired());
    }

    #[test]
    fn test_stacking_offset_is_index_function() {
        let r0 = Toast::rect_at(0, 800.0);
        let r1 = Toast::rect_at(1, 800.0);
        let r2 = Toast::rect_at(2, 800.0);

        assert_eq!(r0.x, r1.x);
        // Newest renders below prior ones, constant spacing
        assert_eq!(r1.y - r0.y, r2.y - r1.y);
        assert!(r1.y > r0.y);
    }
}
