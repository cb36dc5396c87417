//! Pointer Module - Pointer buttons and the display-to-surface transform.
//!
//! Host pointer events arrive in displayed (window) coordinates; the
//! surface may be shown scaled. [`DisplayTransform`] converts by
//! multiplying each axis by `surface_native_size / displayed_size`.
//! The coordinator keeps ambient pointer state; elements read it from
//! the draw context for hover rendering.

bitflags::bitflags! {
    /// Currently held pointer buttons, as a bitfield.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PointerButtons: u8 {
        const NONE = 0;
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
    }
}

// =============================================================================
// DISPLAY TRANSFORM
// =============================================================================

/// Converts host/display coordinates into surface-native coordinates.
///
/// A surface rendered 1:1 has scale 1.0 on both axes. A 800px-wide
/// surface displayed at 400px has scale 2.0 on x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    surface_w: f32,
    surface_h: f32,
    displayed_w: f32,
    displayed_h: f32,
}

impl DisplayTransform {
    /// Create an identity transform for a surface of the given size.
    pub fn identity(surface_w: f32, surface_h: f32) -> Self {
        Self {
            surface_w,
            surface_h,
            displayed_w: surface_w,
            displayed_h: surface_h,
        }
    }

    /// Record the size the surface is currently displayed at.
    ///
    /// Non-positive sizes are ignored, keeping the previous transform,
    /// so a zero-sized window during live resize cannot poison the
    /// scale factors.
    pub fn set_displayed_size(&mut self, w: f32, h: f32) {
        if w > 0.0 && h > 0.0 {
            self.displayed_w = w;
            self.displayed_h = h;
        }
    }

    /// Map a point from display space into surface space.
    #[inline]
    pub fn to_surface(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * (self.surface_w / self.displayed_w),
            y * (self.surface_h / self.displayed_h),
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
