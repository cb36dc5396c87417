//! Theme Module - Style records for widgets and overlays.
//!
//! One [`Theme`] value owned by the coordinator flows to every element
//! through the draw context. Widgets never hard-code colors; severity
//! categories map to one fixed style each.

use crate::types::Rgba;

// =============================================================================
// Severity
// =============================================================================

/// Severity category for toast notifications.
///
/// Each severity is bound to exactly one style in the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Colors for one severity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub bg: Rgba,
    pub fg: Rgba,
    pub border: Rgba,
}

// =============================================================================
// Theme
// =============================================================================

/// The complete style record for a UI.
///
/// Split in three groups: the widget palette, metric defaults, and the
/// overlay (modal/toast) colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Widget palette
    pub surface_bg: Rgba,
    pub widget_bg: Rgba,
    pub widget_bg_hot: Rgba,
    pub border: Rgba,
    pub text: Rgba,
    pub text_muted: Rgba,
    pub accent: Rgba,
    pub accent_text: Rgba,
    pub focus_ring: Rgba,

    // Metrics
    pub font_px: f32,
    pub small_font_px: f32,
    pub radius: f32,
    pub padding: f32,

    // Overlays
    pub overlay_dim: Rgba,
    pub modal_bg: Rgba,
    pub modal_border: Rgba,

    // Fixed severity styles
    pub info: SeverityStyle,
    pub success: SeverityStyle,
    pub warning: SeverityStyle,
    pub error: SeverityStyle,
}

impl Theme {
    /// Style bound to a severity category.
    pub fn severity(&self, severity: Severity) -> SeverityStyle {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// Approximate advance width of one text cell at the theme font size.
    ///
    /// Used where no surface is available to measure (text-field cursor
    /// positioning from a click).
    pub fn char_advance(&self) -> f32 {
        self.font_px * 0.6
    }

    /// Line height for the theme font size.
    pub fn line_height(&self) -> f32 {
        self.font_px * 1.4
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_bg: Rgba::rgb(24, 26, 32),
            widget_bg: Rgba::rgb(45, 49, 60),
            widget_bg_hot: Rgba::rgb(58, 63, 76),
            border: Rgba::rgb(70, 76, 92),
            text: Rgba::rgb(224, 226, 232),
            text_muted: Rgba::rgb(140, 146, 160),
            accent: Rgba::rgb(82, 139, 255),
            accent_text: Rgba::WHITE,
            focus_ring: Rgba::rgb(120, 166, 255),

            font_px: 14.0,
            small_font_px: 12.0,
            radius: 6.0,
            padding: 8.0,

            overlay_dim: Rgba::new(0, 0, 0, 140),
            modal_bg: Rgba::rgb(36, 39, 48),
            modal_border: Rgba::rgb(82, 88, 104),

            info: SeverityStyle {
                bg: Rgba::rgb(35, 58, 94),
                fg: Rgba::rgb(196, 218, 255),
                border: Rgba::rgb(82, 139, 255),
            },
            success: SeverityStyle {
                bg: Rgba::rgb(28, 66, 41),
                fg: Rgba::rgb(190, 240, 205),
                border: Rgba::rgb(72, 180, 105),
            },
            warning: SeverityStyle {
                bg: Rgba::rgb(84, 64, 22),
                fg: Rgba::rgb(250, 226, 168),
                border: Rgba::rgb(222, 168, 62),
            },
            error: SeverityStyle {
                bg: Rgba::rgb(84, 30, 30),
                fg: Rgba::rgb(255, 198, 198),
                border: Rgba::rgb(224, 82, 82),
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_severity_has_distinct_style() {
        let theme = Theme::default();
        let styles = [
            theme.severity(Severity::Info),
            theme.severity(Severity::Success),
            theme.severity(Severity::Warning),
            theme.severity(Severity::Error),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.bg, b.bg);
            }
        }
    }
}
