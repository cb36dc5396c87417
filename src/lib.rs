//! # ember-ui
//!
//! Canvas widget toolkit for Rust - focus, input routing, and overlays
//! for 2D surfaces.
//!
//! ember-ui builds interactive panels on any 2D drawing surface: the
//! host owns the window, the input sources, and the render loop, and
//! the [`ui::Ui`] coordinator owns everything in between - an ordered
//! control registry, a single focus index, a modal stack, toasts, and
//! one routing state machine for keyboard, pointer, and controller
//! input.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use ember_ui::prelude::*;
//!
//! let mut ui = Ui::new(800.0, 600.0);
//!
//! ui.register(Box::new(
//!     Button::new(Rect::new(20.0, 20.0, 120.0, 32.0), "Play").on_press(|| {}),
//! ));
//! ui.register(Box::new(
//!     Slider::new(Rect::new(20.0, 70.0, 200.0, 24.0), 0.0, 100.0, 5.0, 50.0),
//! ));
//!
//! ui.open_toast("Saved", Severity::Success, Duration::from_secs(3));
//!
//! let mut surface = HeadlessSurface::new(800.0, 600.0);
//! ui.start();
//! ui.frame(&mut surface);
//! ```
//!
//! ## Architecture
//!
//! - [`surface`] - the [`Surface`](surface::Surface) drawing trait the
//!   host implements, plus a headless recorder for tests
//! - [`ui`] - the coordinator: registry, focus, and input routing
//! - [`widgets`] - the [`Control`](widgets::Control) trait and the
//!   built-in controls
//! - [`overlay`] - modal dialogs and toasts
//! - [`state`] - keyboard, pointer, and controller input types
//! - [`theme`] - colors, metrics, and severity styling
//!
//! ## Input Precedence
//!
//! Every event funnels through one state machine: the topmost modal
//! (if any) owns all input; otherwise Tab moves focus and Escape hits
//! the global handler; everything else goes to the focused control.

pub mod overlay;
pub mod state;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;
pub mod ui;
pub mod widgets;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use overlay::{Modal, ModalAction, ModalHandle, ModalOutcome, Toast, ToastHandle};
pub use state::gamepad::{
    BUTTON_CANCEL, BUTTON_CONFIRM, BUTTON_DPAD_DOWN, BUTTON_DPAD_LEFT, BUTTON_DPAD_RIGHT,
    BUTTON_DPAD_UP,
};
pub use state::keyboard::{KeyEvent, KeyState, Modifiers};
pub use state::pointer::PointerButtons;
pub use surface::{DrawCall, HeadlessSurface, Surface, TextAlign};
pub use theme::{Severity, SeverityStyle, Theme};
pub use types::{Rect, Rgba};
pub use ui::{ControlId, Ui};
pub use widgets::{
    AxisDirection, Button, Control, DrawContext, Menu, MenuItem, Orientation, Panel, RadioGroup,
    Slider, TextField, Toggle,
};

/// Convenience prelude with the common surface of the crate.
pub mod prelude {
    pub use crate::overlay::{ModalAction, ModalHandle, ToastHandle};
    pub use crate::state::keyboard::{KeyEvent, KeyState, Modifiers};
    pub use crate::state::pointer::PointerButtons;
    pub use crate::surface::{HeadlessSurface, Surface, TextAlign};
    pub use crate::theme::{Severity, Theme};
    pub use crate::types::{Rect, Rgba};
    pub use crate::ui::{ControlId, Ui};
    pub use crate::widgets::{
        AxisDirection, Button, Control, DrawContext, Menu, MenuItem, Orientation, Panel,
        RadioGroup, Slider, TextField, Toggle,
    };
}
