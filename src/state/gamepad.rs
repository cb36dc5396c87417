//! Gamepad Module - Controller button protocol and edge detection.
//!
//! The host polls zero or more controller devices once per frame and
//! hands the coordinator each device's indexed array of button-pressed
//! booleans. Dispatch is edge-triggered: a button fires only on the
//! transition from unpressed to pressed, never while held, detected by
//! comparing against the prior frame's snapshot.
//!
//! The button-index meanings below are the de facto protocol with the
//! input collaborator (standard-gamepad layout) and must not change.

// =============================================================================
// BUTTON PROTOCOL
// =============================================================================

/// Confirm - activates the focused control, or the modal's selected action.
pub const BUTTON_CONFIRM: usize = 0;
/// Cancel - the global escape callback, or the modal's cancel path.
pub const BUTTON_CANCEL: usize = 1;
/// D-pad up - focus previous.
pub const BUTTON_DPAD_UP: usize = 12;
/// D-pad down - focus next.
pub const BUTTON_DPAD_DOWN: usize = 13;
/// D-pad left - directional adjust on the focused control.
pub const BUTTON_DPAD_LEFT: usize = 14;
/// D-pad right - directional adjust on the focused control.
pub const BUTTON_DPAD_RIGHT: usize = 15;

// =============================================================================
// EDGE DETECTION
// =============================================================================

/// Button indices that transitioned unpressed -> pressed this poll.
///
/// Indices beyond the previous snapshot's length compare against
/// unpressed, so a device growing buttons mid-session still edges
/// correctly.
pub fn rising_edges(previous: &[bool], current: &[bool]) -> Vec<usize> {
    current
        .iter()
        .enumerate()
        .filter(|&(i, &down)| down && !previous.get(i).copied().unwrap_or(false))
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
