//! Keyboard Module - Key event types.
//!
//! The host event source delivers key events with a string identifier
//! ("a", "Enter", "ArrowUp") plus modifier flags. The coordinator owns
//! routing; this module only defines the event shape and the
//! classification helpers controls dispatch on.
//!
//! # Example
//!
//! ```
//! use ember_ui::state::keyboard::{KeyEvent, Modifiers};
//!
//! let tab_back = KeyEvent::with_modifiers("Tab", Modifiers::shift());
//! assert!(tab_back.modifiers.shift);
//! assert!(tab_back.printable_char().is_none());
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl.
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with shift.
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// True when no modifier beyond shift is held.
    ///
    /// Shift alone still produces printable input (capitals, symbols),
    /// so text entry treats it as plain.
    pub fn is_plain(&self) -> bool {
        !self.ctrl && !self.alt && !self.meta
    }
}

/// Key event state (press, repeat, release).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    /// The key identifier (e.g., "a", "Enter", "ArrowUp").
    pub key: String,
    /// Modifier keys state.
    pub modifiers: Modifiers,
    /// Press/repeat/release state.
    pub state: KeyState,
}

impl KeyEvent {
    /// Create a simple key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event.
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Presses and auto-repeats both route to elements; releases only
    /// update ambient state.
    pub fn routes(&self) -> bool {
        matches!(self.state, KeyState::Press | KeyState::Repeat)
    }

    /// The printable character this event inserts, if any.
    ///
    /// Single-char key identifiers without ctrl/alt/meta are printable;
    /// named keys ("Enter", "ArrowLeft") are not.
    pub fn printable_char(&self) -> Option<char> {
        if !self.modifiers.is_plain() {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
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
    fn test_printable_single_char() {
        assert_eq!(KeyEvent::new("a").printable_char(), Some('a'));
        assert_eq!(KeyEvent::new(" ").printable_char(), Some(' '));
        assert_eq!(KeyEvent::new("é").printable_char(), Some('é'));
    }

    #[test]
    fn test_named_keys_not_printable() {
        assert_eq!(KeyEvent::new("Enter").printable_char(), None);
        assert_eq!(KeyEvent::new("ArrowLeft").printable_char(), None);
        assert_eq!(KeyEvent::new("").printable_char(), None);
    }

    #[test]
    fn test_modified_keys_not_printable() {
        let ev = KeyEvent::with_modifiers("c", Modifiers::ctrl());
        assert_eq!(ev.printable_char(), None);

        // Shift alone stays printable (capitals)
        let ev = KeyEvent::with_modifiers("A", Modifiers::shift());
        assert_eq!(ev.printable_char(), Some('A'));
    }

    #[test]
    fn test_routing_states() {
        let mut ev = KeyEvent::new("a");
        assert!(ev.routes());
        ev.state = KeyState::Repeat;
        assert!(ev.routes());
        ev.state = KeyState::Release;
        assert!(!ev.routes());
    }
}
