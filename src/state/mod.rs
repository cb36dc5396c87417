//! Input state modules.
//!
//! Event types and ambient-state helpers for the three input families
//! the coordinator routes: keyboard, pointer, and game controller.

pub mod gamepad;
pub mod keyboard;
pub mod pointer;
