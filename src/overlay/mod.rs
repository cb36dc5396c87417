//! Overlay elements: modal dialogs and toast notifications.
//!
//! Modals are stack-scoped and own input exclusively while present.
//! Toasts are non-interactive and expire on their own clock.

mod modal;
mod toast;

pub use modal::{Modal, ModalAction, ModalHandle, ModalOutcome};
pub use toast::{Toast, ToastHandle};
