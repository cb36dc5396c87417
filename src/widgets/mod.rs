//! Widgets - the interactive elements the coordinator routes input to.
//!
//! Every widget implements [`Control`]; handlers it does not need stay
//! at their default no-op, making dispatch capability-optional.

mod button;
mod control;
mod menu;
mod panel;
mod radio_group;
mod slider;
mod text_field;
mod toggle;

pub use button::Button;
pub use control::{AxisDirection, Control, DrawContext};
pub use menu::{Menu, MenuItem, Orientation};
pub use panel::Panel;
pub use radio_group::RadioGroup;
pub use slider::Slider;
pub use text_field::TextField;
pub use toggle::Toggle;
