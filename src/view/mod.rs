mod action_buttons;
mod catalog;
mod copy_button;
mod icon;
mod not_found;
mod preamble;
mod share;

pub use action_buttons::*;
pub use catalog::*;
pub use copy_button::*;
pub use icon::*;
pub use not_found::*;
pub use preamble::*;
pub use share::*;
