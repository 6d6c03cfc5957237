//! Input handlers mapping terminal events onto App actions.

pub mod keyboard;
pub mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
