//! Reusable UI components

mod button;

pub use button::{render_button, BUTTON_HEIGHT};
