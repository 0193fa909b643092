//! Form rendering module
//!
//! - `field_renderer`: single field boxes and help text
//! - `lead_form`: the lead form with its action panel

mod field_renderer;
mod lead_form;

pub use lead_form::draw as draw_lead_form;
