//! Form rendering module
//!
//! This module contains UI components for rendering the wizard:
//! - `field_renderer`: Input boxes with inline errors
//! - `review`: Read-only summary lines
//! - `wizard_form`: The active step and its button row

mod field_renderer;
mod review;
mod wizard_form;

pub use wizard_form::draw as draw_wizard;
