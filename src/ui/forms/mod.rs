//! Form rendering module
//!
//! - `field_renderer`: input fields and the inline error banner
//! - `views`: the pending and success views shared by both lead forms

mod field_renderer;
mod views;

pub use field_renderer::{draw_error_banner, draw_field};
pub use views::{draw_pending, draw_success};
