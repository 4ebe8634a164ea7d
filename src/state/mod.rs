//! Application state module

mod app_state;
mod carousel;
mod forms;
mod popup_state;

pub use app_state::*;
pub use carousel::*;
pub use forms::*;
pub use popup_state::*;
