//! Input handler modules for different TUI contexts.

pub mod main;
pub mod popups;

// Re-export handler functions
pub use main::{handle_main_input, handle_search_input, handle_startup_error_input};
pub use popups::handle_popup_input;
