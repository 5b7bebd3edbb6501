//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod layout;
pub mod name_list_screen;
pub mod quit_dialog;

pub use help_dialog::HelpDialog;
pub use layout::{calculate_screen_layout, centered_popup};
pub use name_list_screen::NameListScreen;
pub use quit_dialog::QuitDialog;
