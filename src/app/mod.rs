// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod state;

pub use events::EventHandler;
pub use state::{App, AppState};
