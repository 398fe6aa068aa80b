// ABOUTME: UI components for the TUI interface including screens and the guide panel

pub mod guide;
pub mod instructions_screen;
pub mod layout;
pub mod meals_screen;
pub mod predict_screen;
pub mod welcome_screen;

pub use guide::{GuidePanelComponent, GuidePanelState};
pub use instructions_screen::InstructionsScreenComponent;
pub use layout::LayoutComponent;
pub use meals_screen::MealsScreenComponent;
pub use predict_screen::PredictScreenComponent;
pub use welcome_screen::WelcomeScreenComponent;
