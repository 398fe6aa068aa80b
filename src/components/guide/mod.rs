// ABOUTME: Onboarding guide panel module
// Step-by-step walkthrough overlay with Back/Next navigation

pub mod component;
pub mod state;

pub use component::GuidePanelComponent;
pub use state::{GuidePanelState, GUIDE_STEPS};
