// ABOUTME: Core data models for meals, calorie totals, and bolus dose calculation

pub mod bolus;
pub mod meals;

pub use bolus::{BolusError, BolusInputs, BolusRecommendation, MealTime, SafetyFlag};
pub use meals::{MealCatalog, MealCategory, MealItem, MealSelection};
