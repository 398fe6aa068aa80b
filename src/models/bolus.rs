// ABOUTME: Deterministic bolus dose calculation with safety checks
// Dose = carbs/ICR + (glucose - target)/ISF - insulin on board, clamped and capped

use thiserror::Error;

/// Correction target in mg/dL
const TARGET_GLUCOSE: f64 = 110.0;

/// Below this glucose no bolus is recommended
const LOW_GLUCOSE_THRESHOLD: f64 = 70.0;

/// Hard ceiling on a single recommended dose, in units
const MAX_SINGLE_DOSE: f64 = 25.0;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BolusError {
    #[error("insulin-to-carb ratio (ICR) must be greater than zero")]
    InvalidIcr,
    #[error("insulin sensitivity factor (ISF) must be greater than zero")]
    InvalidIsf,
    #[error("field '{0}' is not a valid number")]
    InvalidField(&'static str),
}

/// Meal timing, one-hot encoded in the original model features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MealTime {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealTime {
    pub fn all() -> &'static [MealTime] {
        &[Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Breakfast => Self::Lunch,
            Self::Lunch => Self::Dinner,
            Self::Dinner => Self::Snack,
            Self::Snack => Self::Breakfast,
        }
    }
}

/// Inputs to the dose calculation, mirroring the predict form fields
#[derive(Debug, Clone, Default)]
pub struct BolusInputs {
    /// Current glucose level in mg/dL
    pub glucose: f64,
    /// Adjusted carbs in grams (carried over from the meals screen)
    pub adj_carbs: f64,
    /// Carb absorption rate in g/hr
    pub carb_rate: f64,
    /// Short-acting insulin on board, units
    pub s_iob: f64,
    /// Long-acting insulin on board, units
    pub d_iob: f64,
    /// Body weight in kg
    pub weight: f64,
    /// Insulin-to-carb ratio, g per unit
    pub icr: f64,
    /// Insulin sensitivity factor, mg/dL per unit
    pub isf: f64,
    pub meal: MealTime,
}

/// Safety observations attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyFlag {
    /// Glucose below threshold; treat the low before dosing
    LowGlucose,
    /// Raw result was negative and was clamped to zero
    IobCoversDose,
    /// Result exceeded the single-dose ceiling and was capped
    DoseCapped,
}

impl SafetyFlag {
    pub fn message(&self) -> &'static str {
        match self {
            Self::LowGlucose => "Glucose is low - treat the low first, no bolus recommended",
            Self::IobCoversDose => "Insulin on board already covers this meal",
            Self::DoseCapped => "Dose capped at the single-dose maximum",
        }
    }
}

/// Recommended dose plus any safety flags raised while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct BolusRecommendation {
    /// Units, rounded to 2 decimal places
    pub units: f64,
    pub flags: Vec<SafetyFlag>,
}

impl BolusInputs {
    /// Compute a dose recommendation with safety checks applied in order:
    /// low-glucose hold, non-negative clamp, single-dose cap.
    pub fn recommend(&self) -> Result<BolusRecommendation, BolusError> {
        if self.icr <= 0.0 {
            return Err(BolusError::InvalidIcr);
        }
        if self.isf <= 0.0 {
            return Err(BolusError::InvalidIsf);
        }

        if self.glucose < LOW_GLUCOSE_THRESHOLD {
            return Ok(BolusRecommendation {
                units: 0.0,
                flags: vec![SafetyFlag::LowGlucose],
            });
        }

        let carb_dose = self.adj_carbs / self.icr;
        let correction = (self.glucose - TARGET_GLUCOSE) / self.isf;
        let on_board = self.s_iob + self.d_iob;
        let raw = carb_dose + correction - on_board;

        let mut flags = Vec::new();
        let mut units = raw;

        if units < 0.0 {
            units = 0.0;
            flags.push(SafetyFlag::IobCoversDose);
        }
        if units > MAX_SINGLE_DOSE {
            units = MAX_SINGLE_DOSE;
            flags.push(SafetyFlag::DoseCapped);
        }

        Ok(BolusRecommendation {
            units: (units * 100.0).round() / 100.0,
            flags,
        })
    }
}
