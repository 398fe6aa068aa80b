// ABOUTME: Application state for the TUI: current view, guide panel wiring,
// meals selection, and the predict form

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::components::guide::GuidePanelState;
use crate::config::{parse_key_name, AppConfig};
use crate::models::{BolusError, BolusInputs, BolusRecommendation, MealCategory, MealSelection, MealTime};

/// Top-level screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Welcome,
    Instructions,
    Meals,
    Predict,
}

impl View {
    pub fn all() -> &'static [View] {
        &[Self::Welcome, Self::Instructions, Self::Meals, Self::Predict]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Instructions => "Instructions",
            Self::Meals => "Meals",
            Self::Predict => "Predict",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Welcome => Self::Instructions,
            Self::Instructions => Self::Meals,
            Self::Meals => Self::Predict,
            Self::Predict => Self::Welcome,
        }
    }

    /// Parse a view name from config
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "welcome" => Some(Self::Welcome),
            "instructions" => Some(Self::Instructions),
            "meals" => Some(Self::Meals),
            "predict" => Some(Self::Predict),
            _ => None,
        }
    }
}

/// Auto-open rule resolved from config: which view counts as the landing
/// view and how long to wait before opening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoOpenRule {
    pub view: View,
    pub delay: Duration,
}

/// Resolved bindings for the guide panel.
///
/// Every field is optional: a missing binding means the feature is simply
/// not wired, with no error surfaced anywhere.
#[derive(Debug, Clone)]
pub struct GuideWiring {
    pub toggle: Option<KeyCode>,
    pub close: Option<KeyCode>,
    pub auto_open: Option<AutoOpenRule>,
}

impl GuideWiring {
    pub fn from_config(config: &AppConfig) -> Self {
        let toggle = config.keys.guide_toggle.as_deref().and_then(parse_key_name);
        let close = config.keys.guide_close.as_deref().and_then(parse_key_name);

        let auto_open = if config.guide.auto_open {
            View::from_name(&config.guide.auto_open_view).map(|view| AutoOpenRule {
                view,
                delay: Duration::from_millis(config.guide.auto_open_delay_ms),
            })
        } else {
            None
        };

        Self {
            toggle,
            close,
            auto_open,
        }
    }

    /// Wiring with nothing bound (guide fully disabled)
    pub fn unwired() -> Self {
        Self {
            toggle: None,
            close: None,
            auto_open: None,
        }
    }
}

/// Fields of the predict form, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictField {
    Glucose,
    CarbRate,
    ShortIob,
    LongIob,
    Weight,
    Icr,
    Isf,
}

impl PredictField {
    pub fn all() -> &'static [PredictField] {
        &[
            Self::Glucose,
            Self::CarbRate,
            Self::ShortIob,
            Self::LongIob,
            Self::Weight,
            Self::Icr,
            Self::Isf,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Glucose => "Glucose (mg/dL)",
            Self::CarbRate => "Carbs/hr (g)",
            Self::ShortIob => "Short IOB (U)",
            Self::LongIob => "Long IOB (U)",
            Self::Weight => "Weight (kg)",
            Self::Icr => "ICR (g/U)",
            Self::Isf => "ISF (mg/dL per U)",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Glucose => "glucose",
            Self::CarbRate => "carb_rate",
            Self::ShortIob => "sIOB",
            Self::LongIob => "dIOB",
            Self::Weight => "weight",
            Self::Icr => "ICR",
            Self::Isf => "ISF",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }
}

/// State of the predict screen: raw field inputs and the last result
#[derive(Debug, Clone)]
pub struct PredictScreenState {
    /// Raw text per field, indexed by PredictField position
    pub inputs: Vec<String>,
    pub focused: PredictField,
    pub meal: MealTime,
    /// Calories carried over from the meals screen
    pub carried_calories: u32,
    pub result: Option<Result<BolusRecommendation, BolusError>>,
}

impl PredictScreenState {
    pub fn new() -> Self {
        Self {
            inputs: vec![String::new(); PredictField::all().len()],
            focused: PredictField::Glucose,
            meal: MealTime::default(),
            carried_calories: 0,
            result: None,
        }
    }

    pub fn focused_input(&self) -> &str {
        &self.inputs[self.focused.index()]
    }

    pub fn next_field(&mut self) {
        let fields = PredictField::all();
        let idx = (self.focused.index() + 1) % fields.len();
        self.focused = fields[idx];
    }

    pub fn previous_field(&mut self) {
        let fields = PredictField::all();
        let idx = (self.focused.index() + fields.len() - 1) % fields.len();
        self.focused = fields[idx];
    }

    /// Accept numeric input only; everything else is ignored
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.inputs[self.focused.index()].push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.inputs[self.focused.index()].pop();
    }

    pub fn cycle_meal(&mut self) {
        self.meal = self.meal.next();
    }

    fn parse_field(&self, field: PredictField) -> Result<f64, BolusError> {
        let raw = self.inputs[field.index()].trim();
        if raw.is_empty() {
            // Empty fields default to zero, matching the original form handling
            return Ok(0.0);
        }
        raw.parse::<f64>()
            .map_err(|_| BolusError::InvalidField(field.name()))
    }

    /// Build calculation inputs from the raw form text
    pub fn to_inputs(&self) -> Result<BolusInputs, BolusError> {
        Ok(BolusInputs {
            glucose: self.parse_field(PredictField::Glucose)?,
            adj_carbs: f64::from(self.carried_calories),
            carb_rate: self.parse_field(PredictField::CarbRate)?,
            s_iob: self.parse_field(PredictField::ShortIob)?,
            d_iob: self.parse_field(PredictField::LongIob)?,
            weight: self.parse_field(PredictField::Weight)?,
            icr: self.parse_field(PredictField::Icr)?,
            isf: self.parse_field(PredictField::Isf)?,
            meal: self.meal,
        })
    }

    /// Run the calculation and record the outcome for rendering
    pub fn compute(&mut self) {
        self.result = Some(self.to_inputs().and_then(|inputs| inputs.recommend()));
    }
}

impl Default for PredictScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// State of the meals screen: current category, item cursor, quantities
#[derive(Debug, Clone)]
pub struct MealsScreenState {
    pub selection: MealSelection,
    pub selected_index: usize,
}

impl MealsScreenState {
    pub fn new() -> Self {
        Self {
            selection: MealSelection::new(MealCategory::Breakfast),
            selected_index: 0,
        }
    }

    pub fn next_item(&mut self) {
        if self.selected_index + 1 < self.selection.quantities.len() {
            self.selected_index += 1;
        }
    }

    pub fn previous_item(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn next_category(&mut self) {
        self.selection.set_category(self.selection.category.next());
        self.selected_index = 0;
    }

    pub fn previous_category(&mut self) {
        self.selection.set_category(self.selection.category.previous());
        self.selected_index = 0;
    }
}

impl Default for MealsScreenState {
    fn default() -> Self {
        Self::new()
    }
}

/// Full application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub guide: GuidePanelState,
    pub guide_wiring: GuideWiring,
    /// Deadline for the one-shot auto-open, armed at startup
    auto_open_deadline: Option<Instant>,
    pub meals: MealsScreenState,
    pub predict: PredictScreenState,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            current_view: View::Welcome,
            guide: GuidePanelState::new(),
            guide_wiring: GuideWiring::from_config(config),
            auto_open_deadline: None,
            meals: MealsScreenState::new(),
            predict: PredictScreenState::new(),
            should_quit: false,
        }
    }

    /// Arm the one-shot auto-open timer. Only arms when the starting view
    /// is the designated landing view and the panel is still closed.
    pub fn arm_guide_auto_open(&mut self, now: Instant) {
        if let Some(rule) = self.guide_wiring.auto_open {
            if self.current_view == rule.view && !self.guide.is_open {
                self.auto_open_deadline = Some(now + rule.delay);
                tracing::debug!("Guide auto-open armed for {:?}", rule.delay);
            }
        }
    }

    /// Fire the auto-open if its deadline has passed. The guard is
    /// evaluated at fire time: a panel the user already opened stays
    /// untouched, and the timer is consumed either way.
    pub fn poll_guide_auto_open(&mut self, now: Instant) -> bool {
        match self.auto_open_deadline {
            Some(deadline) if now >= deadline => {
                self.auto_open_deadline = None;
                if self.guide.is_open {
                    tracing::debug!("Guide already open at auto-open fire, skipping");
                    false
                } else {
                    tracing::info!("Auto-opening guide panel");
                    self.guide.open();
                    true
                }
            }
            _ => false,
        }
    }

    /// Whether an auto-open is still pending
    pub fn guide_auto_open_armed(&self) -> bool {
        self.auto_open_deadline.is_some()
    }

    pub fn switch_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Carry the meals total into the predict form and jump to Predict
    pub fn send_meals_to_predict(&mut self) {
        self.predict.carried_calories = self.meals.selection.total_calories();
        self.predict.result = None;
        self.current_view = View::Predict;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

/// Application wrapper owning the state
pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}
