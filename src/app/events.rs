// ABOUTME: Event handling system for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::app::{state::View, AppState};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Quit,
    SwitchView(View),
    NextView,
    // Guide panel events
    ToggleGuide,
    CloseGuide,
    GuideBack,
    GuideNext,
    // Meals screen events
    MealsNextItem,
    MealsPreviousItem,
    MealsNextCategory,
    MealsPreviousCategory,
    MealsIncreaseQty,
    MealsDecreaseQty,
    MealsSendToPredict,
    // Predict screen events
    PredictNextField,
    PredictPreviousField,
    PredictInputChar(char),
    PredictBackspace,
    PredictCycleMeal,
    PredictCompute,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key event into an app event, honoring the guide wiring.
    /// Unwired guide keys simply fall through to normal handling.
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(AppEvent::Quit);
        }

        let wiring = &state.guide_wiring;

        // Guide toggle works from any view, when wired
        if wiring.toggle == Some(key_event.code) {
            return Some(AppEvent::ToggleGuide);
        }

        // While the panel is open, its own keys take priority; everything
        // else still reaches the underlying screen.
        if state.guide.is_open {
            if wiring.close == Some(key_event.code) {
                return Some(AppEvent::CloseGuide);
            }
            match key_event.code {
                KeyCode::Left => return Some(AppEvent::GuideBack),
                KeyCode::Right => return Some(AppEvent::GuideNext),
                _ => {}
            }
        }

        // The predict form claims character input before the global keys,
        // otherwise typing digits would switch views
        if state.current_view == View::Predict {
            if let Some(event) = Self::handle_predict_keys(key_event) {
                return Some(event);
            }
        }

        // Global keys
        match key_event.code {
            KeyCode::Char('q') => return Some(AppEvent::Quit),
            KeyCode::Esc if !state.guide.is_open => return Some(AppEvent::Quit),
            KeyCode::Tab => return Some(AppEvent::NextView),
            KeyCode::Char('1') => return Some(AppEvent::SwitchView(View::Welcome)),
            KeyCode::Char('2') => return Some(AppEvent::SwitchView(View::Instructions)),
            KeyCode::Char('3') => return Some(AppEvent::SwitchView(View::Meals)),
            KeyCode::Char('4') => return Some(AppEvent::SwitchView(View::Predict)),
            _ => {}
        }

        match state.current_view {
            View::Meals => Self::handle_meals_keys(key_event),
            View::Welcome | View::Instructions | View::Predict => None,
        }
    }

    fn handle_meals_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::MealsNextItem),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::MealsPreviousItem),
            KeyCode::Char('l') => Some(AppEvent::MealsNextCategory),
            KeyCode::Char('h') => Some(AppEvent::MealsPreviousCategory),
            KeyCode::Char('+') | KeyCode::Char(' ') => Some(AppEvent::MealsIncreaseQty),
            KeyCode::Char('-') => Some(AppEvent::MealsDecreaseQty),
            KeyCode::Enter => Some(AppEvent::MealsSendToPredict),
            _ => None,
        }
    }

    fn handle_predict_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Down => Some(AppEvent::PredictNextField),
            KeyCode::Up => Some(AppEvent::PredictPreviousField),
            KeyCode::Char('m') => Some(AppEvent::PredictCycleMeal),
            KeyCode::Backspace => Some(AppEvent::PredictBackspace),
            KeyCode::Enter => Some(AppEvent::PredictCompute),
            KeyCode::Char(c) => Some(AppEvent::PredictInputChar(c)),
            _ => None,
        }
    }

    /// Apply an app event to the state
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => {
                state.should_quit = true;
            }
            AppEvent::SwitchView(view) => {
                state.switch_view(view);
            }
            AppEvent::NextView => {
                state.switch_view(state.current_view.next());
            }
            AppEvent::ToggleGuide => {
                state.guide.toggle();
                info!(
                    "Guide panel toggled, open={} step={}",
                    state.guide.is_open, state.guide.current_step
                );
            }
            AppEvent::CloseGuide => {
                state.guide.close();
            }
            AppEvent::GuideBack => {
                state.guide.go_back();
            }
            AppEvent::GuideNext => {
                state.guide.go_next();
            }
            AppEvent::MealsNextItem => {
                state.meals.next_item();
            }
            AppEvent::MealsPreviousItem => {
                state.meals.previous_item();
            }
            AppEvent::MealsNextCategory => {
                state.meals.next_category();
            }
            AppEvent::MealsPreviousCategory => {
                state.meals.previous_category();
            }
            AppEvent::MealsIncreaseQty => {
                let idx = state.meals.selected_index;
                state.meals.selection.increment(idx);
            }
            AppEvent::MealsDecreaseQty => {
                let idx = state.meals.selected_index;
                state.meals.selection.decrement(idx);
            }
            AppEvent::MealsSendToPredict => {
                info!(
                    "Carrying {} kcal from meals to predict",
                    state.meals.selection.total_calories()
                );
                state.send_meals_to_predict();
            }
            AppEvent::PredictNextField => {
                state.predict.next_field();
            }
            AppEvent::PredictPreviousField => {
                state.predict.previous_field();
            }
            AppEvent::PredictInputChar(c) => {
                state.predict.input_char(c);
            }
            AppEvent::PredictBackspace => {
                state.predict.backspace();
            }
            AppEvent::PredictCycleMeal => {
                state.predict.cycle_meal();
            }
            AppEvent::PredictCompute => {
                state.predict.compute();
                info!("Bolus computed: {:?}", state.predict.result);
            }
        }
    }
}
