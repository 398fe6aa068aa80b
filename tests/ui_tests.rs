// ABOUTME: UI testing for the terminal interface using a headless backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

use glucoguide::app::events::EventHandler;
use glucoguide::app::state::{GuideWiring, View};
use glucoguide::app::App;
use glucoguide::components::LayoutComponent;
use glucoguide::config::AppConfig;

pub struct UITestFramework {
    app: App,
    terminal: Terminal<TestBackend>,
    layout: LayoutComponent,
}

impl UITestFramework {
    pub fn new() -> Self {
        let backend = TestBackend::new(120, 40); // Standard terminal size
        let terminal = Terminal::new(backend).unwrap();
        let app = App::new(&AppConfig::default());
        let layout = LayoutComponent::new();

        Self {
            app,
            terminal,
            layout,
        }
    }

    /// Simulate a key press and process the resulting event
    pub fn press_key(&mut self, key_code: KeyCode) {
        let key_event = KeyEvent::new(key_code, KeyModifiers::NONE);

        if let Some(event) = EventHandler::handle_key_event(key_event, &self.app.state) {
            EventHandler::process_event(event, &mut self.app.state);
        }
    }

    /// Draw a frame and return the rendered buffer as plain text
    pub fn render_to_text(&mut self) -> String {
        let layout = &self.layout;
        let state = &self.app.state;
        self.terminal
            .draw(|frame| layout.render(frame, state))
            .unwrap();

        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    pub fn state(&self) -> &glucoguide::app::AppState {
        &self.app.state
    }

    pub fn state_mut(&mut self) -> &mut glucoguide::app::AppState {
        &mut self.app.state
    }
}

#[test]
fn test_starts_on_welcome_with_guide_closed() {
    let mut ui = UITestFramework::new();
    let screen = ui.render_to_text();

    assert!(screen.contains("Welcome to"));
    assert!(screen.contains("GlucoGuide"));
    // Panel is closed: none of its content is on screen
    assert!(!screen.contains("Hi, Welcome!"));
    assert!(!screen.contains("Next"));
}

#[test]
fn test_toggle_opens_guide_at_first_step() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('?'));
    let screen = ui.render_to_text();

    assert!(screen.contains("Guide"));
    assert!(screen.contains("Hi, Welcome!"));
    // First step: Next only, no Back
    assert!(screen.contains("Next"));
    assert!(!screen.contains("Back"));
}

#[test]
fn test_walkthrough_scenario() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('?'));

    // Next three times -> step 3, both controls visible
    ui.press_key(KeyCode::Right);
    ui.press_key(KeyCode::Right);
    ui.press_key(KeyCode::Right);
    let screen = ui.render_to_text();
    assert!(screen.contains("Step 3:"));
    assert!(screen.contains("Back"));
    assert!(screen.contains("Next"));

    // Back once -> step 2
    ui.press_key(KeyCode::Left);
    let screen = ui.render_to_text();
    assert!(screen.contains("Step 2:"));

    // Close and reopen -> back to the first step, not step 2
    ui.press_key(KeyCode::Char('?'));
    ui.press_key(KeyCode::Char('?'));
    let screen = ui.render_to_text();
    assert!(screen.contains("Hi, Welcome!"));
    assert!(!screen.contains("Step 2:"));
}

#[test]
fn test_last_step_has_no_next() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('?'));
    for _ in 0..10 {
        ui.press_key(KeyCode::Right); // extra presses stay in range
    }
    let screen = ui.render_to_text();

    assert!(screen.contains("Tip:"));
    assert!(screen.contains("Back"));
    assert!(!screen.contains("Next"));
}

#[test]
fn test_double_toggle_leaves_no_residual_panel() {
    let mut ui = UITestFramework::new();
    let before = ui.render_to_text();

    ui.press_key(KeyCode::Char('?'));
    ui.press_key(KeyCode::Char('?'));
    let after = ui.render_to_text();

    assert_eq!(before, after);
    assert!(!after.contains("Hi, Welcome!"));
}

#[test]
fn test_esc_closes_guide_without_quitting() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('?'));
    ui.press_key(KeyCode::Esc);

    assert!(!ui.state().guide.is_open);
    assert!(!ui.state().should_quit);

    let screen = ui.render_to_text();
    assert!(!screen.contains("Hi, Welcome!"));
}

#[test]
fn test_auto_open_renders_panel_after_delay() {
    let mut ui = UITestFramework::new();
    let start = Instant::now();
    ui.state_mut().arm_guide_auto_open(start);

    assert!(!ui.state_mut().poll_guide_auto_open(start + Duration::from_millis(300)));
    let screen = ui.render_to_text();
    assert!(!screen.contains("Hi, Welcome!"));

    assert!(ui.state_mut().poll_guide_auto_open(start + Duration::from_millis(600)));
    let screen = ui.render_to_text();
    assert!(screen.contains("Hi, Welcome!"));
    assert!(!screen.contains("Back"));
}

#[test]
fn test_auto_open_skipped_when_already_open() {
    let mut ui = UITestFramework::new();
    let start = Instant::now();
    ui.state_mut().arm_guide_auto_open(start);

    // User opens manually and advances before the timer fires
    ui.press_key(KeyCode::Char('?'));
    ui.press_key(KeyCode::Right);

    assert!(!ui.state_mut().poll_guide_auto_open(start + Duration::from_secs(2)));
    let screen = ui.render_to_text();
    // Still on the user's step, not reset to the first one
    assert!(screen.contains("Step 1:"));
}

#[test]
fn test_unwired_guide_never_appears() {
    let mut ui = UITestFramework::new();
    ui.state_mut().guide_wiring = GuideWiring::unwired();

    ui.press_key(KeyCode::Char('?'));
    let start = Instant::now();
    ui.state_mut().arm_guide_auto_open(start);
    ui.state_mut().poll_guide_auto_open(start + Duration::from_secs(2));

    let screen = ui.render_to_text();
    assert!(!screen.contains("Hi, Welcome!"));
    assert!(!ui.state().guide.is_open);
}

#[test]
fn test_guide_overlays_other_views() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('3'));
    assert_eq!(ui.state().current_view, View::Meals);

    ui.press_key(KeyCode::Char('?'));
    let screen = ui.render_to_text();
    assert!(screen.contains("Meals"));
    assert!(screen.contains("Hi, Welcome!"));
}

#[test]
fn test_meals_to_predict_flow_renders_total() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('3'));
    ui.press_key(KeyCode::Char('+')); // Oatmeal x1
    ui.press_key(KeyCode::Char('+')); // Oatmeal x2

    let screen = ui.render_to_text();
    assert!(screen.contains("300 kcal"));

    ui.press_key(KeyCode::Enter);
    assert_eq!(ui.state().current_view, View::Predict);
    let screen = ui.render_to_text();
    assert!(screen.contains("Meal calories"));
    assert!(screen.contains("300 kcal"));
}

#[test]
fn test_predict_renders_result_with_safety_checks() {
    let mut ui = UITestFramework::new();
    ui.press_key(KeyCode::Char('4'));

    // Glucose 60 (low), then fill ICR and ISF so the calculation is valid
    ui.press_key(KeyCode::Char('6'));
    ui.press_key(KeyCode::Char('0'));
    for _ in 0..5 {
        ui.press_key(KeyCode::Down);
    }
    ui.press_key(KeyCode::Char('1'));
    ui.press_key(KeyCode::Char('0')); // ICR = 10
    ui.press_key(KeyCode::Down);
    ui.press_key(KeyCode::Char('3'));
    ui.press_key(KeyCode::Char('5')); // ISF = 35
    ui.press_key(KeyCode::Enter);

    let screen = ui.render_to_text();
    assert!(screen.contains("0.00 U"));
    assert!(screen.contains("treat the low first"));
}
