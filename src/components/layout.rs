// ABOUTME: Main layout component dispatching to the current view and
// drawing the guide panel overlay last

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{
    GuidePanelComponent, InstructionsScreenComponent, MealsScreenComponent,
    PredictScreenComponent, WelcomeScreenComponent,
};
use crate::app::{state::View, AppState};

// Color palette from TUI style guide
const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct LayoutComponent {
    welcome: WelcomeScreenComponent,
    instructions: InstructionsScreenComponent,
    meals: MealsScreenComponent,
    predict: PredictScreenComponent,
    guide: GuidePanelComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            welcome: WelcomeScreenComponent::new(),
            instructions: InstructionsScreenComponent::new(),
            meals: MealsScreenComponent::new(),
            predict: PredictScreenComponent::new(),
            guide: GuidePanelComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();

        let background = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(background, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Current view
                Constraint::Length(1), // Menu bar
            ])
            .split(area);

        match state.current_view {
            View::Welcome => self.welcome.render(frame, layout[0]),
            View::Instructions => self.instructions.render(frame, layout[0]),
            View::Meals => self.meals.render(frame, layout[0], &state.meals),
            View::Predict => self.predict.render(frame, layout[0], &state.predict),
        }

        self.render_menu_bar(frame, layout[1], state);

        // Overlay last so it sits on top of whatever view is active
        self.guide.render(frame, layout[0], &state.guide);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![Span::styled(" ", Style::default())];

        for (idx, view) in View::all().iter().enumerate() {
            let style = if *view == state.current_view {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            spans.push(Span::styled(format!("[{}] {}", idx + 1, view.label()), style));
            spans.push(Span::styled("  ", Style::default()));
        }

        spans.push(Span::styled("│ ", Style::default().fg(SUBDUED_BORDER)));
        if state.guide_wiring.toggle.is_some() {
            spans.push(Span::styled("? ", Style::default().fg(GOLD)));
            spans.push(Span::styled("guide  ", Style::default().fg(MUTED_GRAY)));
        }
        spans.push(Span::styled("q ", Style::default().fg(GOLD)));
        spans.push(Span::styled("quit", Style::default().fg(MUTED_GRAY)));

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(DARK_BG));
        frame.render_widget(bar, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
