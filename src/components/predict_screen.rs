// ABOUTME: Predict screen: bolus input form on the left, result with
// safety checks on the right

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{PredictField, PredictScreenState};
use crate::models::BolusRecommendation;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

pub struct PredictScreenComponent;

impl PredictScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &PredictScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Predict ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        self.render_form(frame, columns[0], state);
        self.render_result(frame, columns[1], state);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &PredictScreenState) {
        let mut lines = Vec::new();

        for field in PredictField::all() {
            let is_focused = *field == state.focused;
            let value = &state.inputs[field.index()];

            let marker = if is_focused { "▶ " } else { "  " };
            let label_style = if is_focused {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(SOFT_WHITE)
            };
            // Trailing cursor bar on the focused field
            let value_text = if is_focused {
                format!("{}│", value)
            } else if value.is_empty() {
                "-".to_string()
            } else {
                value.clone()
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(SELECTION_GREEN)),
                Span::styled(format!("{:<18}", field.label()), label_style),
                Span::styled(value_text, Style::default().fg(SOFT_WHITE)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Meal: ", Style::default().fg(SOFT_WHITE)),
            Span::styled(
                state.meal.label(),
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (m to change)", Style::default().fg(MUTED_GRAY)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Meal calories: ", Style::default().fg(SOFT_WHITE)),
            Span::styled(
                format!("{} kcal", state.carried_calories),
                Style::default().fg(GOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  ↑↓", Style::default().fg(GOLD)),
            Span::styled(" field  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Enter", Style::default().fg(GOLD)),
            Span::styled(" predict", Style::default().fg(MUTED_GRAY)),
        ]));

        let form = Paragraph::new(lines);
        frame.render_widget(form, area);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect, state: &PredictScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MUTED_GRAY))
            .style(Style::default().bg(DARK_BG))
            .title(" Result ")
            .title_style(Style::default().fg(GOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match &state.result {
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Fill the form and press Enter",
                    Style::default().fg(MUTED_GRAY),
                )),
            ],
            Some(Err(error)) => vec![
                Line::from(""),
                Line::from(Span::styled("✗ Cannot predict", Style::default().fg(ERROR_RED))),
                Line::from(""),
                Line::from(Span::styled(error.to_string(), Style::default().fg(SOFT_WHITE))),
            ],
            Some(Ok(recommendation)) => Self::recommendation_lines(recommendation),
        };

        let text = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(text, inner);
    }

    fn recommendation_lines(recommendation: &BolusRecommendation) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Recommended bolus",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(Span::styled(
                format!("{:.2} U", recommendation.units),
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
        ];

        if !recommendation.flags.is_empty() {
            lines.push(Line::from(""));
            for flag in &recommendation.flags {
                lines.push(Line::from(vec![
                    Span::styled("⚠ ", Style::default().fg(WARNING_YELLOW)),
                    Span::styled(flag.message(), Style::default().fg(WARNING_YELLOW)),
                ]));
            }
        }

        lines
    }
}

impl Default for PredictScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
