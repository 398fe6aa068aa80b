// ABOUTME: Welcome screen, the landing view of the application

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);

pub struct WelcomeScreenComponent;

impl WelcomeScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Welcome ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(4), // Title + tagline
                Constraint::Min(8),    // Getting started
                Constraint::Length(2), // Hints
            ])
            .split(inner);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Welcome to ", Style::default().fg(SOFT_WHITE)),
                Span::styled(
                    "GlucoGuide",
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Insulin bolus guidance with meal-based calorie estimates",
                Style::default()
                    .fg(MUTED_GRAY)
                    .add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, layout[0]);

        let steps = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("1.", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" Read the ", Style::default().fg(SOFT_WHITE)),
                Span::styled("Instructions", Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(" page carefully", Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(vec![
                Span::styled("2.", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" Estimate calories on the ", Style::default().fg(SOFT_WHITE)),
                Span::styled("Meals", Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(" page if needed", Style::default().fg(SOFT_WHITE)),
            ]),
            Line::from(vec![
                Span::styled("3.", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" Fill the ", Style::default().fg(SOFT_WHITE)),
                Span::styled("Predict", Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(" form and get your dose", Style::default().fg(SOFT_WHITE)),
            ]),
        ];
        let steps_widget = Paragraph::new(steps).alignment(Alignment::Center);
        frame.render_widget(steps_widget, layout[1]);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(MUTED_GRAY)),
            Span::styled("?", Style::default().fg(GOLD)),
            Span::styled(" for the guide, ", Style::default().fg(MUTED_GRAY)),
            Span::styled("1-4", Style::default().fg(GOLD)),
            Span::styled(" or ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Tab", Style::default().fg(GOLD)),
            Span::styled(" to switch pages", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[2]);
    }
}

impl Default for WelcomeScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
