// ABOUTME: Instructions screen explaining the prediction workflow and inputs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);

pub struct InstructionsScreenComponent;

impl InstructionsScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Instructions ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ))
        };
        let bullet = |text: &'static str| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(GOLD)),
                Span::styled(text, Style::default().fg(SOFT_WHITE)),
            ])
        };

        let lines = vec![
            Line::from(""),
            section("What you will need"),
            bullet("Current glucose level in mg/dL"),
            bullet("Carb absorption rate in grams per hour"),
            bullet("Insulin on board, short and long acting (units)"),
            bullet("Your ICR (grams of carbs covered per unit)"),
            bullet("Your ISF (mg/dL drop per unit)"),
            bullet("Body weight in kg"),
            Line::from(""),
            section("Workflow"),
            bullet("Use the Meals page to estimate calories for your meal"),
            bullet("Send the total to the Predict page with Enter"),
            bullet("Fill the remaining fields and press Enter to predict"),
            bullet("Review the safety checks shown beside the result"),
            Line::from(""),
            Line::from(Span::styled(
                "The recommendation is a guide, not medical advice. Always follow your care team's plan.",
                Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
            )),
        ];

        let text = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(text, inner);
    }
}

impl Default for InstructionsScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
