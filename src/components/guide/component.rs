// ABOUTME: Renderer for the onboarding guide panel overlay
// Anchors a small panel to the bottom-right corner of the frame

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::state::GuidePanelState;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 12;

/// The guide panel overlay component
pub struct GuidePanelComponent;

impl GuidePanelComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the panel into the bottom-right corner of `area`.
    /// Does nothing when the panel is closed.
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &GuidePanelState) {
        if !state.is_open {
            return;
        }

        let panel_area = self.anchored_rect(area);
        frame.render_widget(Clear, panel_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Guide ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Progress dots
                Constraint::Min(3),    // Step message
                Constraint::Length(1), // Controls row
            ])
            .split(inner);

        self.render_progress(frame, layout[0], state);
        self.render_message(frame, layout[1], state);
        self.render_controls(frame, layout[2], state);
    }

    /// Progress dots, one per step, highlighting the current one
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &GuidePanelState) {
        let mut spans = Vec::new();
        for idx in 0..GuidePanelState::total_steps() {
            let (icon, style) = if idx < state.current_step {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == state.current_step {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, state: &GuidePanelState) {
        let message = Paragraph::new(state.current_text())
            .style(Style::default().fg(SOFT_WHITE))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, area);
    }

    /// Controls row: Back only past the first step, Next only before the last
    fn render_controls(&self, frame: &mut Frame, area: Rect, state: &GuidePanelState) {
        let mut spans = Vec::new();

        if state.can_go_back() {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled("←", Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(" Back", Style::default().fg(MUTED_GRAY)));
        }

        if state.can_go_back() && state.can_go_next() {
            spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        }

        if state.can_go_next() {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled("→", Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(" Next", Style::default().fg(MUTED_GRAY)));
        }

        let controls = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
        frame.render_widget(controls, area);
    }

    /// Bottom-right anchored rect, shrunk to fit small terminals
    fn anchored_rect(&self, area: Rect) -> Rect {
        let width = PANEL_WIDTH.min(area.width);
        let height = PANEL_HEIGHT.min(area.height);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height)])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(width)])
            .split(vertical[1])[1]
    }
}

impl Default for GuidePanelComponent {
    fn default() -> Self {
        Self::new()
    }
}
