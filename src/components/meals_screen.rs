// ABOUTME: Meals screen with category tabs, item quantities, and calorie total

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::MealsScreenState;
use crate::models::{MealCatalog, MealCategory};

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct MealsScreenComponent;

impl MealsScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &MealsScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Meals ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Category tabs
                Constraint::Length(1), // Spacer
                Constraint::Min(6),    // Item list
                Constraint::Length(1), // Total
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        self.render_categories(frame, layout[0], state.selection.category);
        self.render_items(frame, layout[2], state);

        let total = Paragraph::new(Line::from(vec![
            Span::styled("Total: ", Style::default().fg(SOFT_WHITE)),
            Span::styled(
                format!("{} kcal", state.selection.total_calories()),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(total, layout[3]);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(GOLD)),
            Span::styled(" select  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("+/-", Style::default().fg(GOLD)),
            Span::styled(" quantity  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("h/l", Style::default().fg(GOLD)),
            Span::styled(" category  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Enter", Style::default().fg(GOLD)),
            Span::styled(" send to Predict", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hints, layout[4]);
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect, current: MealCategory) {
        let mut spans = Vec::new();
        for (idx, category) in MealCategory::all().iter().enumerate() {
            let style = if *category == current {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            };
            spans.push(Span::styled(category.label(), style));
            if idx < MealCategory::all().len() - 1 {
                spans.push(Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(tabs, area);
    }

    fn render_items(&self, frame: &mut Frame, area: Rect, state: &MealsScreenState) {
        let items: Vec<ListItem> = MealCatalog::items(state.selection.category)
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let is_selected = idx == state.selected_index;
                let qty = state.selection.quantities.get(idx).copied().unwrap_or(0);

                let marker = if is_selected { "▶ " } else { "  " };
                let name_style = if is_selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                let qty_span = if qty > 0 {
                    Span::styled(format!("  x{}", qty), Style::default().fg(SELECTION_GREEN))
                } else {
                    Span::styled(String::new(), Style::default())
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(SELECTION_GREEN)),
                    Span::styled(item.name, name_style),
                    Span::styled(
                        format!(" ({} kcal)", item.calories),
                        Style::default().fg(MUTED_GRAY),
                    ),
                    qty_span,
                ]))
            })
            .collect();

        let list = List::new(items).style(Style::default().bg(PANEL_BG));
        frame.render_widget(list, area);
    }
}

impl Default for MealsScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}
