// Pause panel drawn over the frozen field

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::keys::key_label;
use crate::config::settings::Controls;

const PANEL_TITLE: &str = " duopong ";

/// Text of the panel: a headline and the keys that leave the pause
fn panel_lines(controls: &Controls) -> Vec<Line<'static>> {
    vec![
        Line::styled("PAUSED", Style::default().add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::from(format!(
            "{} resume  |  {} quit",
            key_label(controls.pause),
            key_label(controls.quit)
        )),
    ]
}

/// Panel rectangle centred in `area`, with two blank columns inside each border
fn panel_area(lines: &[Line], area: Rect) -> Rect {
    let text_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = text_width.saturating_add(6);
    let height = (lines.len() as u16).saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    panel
}

pub fn render_pause_panel(frame: &mut Frame, controls: &Controls, area: Rect) {
    let lines = panel_lines(controls);
    let panel = panel_area(&lines, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(PANEL_TITLE)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(20, 20, 20)));

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        panel,
    );
}
