use std::io;

use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use super::braille::BrailleCanvas;
use super::overlay::render_pause_panel;
use crate::config::keys::key_label;
use crate::config::settings::ArenaSettings;
use crate::game::draw::{Canvas, Draw, Rgb};
use crate::game::geometry::{Point, Rect as ArenaRect};
use crate::game::state::{Contestant, Match, MatchState, Screen};
use crate::players::Side;

// Bottom row holds the controls hint
const UI_FOOTER_ROWS: u16 = 1;

/// Ratatui terminal presenting finished frames
pub struct TerminalScreen<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalScreen<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Screen for TerminalScreen<B> {
    fn present(&mut self, game: &Match) -> io::Result<()> {
        self.terminal.draw(|f| render(f, game))?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Text queued for drawing on top of the braille layer, in field cells
struct Label {
    text: String,
    col: i32,
    row: i32,
    color: Rgb,
}

/// Canvas that rasterises arena coordinates onto braille dots
struct TerminalCanvas {
    braille: BrailleCanvas,
    // Braille pixels per arena pixel, same on both axes
    scale: f32,
    background: Rgb,
    labels: Vec<Label>,
}

impl TerminalCanvas {
    fn new(cols: u16, rows: u16, scale: f32) -> Self {
        Self {
            braille: BrailleCanvas::new(cols as usize, rows as usize),
            scale,
            background: Rgb(0, 0, 0),
            labels: Vec::new(),
        }
    }

    fn to_pixel(&self, point: Point) -> (i64, i64) {
        (
            (point.x as f32 * self.scale).floor() as i64,
            (point.y as f32 * self.scale).floor() as i64,
        )
    }
}

impl Canvas for TerminalCanvas {
    fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.braille.clear();
        self.labels.clear();
    }

    fn fill_rect(&mut self, rect: ArenaRect, color: Rgb) {
        let (x0, y0) = self.to_pixel(Point::new(rect.left(), rect.top()));
        let (x1, y1) = self.to_pixel(Point::new(rect.right(), rect.bottom()));
        // Small bodies must stay visible at any scale
        let width = (x1 - x0).max(1);
        let height = (y1 - y0).max(1);
        self.braille.fill_rect(x0, y0, width, height, color);
    }

    fn draw_line(&mut self, a: Point, b: Point, color: Rgb) {
        let from = self.to_pixel(a);
        let to = self.to_pixel(b);
        self.braille.draw_line(from, to, color);
    }

    fn draw_text(&mut self, text: &str, center: Point, color: Rgb) {
        let (px, py) = self.to_pixel(center);
        let len = text.chars().count() as i32;
        self.labels.push(Label {
            text: text.to_string(),
            col: (px / 2) as i32 - len / 2,
            row: (py / 4) as i32,
            color,
        });
    }
}

/// Largest centered field (inside a one-cell border) that keeps the arena's
/// aspect ratio, with its braille scale. None when the terminal is too small.
fn fit_field(area: Rect, arena: ArenaSettings) -> Option<(Rect, f32)> {
    let max_cols = area.width.checked_sub(2)?;
    let max_rows = area.height.checked_sub(2)?;
    if max_cols == 0 || max_rows == 0 {
        return None;
    }

    let scale_x = (max_cols as f32 * 2.0) / arena.width as f32;
    let scale_y = (max_rows as f32 * 4.0) / arena.height as f32;
    let scale = scale_x.min(scale_y);

    let cols = ((arena.width as f32 * scale / 2.0).ceil() as u16).clamp(1, max_cols);
    let rows = ((arena.height as f32 * scale / 4.0).ceil() as u16).clamp(1, max_rows);

    let field = Rect {
        x: area.x + 1 + (max_cols - cols) / 2,
        y: area.y + 1 + (max_rows - rows) / 2,
        width: cols,
        height: rows,
    };
    Some((field, scale))
}

pub fn render(frame: &mut Frame, game: &Match) {
    let area = frame.area();
    let settings = game.settings();
    let background = to_color(settings.palette.background);

    let bg = Block::default().style(Style::default().bg(background));
    frame.render_widget(bg, area);

    let play_area = Rect {
        height: area.height.saturating_sub(UI_FOOTER_ROWS),
        ..area
    };
    let hint_area = Rect {
        y: area.y + play_area.height,
        height: area.height - play_area.height,
        ..area
    };

    let Some((field, scale)) = fit_field(play_area, settings.arena) else {
        let warning = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return;
    };

    let mut canvas = TerminalCanvas::new(field.width, field.height, scale);
    game.draw(&mut canvas);

    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let border_area = Rect {
        x: field.x - 1,
        y: field.y - 1,
        width: field.width + 2,
        height: field.height + 2,
    };
    frame.render_widget(border, border_area);

    render_braille_canvas(frame, &canvas, field);
    render_labels(frame, &canvas, field);
    draw_controls(frame, game, hint_area);

    if game.state() == MatchState::Paused {
        render_pause_panel(frame, &settings.controls, play_area);
    }
}

fn render_braille_canvas(frame: &mut Frame, canvas: &TerminalCanvas, field: Rect) {
    let background = to_color(canvas.background);

    for y in 0..canvas.braille.height() {
        // Consecutive cells of one colour share a span
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_color = None;

        for x in 0..canvas.braille.width() {
            let color = canvas.braille.color_at(x, y);
            if color != run_color && !run.is_empty() {
                spans.push(styled_run(std::mem::take(&mut run), run_color, background));
            }
            run_color = color;
            run.push(canvas.braille.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(styled_run(run, run_color, background));
        }

        let row_area = Rect {
            x: field.x,
            y: field.y + y as u16,
            width: field.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn styled_run(text: String, color: Option<Rgb>, background: Color) -> Span<'static> {
    let fg = color.map(to_color).unwrap_or(background);
    Span::styled(text, Style::default().fg(fg).bg(background))
}

fn render_labels(frame: &mut Frame, canvas: &TerminalCanvas, field: Rect) {
    let background = to_color(canvas.background);

    for label in &canvas.labels {
        let len = label.text.chars().count() as i32;
        let width = len.min(field.width as i32);
        if width == 0 || label.row < 0 || label.row >= field.height as i32 {
            continue;
        }
        let col = label.col.clamp(0, field.width as i32 - width);

        let label_area = Rect {
            x: field.x + col as u16,
            y: field.y + label.row as u16,
            width: width as u16,
            height: 1,
        };
        let paragraph = Paragraph::new(label.text.as_str())
            .style(Style::default().fg(to_color(label.color)).bg(background));
        frame.render_widget(paragraph, label_area);
    }
}

fn draw_controls(frame: &mut Frame, game: &Match, area: Rect) {
    let controls = &game.settings().controls;
    let mut hints = Vec::new();

    for side in Side::both() {
        if let Contestant::Human(human) = game.contestant(side) {
            let keys = human.player.controls;
            hints.push(format!(
                "{}/{}: {}",
                key_label(keys.up),
                key_label(keys.down),
                side.name()
            ));
        }
    }
    hints.push(format!("{}: pause", key_label(controls.pause)));
    hints.push(format!("{}: restart", key_label(controls.restart)));
    hints.push(format!("{}: quit", key_label(controls.quit)));

    let paragraph = Paragraph::new(hints.join("  "))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
