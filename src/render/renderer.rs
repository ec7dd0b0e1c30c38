use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as Axis, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Coordinate, Direction, GameState, GameStatus, StopReason, Tile, orient};

/// Two-column glyph for a snake tile. The second column carries a line to the
/// right when the tile connects that way, so neighbors join up.
pub fn tile_glyph(tile: Option<Tile>) -> &'static str {
    use Direction::*;

    let Some(tile) = tile else {
        return "■ ";
    };

    match tile {
        Tile::Head(Right) => "●━",
        Tile::Head(_) => "● ",
        Tile::Tail(Right) => "╺━",
        Tile::Tail(Left) => "╸ ",
        Tile::Tail(Up) => "╹ ",
        Tile::Tail(Down) => "╻ ",
        Tile::Body(a, b) => match (a, b) {
            (Left, Right) | (Right, Left) => "━━",
            (Up, Down) | (Down, Up) => "┃ ",
            (Left, Up) | (Up, Left) => "┛ ",
            (Left, Down) | (Down, Left) => "┓ ",
            (Right, Up) | (Up, Right) => "┗━",
            (Right, Down) | (Down, Right) => "┏━",
            _ => "■ ",
        },
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let chunks = Layout::default()
            .direction(Axis::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state);
        frame.render_widget(stats, chunks[0]);

        let game_area = Layout::default()
            .direction(Axis::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match (state.status, state.last_stop) {
            (GameStatus::Stopped, Some(reason)) => {
                frame.render_widget(self.render_game_over(state, reason), game_area)
            }
            (GameStatus::Stopped, None) => frame.render_widget(self.render_welcome(), game_area),
            _ => frame.render_widget(self.render_grid(state), game_area),
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let snake = &state.snake.body;
        let head_index = snake.len().saturating_sub(1);
        let segments: HashMap<Coordinate, Span> = snake
            .iter()
            .zip(orient(snake))
            .enumerate()
            .map(|(i, (pos, tile))| {
                let style = if i == head_index {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                (*pos, Span::styled(tile_glyph(tile), style))
            })
            .collect();

        let size = state.grid.size() as i32;
        let mut lines = Vec::with_capacity(state.grid.size());

        for row in 0..size {
            let mut spans = Vec::with_capacity(state.grid.size());

            for col in 0..size {
                let pos = Coordinate::new(row, col);

                // The snake is drawn over any food sharing its cell
                let cell = if let Some(span) = segments.get(&pos) {
                    span.clone()
                } else if state.food.find_index_at(pos).is_some() {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = match state.status {
            GameStatus::Paused => " Snake (paused) ",
            _ => " Snake ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState) -> Paragraph<'_> {
        let (status, status_color) = match state.status {
            GameStatus::Started => ("RUNNING", Color::Green),
            GameStatus::Paused => ("PAUSED", Color::Yellow),
            GameStatus::Stopped => ("STOPPED", Color::Red),
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.current().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.high().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled(status, Style::default().fg(status_color)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_welcome(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("The board wraps around. Don't bite yourself."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self, state: &GameState, reason: StopReason) -> Paragraph<'_> {
        let cause = match reason {
            StopReason::Collision => "You ran into yourself",
            StopReason::User => "Game stopped",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.current().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.high().to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(" start | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" pause | "),
            Span::styled("X", Style::default().fg(Color::Red)),
            Span::raw(" stop | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
