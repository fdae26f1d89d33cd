use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::colors::ColorScheme;
use crate::game::{GameOutcome, GameState, Grid, Position};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        grid: &Grid,
        colors: &ColorScheme,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the playing field horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.alive {
            let field = self.render_field(state, grid, colors);
            frame.render_widget(field, game_area);
        } else {
            let game_over = self.render_game_over(state);
            frame.render_widget(game_over, game_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_field<'a>(
        &self,
        state: &GameState,
        grid: &Grid,
        colors: &ColorScheme,
    ) -> Paragraph<'a> {
        let head = state.snake.head();
        let mut lines = Vec::new();

        for y in 0..i32::from(grid.height()) {
            let mut spans = Vec::new();

            for x in 0..i32::from(grid.width()) {
                let pos = Position::new(x, y);

                let cell = if pos == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(colors.snake_head)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("□ ", Style::default().fg(colors.snake))
                } else if pos == state.seed {
                    Span::styled(
                        "● ",
                        Style::default().fg(colors.seed).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = if state.paused { " Paused " } else { " Seed Snake " };

        Paragraph::new(lines)
            .style(Style::default().bg(colors.wallpaper))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(colors.border))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats<'a>(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'a> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over<'a>(&self, state: &GameState) -> Paragraph<'a> {
        let (headline, headline_color) = match state.outcome {
            Some(GameOutcome::Won) => ("YOU WON", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default()
                    .fg(headline_color)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
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
                .border_style(Style::default().fg(headline_color)),
        )
    }

    fn render_controls<'a>(&self, _area: Rect) -> Paragraph<'a> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("C", Style::default().fg(Color::Magenta)),
            Span::raw(" new colors | "),
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
