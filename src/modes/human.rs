use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::colors::ColorScheme;
use crate::game::{GameConfig, GameEngine, GameOutcome, GameState, Grid, TickDriver};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Render cadence; game ticks are decoupled from it by the TickDriver
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Rows reserved around the field: header, footer, field border
const CHROME_ROWS: u16 = 8;
/// Columns reserved around the field by the centering layout and border
const CHROME_COLS: u16 = 2;

pub struct HumanMode {
    config: GameConfig,
    engine: GameEngine,
    state: GameState,
    colors: ColorScheme,
    driver: TickDriver,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    /// Set up a game on the configured grid. When no fixed grid is given the
    /// real dimensions are fitted from the terminal once `run` starts.
    pub fn new(config: GameConfig) -> Result<Self> {
        let grid = match (config.grid_width, config.grid_height) {
            (Some(w), Some(h)) => Grid::new(w, h)?,
            _ => Grid::new(20, 20)?,
        };
        let mut engine = GameEngine::new(grid, &config)?;
        let state = engine.reset();
        let colors = ColorScheme::random(&mut rand::thread_rng());
        let driver = TickDriver::from_hz(config.tick_hz, Instant::now());

        Ok(Self {
            config,
            engine,
            state,
            colors,
            driver,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Fit the field to the real viewport before taking over the screen
        if let Ok((cols, rows)) = crossterm::terminal::size() {
            self.handle_resize(cols, rows);
        }

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                // Terminal events: keys and viewport resizes
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Frame: poll the tick driver, then draw
                _ = frame_timer.tick() => {
                    self.metrics.update();

                    if self.state.alive && self.driver.due(Instant::now()) {
                        self.update_game();
                    }

                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.state,
                            self.engine.grid(),
                            &self.colors,
                            &self.metrics,
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Steer(direction) => self.state.queue_direction(direction),
                    KeyAction::TogglePause => self.state.toggle_pause(),
                    KeyAction::ShuffleColors => {
                        self.colors = ColorScheme::random(&mut rand::thread_rng());
                    }
                    KeyAction::Restart => self.reset_game(),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Resize(cols, rows) => self.handle_resize(cols, rows),
            _ => {}
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.step(&mut self.state);

        if result.terminated && !self.state.alive {
            let won = self.state.outcome == Some(GameOutcome::Won);
            self.metrics.on_game_over(self.state.score, won);
        }
    }

    /// Throw the whole game away and start over: fresh state, fresh seed,
    /// fresh colors, fresh tick driver.
    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.colors = ColorScheme::random(&mut rand::thread_rng());
        self.driver = TickDriver::from_hz(self.config.tick_hz, Instant::now());
        self.metrics.on_game_start();
    }

    /// A resize destroys and recreates the game on a grid laid out for the
    /// new viewport. A viewport too small to hold a field is ignored and the
    /// current game keeps its grid.
    fn handle_resize(&mut self, cols: u16, rows: u16) {
        let Ok(grid) = self.layout_grid(cols, rows) else {
            return;
        };
        let Ok(engine) = GameEngine::new(grid, &self.config) else {
            return;
        };

        self.engine = engine;
        self.reset_game();
    }

    fn layout_grid(&self, cols: u16, rows: u16) -> Result<Grid> {
        if let (Some(w), Some(h)) = (self.config.grid_width, self.config.grid_height) {
            return Grid::new(w, h);
        }

        // The field gets the center 80% of the width, minus the chrome
        let avail_w = (cols / 10 * 8).saturating_sub(CHROME_COLS);
        let avail_h = rows.saturating_sub(CHROME_ROWS);
        Grid::from_viewport(avail_w, avail_h, self.config.cell_width, self.config.cell_height)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::small()).unwrap();
        assert!(mode.state.alive);
        assert_eq!(mode.state.score, 0);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();
        mode.state.score = 10;
        mode.state.alive = false;

        mode.reset_game();

        assert_eq!(mode.state.score, 0);
        assert!(mode.state.alive);
    }

    #[test]
    fn test_resize_recreates_the_game() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        mode.state.score = 4;
        mode.state.queue_direction(Direction::Up);

        mode.handle_resize(120, 40);

        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.pending_direction, None);
        assert!(mode.state.alive);
        // 80% of 120 cols minus chrome, in 2-column cells, minus the margin
        assert_eq!(mode.engine.grid().width(), 46);
        assert_eq!(mode.engine.grid().height(), 31);
    }

    #[test]
    fn test_tiny_viewport_resize_is_ignored() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        let grid_before = *mode.engine.grid();

        mode.handle_resize(4, 3);

        assert_eq!(*mode.engine.grid(), grid_before);
    }
}
