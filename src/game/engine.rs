use anyhow::{ensure, Result};

use super::{
    config::GameConfig,
    grid::Grid,
    state::{CollisionKind, GameOutcome, GameState, Position, Snake},
};

/// Random draws attempted before falling back to a full-grid scan
const SEED_SAMPLE_ATTEMPTS: u32 = 64;

/// Classification of the cell the head is about to enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextCell {
    Free,
    Seed,
    Collision(CollisionKind),
}

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate the seed this step
    pub ate_seed: bool,
    /// Kind of collision if one occurred
    pub collision: Option<CollisionKind>,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the game has reached a terminal state
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that owns the grid and all state mutation
pub struct GameEngine {
    grid: Grid,
    initial_length: usize,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create an engine for a grid. Fails when the initial snake would not
    /// fit inside the grid with at least one cell left for the seed.
    pub fn new(grid: Grid, config: &GameConfig) -> Result<Self> {
        let initial_length = config.initial_snake_length.max(3);

        let head_x = i32::from(grid.width()) / 2 + 1;
        let tail_x = head_x - (initial_length as i32 - 1);
        ensure!(
            tail_x >= 0
                && head_x < i32::from(grid.width())
                && u64::from(grid.cell_count()) > initial_length as u64,
            "grid {}x{} too small for a snake of length {}",
            grid.width(),
            grid.height(),
            initial_length
        );

        Ok(Self {
            grid,
            initial_length,
            rng: rand::thread_rng(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Build a fresh game: centered snake moving right, seed on a free cell
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::spawn_centered(&self.grid, self.initial_length);

        // Construction guaranteed a free cell beyond the spawn
        let seed = self
            .place_seed(&snake)
            .unwrap_or_else(|| Position::new(0, 0));

        GameState::new(snake, seed)
    }

    /// Classify the cell the snake is about to enter. Walls take precedence
    /// over everything; the self check runs against the pre-move body, so
    /// stepping onto the cell the tail is about to vacate still counts as a
    /// collision (the classic conservative rule).
    pub fn classify(&self, state: &GameState, next_head: Position) -> NextCell {
        if !self.grid.contains(next_head) {
            return NextCell::Collision(CollisionKind::Wall);
        }
        if state.snake.occupies(next_head) {
            return NextCell::Collision(CollisionKind::SelfCollision);
        }
        if next_head == state.seed {
            return NextCell::Seed;
        }
        NextCell::Free
    }

    /// Advance the game by one tick
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.alive || state.paused {
            return StepResult {
                terminated: !state.alive,
                info: StepInfo::default(),
            };
        }

        // Consume the buffered direction; an exact 180-degree reversal is
        // dropped silently, perpendicular turns and re-presses go through
        if let Some(direction) = state.pending_direction.take() {
            if !state.snake.direction.is_opposite(direction) {
                state.snake.direction = direction;
            }
        }

        let next_head = state.snake.next_head();

        match self.classify(state, next_head) {
            NextCell::Collision(kind) => {
                state.alive = false;
                state.outcome = Some(GameOutcome::Crashed(kind));
                state.steps += 1;

                StepResult {
                    terminated: true,
                    info: StepInfo {
                        ate_seed: false,
                        collision: Some(kind),
                    },
                }
            }
            NextCell::Seed => {
                state.snake.advance(next_head, true);
                state.score += 1;
                state.steps += 1;

                match self.place_seed(&state.snake) {
                    Some(seed) => {
                        state.seed = seed;
                        StepResult {
                            terminated: false,
                            info: StepInfo {
                                ate_seed: true,
                                collision: None,
                            },
                        }
                    }
                    // Every cell is snake: the board is beaten
                    None => {
                        state.alive = false;
                        state.outcome = Some(GameOutcome::Won);

                        StepResult {
                            terminated: true,
                            info: StepInfo {
                                ate_seed: true,
                                collision: None,
                            },
                        }
                    }
                }
            }
            NextCell::Free => {
                state.snake.advance(next_head, false);
                state.steps += 1;

                StepResult {
                    terminated: false,
                    info: StepInfo::default(),
                }
            }
        }
    }

    /// Pick a free cell for the next seed: a bounded number of random draws,
    /// then a deterministic scan. Returns None only when the snake covers
    /// the whole grid.
    fn place_seed(&mut self, snake: &Snake) -> Option<Position> {
        for _ in 0..SEED_SAMPLE_ATTEMPTS {
            let pos = self.grid.random_position(&mut self.rng);
            if !snake.occupies(pos) {
                return Some(pos);
            }
        }

        for y in 0..i32::from(self.grid.height()) {
            for x in 0..i32::from(self.grid.width()) {
                let pos = Position::new(x, y);
                if !snake.occupies(pos) {
                    return Some(pos);
                }
            }
        }

        None
    }
}
