use super::direction::Direction;
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step away in a direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The growing entity controlled by the player
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Spawn a horizontal snake centered on the grid, head at the rightmost
    /// cell, moving right.
    pub fn spawn_centered(grid: &Grid, length: usize) -> Self {
        let cx = i32::from(grid.width()) / 2;
        let cy = i32::from(grid.height()) / 2;
        let head = Position::new(cx + 1, cy);

        let body = (0..length as i32)
            .map(|i| Position::new(head.x - i, head.y))
            .collect();

        Self {
            body,
            direction: Direction::Right,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// The cell the head would enter on the next step
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Check against the whole body, tail cell included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance one cell: append the new head, and drop the tail unless the
    /// snake is growing this step.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Kind of fatal collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// The next head cell lies outside the grid
    Wall,
    /// The next head cell lies on the snake's own body
    SelfCollision,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Crashed(CollisionKind),
    /// The snake filled the grid and no seed could be placed
    Won,
}

/// Complete game state, owned and mutated exclusively by the engine.
/// Input handling only ever touches `pending_direction` and `paused`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub seed: Position,
    /// Buffered direction change, consumed by the next tick; the last write
    /// before a tick wins
    pub pending_direction: Option<Direction>,
    pub paused: bool,
    pub alive: bool,
    pub outcome: Option<GameOutcome>,
    pub score: u32,
    pub steps: u32,
}

impl GameState {
    pub fn new(snake: Snake, seed: Position) -> Self {
        Self {
            snake,
            seed,
            pending_direction: None,
            paused: false,
            alive: true,
            outcome: None,
            score: 0,
            steps: 0,
        }
    }

    /// Buffer a direction change for the next tick. Dead states ignore input.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.alive {
            self.pending_direction = Some(direction);
        }
    }

    /// Flip between running and paused; a finished game stays finished
    pub fn toggle_pause(&mut self) {
        if self.alive {
            self.paused = !self.paused;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: u16, h: u16) -> Grid {
        Grid::new(w, h).unwrap()
    }

    #[test]
    fn test_position_step() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.step(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.step(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.step(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.step(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_spawn_centered() {
        let snake = Snake::spawn_centered(&grid(10, 10), 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.body[1], Position::new(5, 5));
        assert_eq!(snake.body[2], Position::new(4, 5));
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_advance_slide_and_grow() {
        let mut snake = Snake::spawn_centered(&grid(10, 10), 3);

        snake.advance(snake.next_head(), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(7, 5));
        assert!(!snake.occupies(Position::new(4, 5))); // tail vacated

        snake.advance(snake.next_head(), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(8, 5));
        assert!(snake.occupies(Position::new(5, 5))); // tail kept
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake = Snake::spawn_centered(&grid(10, 10), 3);
        assert!(snake.occupies(Position::new(6, 5))); // head
        assert!(snake.occupies(Position::new(4, 5))); // tail
        assert!(!snake.occupies(Position::new(7, 5)));
    }

    #[test]
    fn test_dead_state_ignores_input() {
        let snake = Snake::spawn_centered(&grid(10, 10), 3);
        let mut state = GameState::new(snake, Position::new(0, 0));
        state.alive = false;

        state.queue_direction(Direction::Up);
        assert_eq!(state.pending_direction, None);

        state.toggle_pause();
        assert!(!state.paused);
    }

    #[test]
    fn test_pause_toggle_is_an_involution() {
        let snake = Snake::spawn_centered(&grid(10, 10), 3);
        let mut state = GameState::new(snake, Position::new(0, 0));

        state.toggle_pause();
        assert!(state.paused);
        state.toggle_pause();
        assert!(!state.paused);
    }
}
