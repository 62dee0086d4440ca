use crate::log;
use crate::session_rng::SessionRng;

use super::entity::Snake;
use super::types::{Direction, FieldSize, Point};

pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const FOOD_REWARD: u32 = 10;

const FOOD_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate,
    Died,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    pub field_size: FieldSize,
    score: u32,
    game_over: bool,
}

impl GameState {
    pub fn new(field_size: FieldSize, rng: &mut SessionRng) -> Self {
        let center = Point::new(field_size.width / 2, field_size.height / 2);
        let snake = Snake::new(center, INITIAL_SNAKE_LENGTH, Direction::Right, &field_size);
        let mut state = Self {
            snake,
            food: center,
            field_size,
            score: 0,
            game_over: false,
        };
        state.food = state
            .place_food(rng)
            .expect("Fresh board should have a free cell");
        state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Input Controller rule: a request opposite to the committed direction
    /// (the one used by the last tick) is dropped; anything else overwrites
    /// the pending direction, so rapid presses collapse to the last accepted.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }
        if direction.is_opposite(&self.snake.direction) {
            return;
        }
        self.snake.pending_direction = Some(direction);
    }

    /// One simulation tick. The self-collision check runs before anything is
    /// mutated, so a head landing on both food and body is death, and a dead
    /// state is left exactly as it was at detection time.
    pub fn update(&mut self, rng: &mut SessionRng) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Died;
        }

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let next_head = self
            .field_size
            .neighbor(self.snake.head(), self.snake.direction);

        if self.snake.occupies(&next_head) {
            self.game_over = true;
            log!(
                "Snake hit itself at ({}, {}). Final score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            return StepOutcome::Died;
        }

        self.snake.push_head(next_head);

        if next_head == self.food {
            self.score += FOOD_REWARD;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            match self.place_food(rng) {
                Some(food) => self.food = food,
                None => {
                    // Snake fills the board, nowhere left to put food
                    self.game_over = true;
                    log!("Board is full. Final score: {}", self.score);
                    return StepOutcome::Died;
                }
            }
            StepOutcome::Ate
        } else {
            self.snake.pop_tail();
            StepOutcome::Moved
        }
    }

    /// Uniform draw with a bounded number of retries, then a deterministic
    /// pick from the remaining free cells so placement always terminates.
    fn place_food(&self, rng: &mut SessionRng) -> Option<Point> {
        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            let x = rng.random_range(0..self.field_size.width);
            let y = rng.random_range(0..self.field_size.height);
            let pos = Point::new(x, y);

            if !self.snake.occupies(&pos) {
                log!("Food spawned at ({}, {})", pos.x, pos.y);
                return Some(pos);
            }
        }

        let free: Vec<Point> = (0..self.field_size.height)
            .flat_map(|y| (0..self.field_size.width).map(move |x| Point::new(x, y)))
            .filter(|pos| !self.snake.occupies(pos))
            .collect();

        if free.is_empty() {
            return None;
        }
        Some(free[rng.random_range(0..free.len())])
    }

    #[cfg(test)]
    pub fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    pub fn set_snake(&mut self, segments: &[Point], direction: Direction) {
        // push_head prepends, so feed in reverse to keep head-first order
        let mut rebuilt = Snake::new(segments[0], 1, direction, &self.field_size);
        rebuilt.pop_tail();
        for segment in segments.iter().rev() {
            rebuilt.push_head(*segment);
        }
        self.snake = rebuilt;
    }
}
