mod entity;
mod game_state;
mod session;
mod settings;
mod types;

pub use entity::Snake;
pub use game_state::{FOOD_REWARD, GameState, INITIAL_SNAKE_LENGTH, StepOutcome};
pub use session::{FrameSnapshot, GameObserver, SessionCommand, SnakeSession, run_session};
pub use settings::{Difficulty, SessionSettings};
pub use types::{ClockPhase, Direction, FieldSize, Point};
