pub mod config;
pub mod game;
pub mod logger;
pub mod score_store;
pub mod session_rng;

pub use config::{ConfigStore, Validate};
pub use score_store::{HighScoreStore, InMemoryHighScoreStore, YamlHighScoreStore};
pub use session_rng::SessionRng;
