use serde::{Deserialize, Serialize};

use crate::config::{ConfigStore, Validate};
use crate::log;

/// Persistent scalar store for the high score. `get` must default to 0 when
/// the backing value is absent or unreadable; GameOver aside, the engine has
/// no failure modes, so `set` errors are logged by implementations rather
/// than propagated into the simulation.
pub trait HighScoreStore {
    fn get(&self) -> u32;
    fn set(&mut self, value: u32);
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
struct HighScoreRecord {
    high_score: u32,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

pub struct YamlHighScoreStore {
    store: ConfigStore<HighScoreRecord>,
}

impl YamlHighScoreStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            store: ConfigStore::new(path),
        }
    }
}

impl HighScoreStore for YamlHighScoreStore {
    fn get(&self) -> u32 {
        match self.store.load() {
            Ok(record) => record.high_score,
            Err(err) => {
                log!("High score unreadable, starting from 0: {}", err);
                0
            }
        }
    }

    fn set(&mut self, value: u32) {
        let result = self.store.store(&HighScoreRecord { high_score: value });
        if let Err(err) = result {
            log!("Failed to persist high score {}: {}", value, err);
        }
    }
}

#[derive(Default)]
pub struct InMemoryHighScoreStore {
    value: u32,
}

impl InMemoryHighScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn get(&self) -> u32 {
        self.value
    }

    fn set(&mut self, value: u32) {
        self.value = value;
    }
}
