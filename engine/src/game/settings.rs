use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::FieldSize;

/// Named speed levels the host exposes to the player. Each maps to a fixed
/// tick period; lower is faster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Normal => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(50),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SessionSettings {
    pub field_size: FieldSize,
    pub tick_interval: Duration,
}

impl SessionSettings {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            field_size: FieldSize::default(),
            tick_interval: difficulty.tick_interval(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.field_size.width < 4 || self.field_size.width > 100 {
            return Err("Field width must be between 4 and 100".to_string());
        }
        if self.field_size.height < 4 || self.field_size.height > 100 {
            return Err("Field height must be between 4 and 100".to_string());
        }
        let interval_ms = self.tick_interval.as_millis();
        if !(50..=5000).contains(&interval_ms) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}
