use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::log;
use crate::score_store::HighScoreStore;
use crate::session_rng::SessionRng;

use super::game_state::{GameState, StepOutcome};
use super::settings::{Difficulty, SessionSettings};
use super::types::{ClockPhase, Direction, FieldSize, Point};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub snake: Vec<Point>,
    pub food: Point,
    pub field_size: FieldSize,
    pub score: u32,
    pub high_score: u32,
}

/// Host-side sink for simulation output: a frame after every state change
/// and a terminal notification when the game ends. How the host surfaces
/// either (canvas, terminal, dialog) is its own business.
pub trait GameObserver {
    fn frame(&mut self, frame: &FrameSnapshot);
    fn game_over(&mut self, final_score: u32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    TogglePause,
    SetDifficulty(Difficulty),
    SetDirection(Direction),
    Quit,
}

/// Owns the game state and the lifecycle state machine. All mutation goes
/// through methods here; `tick` is directly callable so tests can step the
/// simulation without a running clock.
pub struct SnakeSession<O, S> {
    state: GameState,
    phase: ClockPhase,
    settings: SessionSettings,
    rng: SessionRng,
    observer: O,
    score_store: S,
    high_score: u32,
}

impl<O: GameObserver, S: HighScoreStore> SnakeSession<O, S> {
    pub fn new(
        settings: SessionSettings,
        mut rng: SessionRng,
        observer: O,
        score_store: S,
    ) -> Self {
        let high_score = score_store.get();
        let state = GameState::new(settings.field_size, &mut rng);
        let mut session = Self {
            state,
            phase: ClockPhase::Stopped,
            settings,
            rng,
            observer,
            score_store,
            high_score,
        };
        // One frame at load, before any game starts
        session.emit_frame();
        session
    }

    /// Reinitializes the board and begins ticking. A no-op unless the
    /// session is Stopped, so it cannot restart a paused game. Returns
    /// whether the transition happened so the clock only reschedules then.
    pub fn start(&mut self) -> bool {
        if self.phase != ClockPhase::Stopped {
            return false;
        }
        self.state = GameState::new(self.settings.field_size, &mut self.rng);
        self.phase = ClockPhase::Running;
        log!("Game started (seed {})", self.rng.seed());
        self.emit_frame();
        true
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            ClockPhase::Stopped => ClockPhase::Stopped,
            ClockPhase::Running => {
                log!("Game paused");
                ClockPhase::Paused
            }
            ClockPhase::Paused => {
                log!("Game resumed");
                ClockPhase::Running
            }
        };
    }

    /// Swaps the tick period. Returns whether it changed so the clock can
    /// reschedule. Never touches the run/pause phase.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        let interval = difficulty.tick_interval();
        if interval == self.settings.tick_interval {
            return false;
        }
        self.settings.tick_interval = interval;
        log!("Tick interval set to {} ms", interval.as_millis());
        true
    }

    /// Routes directional input (keyboard or buttons) to the pending
    /// direction. Discarded while Stopped so a finished game's snake is
    /// never steered.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase == ClockPhase::Stopped {
            return;
        }
        self.state.set_direction(direction);
    }

    /// One clock firing. Suppressed unless Running.
    pub fn tick(&mut self) {
        if self.phase != ClockPhase::Running {
            return;
        }

        let outcome = self.state.update(&mut self.rng);

        if self.state.score() > self.high_score {
            self.high_score = self.state.score();
            self.score_store.set(self.high_score);
        }

        match outcome {
            StepOutcome::Moved | StepOutcome::Ate => self.emit_frame(),
            StepOutcome::Died => {
                self.phase = ClockPhase::Stopped;
                self.observer.game_over(self.state.score());
            }
        }
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn tick_interval(&self) -> Duration {
        self.settings.tick_interval
    }

    fn emit_frame(&mut self) {
        let frame = FrameSnapshot {
            snake: self.state.snake.segments().copied().collect(),
            food: self.state.food,
            field_size: self.state.field_size,
            score: self.state.score(),
            high_score: self.high_score,
        };
        self.observer.frame(&frame);
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

/// Drives the session from a real clock: one timer fires ticks, commands
/// interleave on the same task. Replacing the ticker on start or on an
/// interval change drops the old one, which cancels its pending tick.
pub async fn run_session<O, S>(
    mut session: SnakeSession<O, S>,
    mut commands: mpsc::UnboundedReceiver<SessionCommand>,
) where
    O: GameObserver,
    S: HighScoreStore,
{
    let mut ticker = new_ticker(session.tick_interval());

    loop {
        tokio::select! {
            _ = ticker.tick() => session.tick(),
            command = commands.recv() => match command {
                None | Some(SessionCommand::Quit) => break,
                Some(SessionCommand::Start) => {
                    if session.start() {
                        ticker = new_ticker(session.tick_interval());
                    }
                }
                Some(SessionCommand::TogglePause) => session.toggle_pause(),
                Some(SessionCommand::SetDifficulty(difficulty)) => {
                    if session.set_difficulty(difficulty) {
                        ticker = new_ticker(session.tick_interval());
                    }
                }
                Some(SessionCommand::SetDirection(direction)) => {
                    session.set_direction(direction);
                }
            },
        }
    }

    log!("Session closed. High score: {}", session.high_score());
}

fn new_ticker(period: Duration) -> Interval {
    // First fire after one full period, like a setInterval-style timer
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
