use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use snake_engine::game::{
    Difficulty, Direction, FrameSnapshot, GameObserver, SessionCommand, SessionSettings,
    SnakeSession, run_session,
};
use snake_engine::{ConfigStore, SessionRng, Validate, YamlHighScoreStore, log, logger};

#[derive(Parser)]
#[command(name = "snake_app")]
struct Args {
    /// YAML config file; missing file means defaults
    #[arg(long, default_value = "snake.yaml")]
    config: String,

    /// Fixed RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct AppConfig {
    difficulty: Difficulty,
    high_score_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            high_score_file: "snake_high_score.yaml".to_string(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

/// Text stand-in for the canvas renderer.
struct TerminalRenderer;

impl GameObserver for TerminalRenderer {
    fn frame(&mut self, frame: &FrameSnapshot) {
        let mut grid = vec![vec!['.'; frame.field_size.width]; frame.field_size.height];
        grid[frame.food.y][frame.food.x] = 'o';
        for (i, segment) in frame.snake.iter().enumerate() {
            grid[segment.y][segment.x] = if i == 0 { '@' } else { '#' };
        }

        println!("Score: {}  High score: {}", frame.score, frame.high_score);
        for row in grid {
            println!("{}", row.into_iter().collect::<String>());
        }
    }

    fn game_over(&mut self, final_score: u32) {
        println!("Game over! Final score: {}", final_score);
        println!("Type 'start' to play again, 'quit' to exit.");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config: AppConfig = ConfigStore::new(&args.config).load()?;
    let settings = SessionSettings::from_difficulty(config.difficulty);
    settings.validate()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let score_store = YamlHighScoreStore::new(&config.high_score_file);
    let session = SnakeSession::new(settings, rng, TerminalRenderer, score_store);

    print_help();

    let (tx, rx) = mpsc::unbounded_channel();
    let input_task = tokio::spawn(read_commands(tx));
    run_session(session, rx).await;
    input_task.abort();

    Ok(())
}

fn print_help() {
    println!("Commands: start | pause | difficulty <easy|normal|hard> | quit");
    println!("Steer with w/a/s/d or up/left/down/right.");
}

async fn read_commands(tx: mpsc::UnboundedSender<SessionCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let Some(command) = parse_command(line.trim()) else {
            log!("Unrecognized command: {}", line.trim());
            continue;
        };
        if tx.send(command).is_err() || command == SessionCommand::Quit {
            return;
        }
    }

    // stdin closed
    let _ = tx.send(SessionCommand::Quit);
}

fn parse_command(line: &str) -> Option<SessionCommand> {
    match line {
        "start" => Some(SessionCommand::Start),
        "pause" | "p" => Some(SessionCommand::TogglePause),
        "quit" | "q" => Some(SessionCommand::Quit),
        "w" | "up" => Some(SessionCommand::SetDirection(Direction::Up)),
        "s" | "down" => Some(SessionCommand::SetDirection(Direction::Down)),
        "a" | "left" => Some(SessionCommand::SetDirection(Direction::Left)),
        "d" | "right" => Some(SessionCommand::SetDirection(Direction::Right)),
        _ => {
            let level = line.strip_prefix("difficulty ")?;
            let difficulty = match level.trim() {
                "easy" => Difficulty::Easy,
                "normal" => Difficulty::Normal,
                "hard" => Difficulty::Hard,
                _ => return None,
            };
            Some(SessionCommand::SetDifficulty(difficulty))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!(
            parse_command("w"),
            Some(SessionCommand::SetDirection(Direction::Up))
        );
        assert_eq!(
            parse_command("left"),
            Some(SessionCommand::SetDirection(Direction::Left))
        );
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(
            parse_command("difficulty hard"),
            Some(SessionCommand::SetDifficulty(Difficulty::Hard))
        );
        assert_eq!(parse_command("difficulty impossible"), None);
    }

    #[test]
    fn test_parse_rejects_noise() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("banana"), None);
    }
}
