use std::io::{self, BufRead, Write};

use anyhow::Context;
use blasting_core::{GameConfig, GameEngine, GameEvent, RandomBoardGenerator, Side};
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use command::{Command, HELP};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(name = "blasting", version, about = "Blasting Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Tiles per row and column, a quarter of them are mines
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIDE, value_parser = clap::value_parser!(Side).range(1..))]
    size: Side,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report commands sent to a finished game as errors
    #[arg(long)]
    strict: bool,

    /// Print every engine event as a JSON line
    #[arg(long)]
    json_events: bool,
}

fn init_logger(args: &Args) -> anyhow::Result<()> {
    let config = ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build();
    TermLogger::init(
        args.verbose.log_level_filter(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Error initializing logger")
}

/// Human readable line for an event, if it deserves one.
fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::GameLost { .. } => Some("You clicked on a mine and now the game is over".into()),
        GameEvent::GameWon => Some("You've won the game".into()),
        GameEvent::BoardReset(snapshot) => Some(format!(
            "New {0}x{0} game with {1} mines",
            snapshot.side, snapshot.mine_count
        )),
        GameEvent::MinesVisibilityChanged { visible: true } => Some("Mines shown".into()),
        GameEvent::MinesVisibilityChanged { visible: false } => Some("Mines hidden".into()),
        GameEvent::TileRevealed { .. } | GameEvent::ScoreChanged { .. } | GameEvent::MarkToggled { .. } => None,
    }
}

struct Session {
    engine: GameEngine,
    json_events: bool,
}

impl Session {
    /// Runs a command, returns whether the board needs to be drawn again.
    fn apply(&mut self, command: Command) -> blasting_core::Result<bool> {
        let redraw = match command {
            Command::Reveal(index) => self.engine.reveal(index)?.has_update(),
            Command::ToggleMark(index) => self.engine.toggle_mark(index)?.has_update(),
            Command::ToggleMines => {
                self.engine.toggle_mines_visible();
                true
            }
            Command::Reset => {
                self.engine.reset()?;
                true
            }
            Command::Resize(side) => {
                self.engine.resize(side)?;
                println!("Next game will be {side}x{side}, type 'n' to start it");
                false
            }
            Command::Help | Command::Quit => false,
        };
        Ok(redraw)
    }

    /// Everything the engine reported since the last command, plus whatever the session triggered in response.
    fn collect_events(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        loop {
            let batch = self.engine.take_events();
            if batch.is_empty() {
                return events;
            }

            // show every mine once the game is lost
            let lost = batch
                .iter()
                .any(|event| matches!(event, GameEvent::GameLost { .. }));
            events.extend(batch);
            if lost && !self.engine.mines_visible() {
                self.engine.toggle_mines_visible();
            }
        }
    }

    /// Single dispatch point for everything the engine reported since the last command.
    fn dispatch_events(&mut self) -> anyhow::Result<()> {
        for event in self.collect_events() {
            log::debug!("{:?}", event);
            if self.json_events {
                println!("{}", serde_json::to_string(&event)?);
            }
            if let Some(line) = describe(&event) {
                println!("{line}");
            }
        }
        Ok(())
    }

    fn print_board(&self) {
        let snapshot = self.engine.snapshot();
        println!("\n{}", render::render(&snapshot));
        println!("{}", render::status_line(&snapshot));
        if self.engine.is_finished() {
            println!("Type 'n' for a new game.");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(&args)?;

    let config = GameConfig::new(args.size)?.with_strict(args.strict);
    let generator = match args.seed {
        Some(seed) => RandomBoardGenerator::from_seed(seed),
        None => RandomBoardGenerator::from_entropy(),
    };
    log::debug!("seed: {:?}", args.seed);

    let mut session = Session {
        engine: GameEngine::with_generator(config, generator)?,
        json_events: args.json_events,
    };

    println!(
        "Blasting Minesweeper {0}x{0} with {1} mines. Type 'h' for help.",
        config.side,
        session.engine.mine_count()
    );
    println!("{HELP}");
    session.print_board();

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let command = match input.trim().parse::<Command>() {
            Ok(command) => command,
            Err(command::ParseError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            command => {
                let redraw = session.apply(command).unwrap_or_else(|e| {
                    println!("{e}");
                    false
                });
                session.dispatch_events()?;
                if redraw {
                    session.print_board();
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blasting_core::{Board, TileIndex};

    fn session(mines: &[TileIndex]) -> Session {
        let board = Board::from_mine_indices(3, mines).unwrap();
        Session {
            engine: GameEngine::from_board(board, RandomBoardGenerator::from_seed(0)).unwrap(),
            json_events: false,
        }
    }

    #[test]
    fn losing_reports_the_mines_becoming_visible() {
        let mut session = session(&[8]);

        assert!(session.apply(Command::Reveal(8)).unwrap());
        assert_eq!(
            session.collect_events(),
            [
                GameEvent::GameLost { index: 8 },
                GameEvent::MinesVisibilityChanged { visible: true },
            ]
        );
        assert!(session.engine.mines_visible());
        assert!(session.collect_events().is_empty());
    }

    #[test]
    fn unchanged_board_is_not_redrawn() {
        let mut session = session(&[8]);

        assert!(session.apply(Command::Reveal(5)).unwrap());
        assert!(!session.apply(Command::Reveal(5)).unwrap());
        assert!(!session.apply(Command::Resize(4)).unwrap());
        assert!(session.apply(Command::ToggleMark(0)).unwrap());
        assert!(!session.apply(Command::Help).unwrap());
    }
}
