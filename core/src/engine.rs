use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> WonGame | LostGame (the first reveal ends the game)
/// - InProgress -> WonGame | LostGame
/// - any -> NotStarted, only through `reset`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    WonGame,
    LostGame,
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::WonGame | Self::LostGame)
    }
}

/// Owns the board of the current game and every piece of mutable game state.
///
/// Commands run to completion, flood fill included, before returning. Whatever they change is also queued as
/// [`GameEvent`]s, which the presentation side collects through [`GameEngine::drain_events`].
#[derive(Clone, Debug)]
pub struct GameEngine<G = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    revealed_count: TileCount,
    flagged_count: TileCount,
    score: Score,
    phase: GamePhase,
    mines_visible: bool,
    triggered_mine: Option<TileIndex>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Starts a game on an unseeded random board.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_generator(config, RandomBoardGenerator::from_entropy())
    }
}

impl<G: BoardGenerator> GameEngine<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = generator.generate(config.side, config.mine_count())?;
        Ok(Self::assemble(config, generator, board))
    }

    /// Starts a game on a prepared board; later resets go through `generator`.
    ///
    /// The board must not have been played on, the engine starts counting from zero.
    pub fn from_board(board: Board, generator: G) -> Result<Self> {
        if !board.is_fresh() {
            return Err(GameError::InvalidConfiguration(
                "board already has revealed or flagged tiles",
            ));
        }
        let config = GameConfig {
            side: board.side(),
            strict: false,
        };
        Ok(Self::assemble(config, generator, board))
    }

    fn assemble(config: GameConfig, generator: G, board: Board) -> Self {
        Self {
            config,
            generator,
            board,
            revealed_count: 0,
            flagged_count: 0,
            score: 0,
            phase: GamePhase::NotStarted,
            mines_visible: false,
            triggered_mine: None,
            events: Vec::new(),
        }
    }

    /// Discards the current game and starts a new one with the pending board size.
    ///
    /// The new board is generated before anything is dropped, so a failure leaves the current game untouched.
    pub fn reset(&mut self) -> Result<()> {
        let side = self.config.side;
        let board = self.generator.generate(side, mine_count_for(side))?;

        self.board = board;
        self.revealed_count = 0;
        self.flagged_count = 0;
        self.score = 0;
        self.phase = GamePhase::NotStarted;
        self.mines_visible = false;
        self.triggered_mine = None;
        log::debug!(
            "Reset to a {}x{} board with {} mines",
            side,
            side,
            self.board.mine_count()
        );

        let snapshot = self.snapshot();
        self.events.push(GameEvent::BoardReset(snapshot));
        Ok(())
    }
}

impl<G> GameEngine<G> {
    /// Turns strict mode on or off, see [`GameConfig::strict`].
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn revealed_count(&self) -> TileCount {
        self.revealed_count
    }

    /// Side of the board currently in play.
    pub fn board_size(&self) -> Side {
        self.board.side()
    }

    /// Side the next `reset` will use.
    pub fn pending_size(&self) -> Side {
        self.config.side
    }

    pub fn mine_count(&self) -> TileCount {
        self.board.mine_count()
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn mines_visible(&self) -> bool {
        self.mines_visible
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<TileIndex> {
        self.triggered_mine
    }

    pub fn tile_state(&self, index: TileIndex) -> Result<TileView> {
        Ok(self.board.tile(index)?.view(self.mines_visible))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_engine(self)
    }

    /// Events not yet drained.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Changes the board size for the next game, the current board is left alone.
    pub fn resize(&mut self, side: Side) -> Result<()> {
        self.config.side = validate_side(side)?;
        log::debug!("Next game will use a {}x{} board", side, side);
        Ok(())
    }

    pub fn toggle_mines_visible(&mut self) -> bool {
        self.mines_visible = !self.mines_visible;
        self.events.push(GameEvent::MinesVisibilityChanged {
            visible: self.mines_visible,
        });
        self.mines_visible
    }

    pub fn toggle_mark(&mut self, index: TileIndex) -> Result<MarkOutcome> {
        let index = self.board.validate_index(index)?;
        if self.phase.is_finished() {
            return self.ignored(MarkOutcome::NoChange);
        }

        let tile = self.board.tile_mut(index);
        if tile.is_visited() {
            return Ok(MarkOutcome::NoChange);
        }

        let mark = tile.toggle_mark();
        match mark {
            Mark::Flagged => self.flagged_count += 1,
            Mark::None => self.flagged_count -= 1,
        }
        self.events.push(GameEvent::MarkToggled { index, mark });
        Ok(MarkOutcome::Changed)
    }

    /// Reveals a tile, flooding outwards from tiles without adjacent mines.
    ///
    /// Visited and flagged tiles are left alone. A mine ends the game without being marked visited and without
    /// touching the score.
    pub fn reveal(&mut self, index: TileIndex) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let index = self.board.validate_index(index)?;
        if self.phase.is_finished() {
            return self.ignored(NoChange);
        }

        let tile = &self.board[index];
        if tile.is_visited() || tile.mark().is_flagged() {
            return Ok(NoChange);
        }

        if tile.is_mine() {
            self.triggered_mine = Some(index);
            self.end_game(false);
            self.events.push(GameEvent::GameLost { index });
            return Ok(HitMine);
        }

        let score_before = self.score;
        let won = self.flood_reveal(index);
        if self.score != score_before {
            self.events.push(GameEvent::ScoreChanged { score: self.score });
        }

        if won {
            self.end_game(true);
            self.events.push(GameEvent::GameWon);
            Ok(Won)
        } else {
            self.mark_started();
            Ok(Revealed)
        }
    }

    /// Work-list flood fill from a safe, unvisited tile. Every tile is visited at most once; returns whether the
    /// last safe tile got revealed.
    fn flood_reveal(&mut self, start: TileIndex) -> bool {
        let mut to_visit = vec![start];

        while let Some(index) = to_visit.pop() {
            let tile = &self.board[index];
            if tile.is_visited() || tile.is_mine() || tile.mark().is_flagged() {
                log::trace!("Skipping tile {}", index);
                continue;
            }

            let adjacent_mines = tile.adjacent_mines();
            self.board.tile_mut(index).set_visited();
            self.revealed_count += 1;
            self.events.push(GameEvent::TileRevealed {
                index,
                adjacent_mines,
            });
            log::trace!("Revealed tile {}, adjacent mines: {}", index, adjacent_mines);

            if adjacent_mines == 0 {
                self.score += 1;
                let board = &self.board;
                to_visit.extend(
                    board[index]
                        .neighbors()
                        .iter()
                        .copied()
                        .filter(|&neighbor| !board[neighbor].is_visited()),
                );
            } else {
                self.score += Score::from(adjacent_mines);
            }

            if self.revealed_count == self.board.safe_tile_count() {
                return true;
            }
        }

        false
    }

    fn mark_started(&mut self) {
        if matches!(self.phase, GamePhase::NotStarted) {
            log::debug!("Game started");
            self.phase = GamePhase::InProgress;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = if won {
            GamePhase::WonGame
        } else {
            GamePhase::LostGame
        };
        log::debug!(
            "Game ended as {:?}, score: {}, revealed: {}",
            self.phase,
            self.score,
            self.revealed_count
        );
    }

    /// Outcome for a command the current phase does not accept.
    fn ignored<T>(&self, outcome: T) -> Result<T> {
        if self.config.strict {
            Err(GameError::IllegalTransition(self.phase))
        } else {
            log::debug!("Ignoring command while the game is {:?}", self.phase);
            Ok(outcome)
        }
    }
}
