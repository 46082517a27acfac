//! A game session: one board, its seekers and the hidden cell, played round
//! after round.

use hideseek_core::{Board, BoardError, Cell, Direction};
use hideseek_paths::{Distance, FeedbackLabel, PathCostEngine, feedback_label};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{Controller, GameConfig, SeekerAi};
use crate::error::{ConfigError, GameError};
use crate::game_log::{GameLog, LogStyle};
use crate::phase::{Outcome, Phase, PhaseTag};
use crate::seeker::{Candidates, Seeker};

/// What a seeker does on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(Direction),
    /// Block the seeker's cell and the one to its right.
    PlaceBarrier,
    /// Pass.
    Wait,
}

/// Report of a completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub seeker: usize,
    pub action: Action,
    /// Where the seeker stands after the action.
    pub pos: Cell,
    /// Hot/cold label for the new position.
    pub feedback: FeedbackLabel,
    /// The action had no effect (a move off the board, or a barrier that
    /// could not be built) but still used up the turn.
    pub wasted: bool,
    /// Set when this turn ended the round.
    pub outcome: Option<Outcome>,
}

/// Owns everything about a game: board, engine, seekers, the hidden cell,
/// the current phase and turn, and the message log.
pub struct GameSession {
    config: GameConfig,
    board: Board,
    engine: PathCostEngine,
    seekers: Vec<Seeker>,
    hider: Option<Cell>,
    phase: Phase,
    turn: usize,
    turns_taken: u32,
    rng: SmallRng,
    pub log: GameLog,
}

impl GameSession {
    /// Validate `config` and create a session waiting in [`Phase::Menu`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let board = Board::new(config.rows, config.cols).map_err(|_| ConfigError::InvalidSize {
            rows: config.rows,
            cols: config.cols,
        })?;
        let engine = PathCostEngine::for_board(&board);
        let seekers = config
            .seekers
            .iter()
            .map(|s| Seeker::new(s, config.barriers_per_seeker))
            .collect();
        Ok(Self {
            config,
            board,
            engine,
            seekers,
            hider: None,
            phase: Phase::Menu,
            turn: 0,
            turns_taken: 0,
            rng,
            log: GameLog::new(),
        })
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seekers(&self) -> &[Seeker] {
        &self.seekers
    }

    /// Index of the seeker whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn current(&self) -> &Seeker {
        &self.seekers[self.turn]
    }

    /// The hidden cell, once chosen.
    pub fn hider(&self) -> Option<Cell> {
        self.hider
    }

    /// Turns left before the hider escapes.
    pub fn turns_left(&self) -> u32 {
        self.config.step_budget.saturating_sub(self.turns_taken)
    }

    // -------------------------------------------------------------------
    // Round flow
    // -------------------------------------------------------------------

    /// Leave the menu and set up a fresh round.
    ///
    /// Obstacles, seeker positions, barrier allowances and the step budget
    /// are all reset. Unless a human hides, the hider is placed at random
    /// and seeking starts right away.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        self.phase.expect(PhaseTag::Menu)?;

        self.board.clear_obstacles();
        let barriers = self.config.barriers_per_seeker;
        for s in &mut self.seekers {
            s.reset(barriers);
        }
        self.hider = None;
        self.turn = 0;
        self.turns_taken = 0;
        self.log.clear();

        if self.config.human_hides {
            self.phase.transition(Phase::Hiding)?;
            self.log.log_styled("pick a hiding spot", LogStyle::Notable);
            log::info!("round started, waiting for the hider");
            return Ok(());
        }

        let spot = self.random_hiding_spot()?;
        self.begin_seeking(spot)
    }

    /// Hide at `cell`, ending the hiding phase.
    pub fn hide_at(&mut self, cell: Cell) -> Result<(), GameError> {
        self.phase.expect(PhaseTag::Hiding)?;
        self.board.check(cell)?;
        if !self.is_free_spot(cell) {
            return Err(GameError::InvalidHidingSpot(cell));
        }
        self.begin_seeking(cell)
    }

    /// Go back to the menu after a round has ended.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.phase.transition(Phase::Menu)
    }

    fn is_free_spot(&self, cell: Cell) -> bool {
        self.board.is_open(cell) && self.seekers.iter().all(|s| s.pos != cell)
    }

    fn random_hiding_spot(&mut self) -> Result<Cell, GameError> {
        let free: Vec<Cell> = self
            .board
            .open_cells()
            .filter(|&c| self.is_free_spot(c))
            .collect();
        if free.is_empty() {
            return Err(GameError::NoHidingSpot);
        }
        Ok(free[self.rng.random_range(0..free.len())])
    }

    fn begin_seeking(&mut self, spot: Cell) -> Result<(), GameError> {
        self.phase.transition(Phase::Seeking)?;
        self.hider = Some(spot);
        log::info!("hider placed at {spot}");

        for i in 0..self.seekers.len() {
            if !self.seekers[i].is_deductive() {
                continue;
            }
            let pos = self.seekers[i].pos;
            let mut candidates = Candidates::new(&self.board, pos);
            let label = self.feedback_for(i)?;
            candidates.observe(&mut self.engine, &self.board, pos, label)?;
            self.seekers[i].candidates = Some(candidates);
        }

        let name = self.current().name.clone();
        self.log.log_styled(&format!("{name} starts seeking"), LogStyle::Notable);
        Ok(())
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Shortest distance from seeker `i` to the hidden cell.
    pub fn distance_to_hider(&mut self, i: usize) -> Result<Distance, GameError> {
        let Some(hider) = self.hider else {
            return Err(GameError::WrongPhase {
                expected: PhaseTag::Seeking,
                actual: self.phase.tag(),
            });
        };
        let pos = self.seekers.get(i).ok_or(GameError::UnknownSeeker(i))?.pos;
        Ok(self.engine.shortest_distance(&self.board, pos, hider)?)
    }

    fn feedback_for(&mut self, i: usize) -> Result<FeedbackLabel, GameError> {
        Ok(feedback_label(self.distance_to_hider(i)?))
    }

    /// Hot/cold label for the seeker whose turn it is.
    pub fn feedback(&mut self) -> Result<FeedbackLabel, GameError> {
        self.feedback_for(self.turn)
    }

    /// After the round, the shortest route from the current seeker to the
    /// hidden cell, if there is one.
    pub fn route_hint(&mut self) -> Result<Option<Vec<Cell>>, GameError> {
        self.phase.expect(PhaseTag::GameOver)?;
        let Some(hider) = self.hider else {
            return Ok(None);
        };
        let pos = self.current().pos;
        Ok(self.engine.shortest_path(&self.board, pos, hider)?)
    }

    // -------------------------------------------------------------------
    // Turns
    // -------------------------------------------------------------------

    /// Perform `action` for the current seeker, which must be human.
    ///
    /// Moving into a blocked cell is rejected and the turn stays with the
    /// same seeker. Bumping the edge of the board, or asking for a barrier
    /// that cannot be built, wastes the turn.
    pub fn act(&mut self, action: Action) -> Result<Turn, GameError> {
        self.phase.expect(PhaseTag::Seeking)?;
        if self.current().is_computer() {
            return Err(GameError::NotYourTurn { seeker: self.turn });
        }
        self.apply(action)
    }

    /// Let the current seeker, which must be a computer, take its turn.
    pub fn computer_turn(&mut self) -> Result<Turn, GameError> {
        self.phase.expect(PhaseTag::Seeking)?;
        let i = self.turn;
        let Controller::Computer(ai) = self.seekers[i].controller else {
            return Err(GameError::NotYourTurn { seeker: i });
        };

        let goals: Vec<Cell> = match (ai, &self.seekers[i].candidates) {
            (SeekerAi::Deductive, Some(c)) => c.cells().to_vec(),
            _ => self.hider.into_iter().collect(),
        };
        let pos = self.seekers[i].pos;
        let step = self.engine.best_step_toward(&self.board, pos, &goals)?;

        let action = match step {
            Some(s) => Action::Move(s.dir),
            None => Action::Wait,
        };
        self.apply(action)
    }

    /// Run computer turns until a human is due or the round ends.
    pub fn play_computers(&mut self) -> Result<Vec<Turn>, GameError> {
        let mut turns = Vec::new();
        while self.phase == Phase::Seeking && self.current().is_computer() {
            turns.push(self.computer_turn()?);
        }
        Ok(turns)
    }

    fn apply(&mut self, action: Action) -> Result<Turn, GameError> {
        let i = self.turn;
        let from = self.seekers[i].pos;
        let mut wasted = false;

        match action {
            Action::Move(dir) => {
                let to = from.step(dir);
                if !self.board.contains(to) {
                    log::warn!("{} bumps the edge moving {dir}", self.seekers[i].name);
                    self.log.log_styled("you bump into the edge", LogStyle::Error);
                    wasted = true;
                } else if self.board.is_blocked(to) {
                    log::warn!("{} cannot move {dir} from {from}", self.seekers[i].name);
                    self.log.log_styled("a barrier is in the way", LogStyle::Error);
                    return Err(GameError::IllegalMove { from, dir });
                } else {
                    self.seekers[i].pos = to;
                }
            }
            Action::PlaceBarrier if self.seekers[i].barriers_left == 0 => {
                log::warn!("{} has no barrier left", self.seekers[i].name);
                self.log.log_styled("no barrier left", LogStyle::Error);
                wasted = true;
            }
            Action::PlaceBarrier => match self.board.place_barrier(from) {
                Ok(cells) => {
                    self.seekers[i].barriers_left -= 1;
                    log::debug!("barrier at {} and {}", cells[0], cells[1]);
                    let name = self.seekers[i].name.clone();
                    self.log.log(&format!("{name} builds a barrier"));
                }
                Err(BoardError::BarrierOffEdge(_)) => {
                    log::warn!("{} cannot build at the edge", self.seekers[i].name);
                    self.log.log_styled("no room for a barrier here", LogStyle::Error);
                    wasted = true;
                }
                Err(e) => return Err(e.into()),
            },
            Action::Wait => {}
        }

        self.turns_taken += 1;
        let pos = self.seekers[i].pos;
        log::debug!("{} turn {}: {action:?} -> {pos}", self.seekers[i].name, self.turns_taken);

        let feedback = self.feedback_for(i)?;
        let outcome = if Some(pos) == self.hider {
            Some(Outcome::Found { seeker: i })
        } else if self.turns_taken >= self.config.step_budget {
            Some(Outcome::HiderEscaped)
        } else {
            None
        };

        if let Some(o) = outcome {
            self.finish(o)?;
        } else {
            if let Some(c) = self.seekers[i].candidates.as_mut() {
                c.observe(&mut self.engine, &self.board, pos, feedback)?;
            }
            if !self.seekers[i].is_computer() {
                self.log
                    .log_styled(&format!("you feel {feedback}"), LogStyle::Feedback);
            }
            self.turn = (self.turn + 1) % self.seekers.len();
            self.log.new_turn();
        }

        Ok(Turn {
            seeker: i,
            action,
            pos,
            feedback,
            wasted,
            outcome,
        })
    }

    fn finish(&mut self, outcome: Outcome) -> Result<(), GameError> {
        self.phase.transition(Phase::GameOver(outcome))?;
        let msg = match outcome {
            Outcome::Found { seeker } => {
                format!("{} found the hider!", self.seekers[seeker].name)
            }
            Outcome::HiderEscaped => "the hider stayed hidden".to_string(),
        };
        log::info!("round over after {} turns: {msg}", self.turns_taken);
        self.log.log_styled(&msg, LogStyle::Notable);
        Ok(())
    }
}
