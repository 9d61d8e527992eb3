//! Competition loop: two seats, a number of rounds, a win tally.
//!
//! Each round starts from a fresh board. Players alternate, player 1
//! opening, until no stick is left; the player whose turn it then is wins,
//! because the opponent just took the last stick.

use std::fmt;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::core::{CompetitionConfig, CompetitionError, GameRng, Move, PlayerId, PlayerMap};
use crate::strategy::PlayerKind;

use super::input::MoveSource;
use super::transcript::RoundObserver;

/// One finished round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    pub winner: PlayerId,
    /// Accepted moves in play order.
    pub moves: Vec<(PlayerId, Move)>,
}

/// Outcome of a whole competition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitionResult {
    pub scores: PlayerMap<u32>,
    pub rounds: Vec<RoundRecord>,
}

/// The final results line, e.g. `The results are 3:2`.
impl fmt::Display for CompetitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The results are {}:{}",
            self.scores[PlayerId::FIRST],
            self.scores[PlayerId::SECOND]
        )
    }
}

/// A match between two players.
///
/// ```
/// use misere_nim::core::{CompetitionConfig, GameRng};
/// use misere_nim::game::{Competition, NoInput, Silent};
/// use misere_nim::strategy::PlayerKind;
///
/// let config = CompetitionConfig::new().with_rounds(3);
/// let mut competition =
///     Competition::new(PlayerKind::heuristic(), PlayerKind::random(), config, GameRng::new(1));
///
/// let result = competition.play(&mut NoInput, &mut Silent).unwrap();
/// assert_eq!(result.rounds.len(), 3);
/// ```
pub struct Competition {
    players: PlayerMap<PlayerKind>,
    rngs: PlayerMap<GameRng>,
    scores: PlayerMap<u32>,
    config: CompetitionConfig,
}

impl Competition {
    /// Create a competition. Each seat gets its own fork of `rng`.
    pub fn new(first: PlayerKind, second: PlayerKind, config: CompetitionConfig, mut rng: GameRng) -> Self {
        Self {
            players: PlayerMap::new(|p| if p == PlayerId::FIRST { first } else { second }),
            rngs: PlayerMap::new(|_| rng.fork()),
            scores: PlayerMap::with_default(),
            config,
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> PlayerKind {
        self.players[player]
    }

    #[must_use]
    pub fn config(&self) -> &CompetitionConfig {
        &self.config
    }

    /// True if either seat is human.
    #[must_use]
    pub fn has_human(&self) -> bool {
        self.players.iter().any(|(_, kind)| kind.is_human())
    }

    /// Wins of the player at 1-based `position`; `None` unless 1 or 2.
    #[must_use]
    pub fn score(&self, position: usize) -> Option<u32> {
        PlayerId::from_position(position).map(|p| self.scores[p])
    }

    /// Opening line announcing the match.
    #[must_use]
    pub fn banner(&self) -> String {
        format!(
            "Starting a Nim competition of {} rounds between a {} player and a {} player.",
            self.config.rounds,
            self.players[PlayerId::FIRST],
            self.players[PlayerId::SECOND]
        )
    }

    /// Play every configured round.
    pub fn play(
        &mut self,
        input: &mut dyn MoveSource,
        observer: &mut dyn RoundObserver,
    ) -> Result<CompetitionResult, CompetitionError> {
        let mut rounds = Vec::with_capacity(self.config.rounds as usize);
        for round in 1..=self.config.rounds {
            debug!(round, "round starting");
            rounds.push(self.play_round(input, observer)?);
        }

        info!(
            first = self.scores[PlayerId::FIRST],
            second = self.scores[PlayerId::SECOND],
            "competition finished"
        );
        Ok(CompetitionResult {
            scores: self.scores.clone(),
            rounds,
        })
    }

    /// Play a single round and record the winner.
    pub fn play_round(
        &mut self,
        input: &mut dyn MoveSource,
        observer: &mut dyn RoundObserver,
    ) -> Result<RoundRecord, CompetitionError> {
        let mut board = Board::from_config(&self.config.board);
        let mut current = PlayerId::FIRST;
        let mut moves = Vec::new();
        let mut announce = true;

        observer.round_started(&board)?;

        while board.unmarked_count() > 0 {
            if announce {
                observer.turn_started(current)?;
            }

            let kind = self.players[current];
            let mv = match kind.strategy() {
                Some(strategy) => {
                    let mv = strategy
                        .produce_move(&board, &mut self.rngs[current])
                        .ok_or(CompetitionError::NoMoveProduced {
                            player: current,
                            strategy: strategy.name(),
                        })?;
                    board
                        .apply_move(&mv)
                        .map_err(|reason| CompetitionError::IllegalStrategyMove {
                            player: current,
                            strategy: strategy.name(),
                            mv,
                            reason,
                        })?;
                    mv
                }
                None => {
                    let mv = input.request_move(current, &board)?;
                    if let Err(reason) = board.apply_move(&mv) {
                        warn!(player = %current, %mv, %reason, "rejected move");
                        observer.invalid_move(current, &mv, &reason)?;
                        announce = false;
                        continue;
                    }
                    mv
                }
            };

            debug!(player = %current, %mv, remaining = board.unmarked_count(), "move applied");
            observer.move_made(current, &mv)?;
            moves.push((current, mv));
            current = current.opponent();
            announce = true;
        }

        self.scores[current] += 1;
        observer.round_won(current)?;
        info!(winner = %current, moves = moves.len(), "round finished");

        Ok(RoundRecord {
            winner: current,
            moves,
        })
    }
}
