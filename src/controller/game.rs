//! The two-phase game loop.
//!
//! The controller owns every piece of mutable game state: seats, the active
//! phase, and cumulative totals. Each `step` performs one state transition;
//! `run` steps until `Finished`.

use log::{debug, error, info, warn};
use smallvec::smallvec;

use super::events::{GameEvent, GameObserver, RevealedMove, SetupInput, Standing};
use super::report::{GameReport, PhaseSummary};
use super::state::{GamePhase, GameState};
use crate::core::{
    validate_name, validate_rounds, GameConfig, GameError, GameRng, Phase, PlayerId, PlayerMap,
    Result, SetupError,
};
use crate::participants::{Participant, ParticipantKind, RandomPlayer};
use crate::round::{RoundResolver, SeatVec, Submission};
use crate::rules::{GameResult, RuleSet};

/// Seat of the standard-phase opponent.
pub const STANDARD_OPPONENT_SEAT: PlayerId = PlayerId::new(1);

/// Seat of the opponent joining for the bonus phase.
pub const BONUS_OPPONENT_SEAT: PlayerId = PlayerId::new(2);

struct Seat {
    name: String,
    participant: Box<dyn Participant>,
}

/// Drives a game from setup to the final verdict.
///
/// ## Example
///
/// ```
/// use dragon_wizard_knight::controller::{GameController, GameEvent, SetupInput};
/// use dragon_wizard_knight::core::{GameConfig, Phase, Result};
/// use dragon_wizard_knight::participants::ScriptedPlayer;
/// use dragon_wizard_knight::rules::Move;
///
/// struct Preset;
/// impl SetupInput for Preset {
///     fn player_name(&mut self) -> Result<String> { Ok("Ada".into()) }
///     fn rounds_total(&mut self, _: Phase, _: &str) -> Result<i64> { Ok(3) }
/// }
///
/// let config = GameConfig::new().with_seed(1);
/// let human = ScriptedPlayer::human(vec![Move::Dragon]);
/// let mut events: Vec<GameEvent> = Vec::new();
///
/// let report = GameController::new(config, Box::new(human), Preset, &mut events)
///     .unwrap()
///     .run()
///     .unwrap();
///
/// assert_eq!(report.phase(Phase::Standard).unwrap().rounds_played, 3);
/// assert!(matches!(events.last(), Some(GameEvent::GameFinished(_))));
/// ```
pub struct GameController<S, O> {
    config: GameConfig,
    setup: S,
    observer: O,
    resolver: RoundResolver,
    rng: GameRng,
    state: GameState,
    opponents: [Option<Box<dyn Participant>>; 2],
    seats: PlayerMap<Seat>,
    cumulative: PlayerMap<i64>,
    phase: Option<GamePhase>,
    summaries: Vec<PhaseSummary>,
    report: Option<GameReport>,
}

impl<S: SetupInput, O: GameObserver> GameController<S, O> {
    /// Create a controller in `AwaitingSetup`.
    ///
    /// Fails if preset configuration values are invalid.
    pub fn new(config: GameConfig, human: Box<dyn Participant>, setup: S, observer: O) -> Result<Self> {
        config.validate()?;
        if human.kind() != ParticipantKind::Human {
            warn!("primary participant is not human-controlled");
        }

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!("new game, seed {}", rng.seed());

        // The human's seat is named once setup has asked for it
        let mut seats = PlayerMap::default();
        seats.push(Seat {
            name: String::new(),
            participant: human,
        });

        Ok(Self {
            resolver: RoundResolver::new(config.scoring),
            config,
            setup,
            observer,
            rng,
            state: GameState::AwaitingSetup,
            opponents: [None, None],
            seats,
            cumulative: PlayerMap::with_value(1, 0),
            phase: None,
            summaries: Vec::new(),
            report: None,
        })
    }

    /// Replace the random opponents with custom move sources.
    #[must_use]
    pub fn with_opponents(
        mut self,
        standard: Box<dyn Participant>,
        bonus: Box<dyn Participant>,
    ) -> Self {
        self.opponents = [Some(standard), Some(bonus)];
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Phase in progress, if any.
    #[must_use]
    pub fn active_phase(&self) -> Option<&GamePhase> {
        self.phase.as_ref()
    }

    /// Seed the opponents draw from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cumulative points for a seat across finished phases.
    #[must_use]
    pub fn cumulative_points(&self, player: PlayerId) -> i64 {
        self.cumulative.get(player).copied().unwrap_or(0)
    }

    /// Display name of a seat, once that seat has been set up.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.seats
            .get(player)
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// The final report, once `Finished`.
    #[must_use]
    pub fn report(&self) -> Option<&GameReport> {
        self.report.as_ref()
    }

    /// Play the game to the end.
    pub fn run(mut self) -> Result<GameReport> {
        loop {
            if let Some(report) = self.report.take() {
                return Ok(report);
            }
            self.step()?;
        }
    }

    /// Perform one state transition and return the new state.
    pub fn step(&mut self) -> Result<GameState> {
        let next = match self.state {
            GameState::AwaitingSetup => {
                self.set_up_standard()?;
                GameState::StandardRound(1)
            }
            GameState::StandardRound(_) | GameState::BonusRound(_) => self.play_round()?,
            GameState::StandardComplete => {
                let result = self.complete_phase();
                if result.is_winner(PlayerId::HUMAN) {
                    info!("bonus game unlocked");
                    self.observer.on_event(&GameEvent::BonusUnlocked);
                    self.set_up_bonus()?;
                    GameState::BonusRound(1)
                } else {
                    info!("bonus game skipped");
                    self.observer.on_event(&GameEvent::BonusSkipped);
                    self.finish();
                    GameState::Finished
                }
            }
            GameState::BonusComplete => {
                self.complete_phase();
                self.finish();
                GameState::Finished
            }
            GameState::Finished => GameState::Finished,
        };
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(next)
    }

    fn set_up_standard(&mut self) -> Result<()> {
        let name = match self.config.player_name.clone() {
            Some(name) => validate_name(&name)?,
            None => self.ask(|setup| setup.player_name(), |raw: String| validate_name(&raw))?,
        };
        self.seats[PlayerId::HUMAN].name = name;

        let standard = self.opponents[0]
            .take()
            .unwrap_or_else(|| Box::new(RandomPlayer::new(self.rng.fork())) as Box<dyn Participant>);
        self.seat(self.config.standard_opponent.clone(), standard);

        let rounds = self.rounds_for(Phase::Standard)?;
        self.start_phase(
            Phase::Standard,
            smallvec![PlayerId::HUMAN, STANDARD_OPPONENT_SEAT],
            rounds,
        );
        Ok(())
    }

    fn set_up_bonus(&mut self) -> Result<()> {
        let bonus = self.opponents[1]
            .take()
            .unwrap_or_else(|| Box::new(RandomPlayer::new(self.rng.fork())) as Box<dyn Participant>);
        self.seat(self.config.bonus_opponent.clone(), bonus);

        let rounds = self.rounds_for(Phase::Bonus)?;
        self.start_phase(
            Phase::Bonus,
            smallvec![PlayerId::HUMAN, STANDARD_OPPONENT_SEAT, BONUS_OPPONENT_SEAT],
            rounds,
        );
        Ok(())
    }

    fn seat(&mut self, name: String, participant: Box<dyn Participant>) {
        self.seats.push(Seat { name, participant });
        self.cumulative.push(0);
    }

    fn rounds_for(&mut self, phase: Phase) -> Result<u32> {
        if let Some(rounds) = self.config.rounds_for(phase) {
            return Ok(validate_rounds(i64::from(rounds))?);
        }
        let name = self.seats[PlayerId::HUMAN].name.clone();
        self.ask(|setup| setup.rounds_total(phase, &name), validate_rounds)
    }

    /// Ask the setup collaborator until `validate` accepts, within the retry bound.
    fn ask<R, T>(
        &mut self,
        mut question: impl FnMut(&mut S) -> Result<R>,
        validate: impl Fn(R) -> std::result::Result<T, SetupError>,
    ) -> Result<T> {
        let attempts = self.config.max_setup_attempts;
        for attempt in 1..=attempts {
            let raw = question(&mut self.setup)?;
            match validate(raw) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    warn!("setup answer rejected ({}/{}): {}", attempt, attempts, error);
                    self.observer.on_event(&GameEvent::SetupRejected {
                        error,
                        attempts_left: attempts - attempt,
                    });
                }
            }
        }
        Err(GameError::SetupAttemptsExhausted { attempts })
    }

    fn start_phase(&mut self, phase: Phase, seats: SeatVec<PlayerId>, rounds_total: u32) {
        info!("{} starts: {} rounds, {} seats", phase, rounds_total, seats.len());
        let roster = seats
            .iter()
            .map(|&player| Standing {
                player,
                name: self.seats[player].name.clone(),
                points: 0,
            })
            .collect();
        self.phase = Some(GamePhase::new(phase, seats, rounds_total));
        self.observer.on_event(&GameEvent::PhaseStarted {
            phase,
            rounds_total,
            roster,
        });
    }

    fn play_round(&mut self) -> Result<GameState> {
        let Self {
            phase,
            seats,
            observer,
            resolver,
            config,
            ..
        } = self;
        let active = phase
            .as_mut()
            .ok_or(GameError::Internal("round requested with no phase in progress"))?;
        let ruleset = active.ruleset();
        let round = active.round + 1;

        observer.on_event(&GameEvent::RoundStarted {
            phase: active.phase,
            round,
            rounds_total: active.rounds_total,
        });

        let mut submissions: SeatVec<Submission> = SeatVec::new();
        for &player in &active.seats {
            let submission =
                collect_move(player, &mut seats[player], ruleset, config.max_move_attempts, observer)?;
            submissions.push(submission);
        }

        observer.on_event(&GameEvent::MovesRevealed {
            phase: active.phase,
            round,
            rounds_total: active.rounds_total,
            moves: submissions
                .iter()
                .map(|s| RevealedMove {
                    player: s.player,
                    name: seats[s.player].name.clone(),
                    mv: s.mv,
                })
                .collect(),
        });

        match resolver.resolve(&submissions, ruleset) {
            Ok(outcome) => {
                active.scores.apply_outcome(&outcome);
                debug!("{} round {}: {:?}", active.phase, round, outcome.winner);
                observer.on_event(&GameEvent::RoundResolved {
                    phase: active.phase,
                    round,
                    rounds_total: active.rounds_total,
                    outcome,
                    standings: phase_standings(active, seats),
                    ties: active.scores.ties(),
                });
            }
            Err(error @ GameError::InvalidMove { .. }) => {
                error!("{} round {} voided: {}", active.phase, round, error);
                observer.on_event(&GameEvent::RoundVoided {
                    phase: active.phase,
                    round,
                    error,
                });
            }
            Err(other) => return Err(other),
        }

        active.round = round;
        Ok(active.next_state())
    }

    /// Close the active phase, fold its totals into the cumulative table.
    fn complete_phase(&mut self) -> GameResult {
        let Some(active) = self.phase.take() else {
            return GameResult::Tie(Vec::new());
        };
        let standings = phase_standings(&active, &self.seats);
        let result = active
            .scores
            .leaders()
            .unwrap_or_else(|| GameResult::Tie(Vec::new()));

        for &player in &active.seats {
            self.cumulative[player] += active.scores.points(player);
        }
        info!("{} complete: {:?}", active.phase, result);

        self.observer.on_event(&GameEvent::PhaseComplete {
            phase: active.phase,
            result: result.clone(),
            standings: standings.clone(),
            ties: active.scores.ties(),
        });
        self.summaries.push(PhaseSummary {
            phase: active.phase,
            rounds_played: active.round,
            result: result.clone(),
            standings,
            ties: active.scores.ties(),
        });
        result
    }

    fn finish(&mut self) {
        let standings: Vec<Standing> = self
            .cumulative
            .iter()
            .map(|(player, &points)| Standing {
                player,
                name: self.seats[player].name.clone(),
                points,
            })
            .collect();
        let result = GameResult::from_points(standings.iter().map(|s| (s.player, s.points)))
            .unwrap_or_else(|| GameResult::Tie(Vec::new()));
        info!("game finished: {:?}", result);

        let report = GameReport {
            seed: self.rng.seed(),
            phases: self.summaries.clone(),
            standings,
            result,
        };
        self.observer.on_event(&GameEvent::GameFinished(report.clone()));
        self.report = Some(report);
    }
}

/// Get a move from one seat.
///
/// Human moves are checked here and asked for again when illegal; after the
/// last attempt the move is submitted as checked, which forfeits the round.
/// Computer moves go to the resolver unchecked: an illegal one is a bug.
fn collect_move<O: GameObserver>(
    player: PlayerId,
    seat: &mut Seat,
    ruleset: RuleSet,
    max_attempts: u32,
    observer: &mut O,
) -> Result<Submission> {
    if seat.participant.kind() == ParticipantKind::Computer {
        let mv = seat.participant.choose_move(ruleset)?;
        return Ok(Submission::unchecked(player, mv));
    }

    let mut attempt = 1;
    loop {
        let mv = seat.participant.choose_move(ruleset)?;
        if ruleset.is_legal(mv) || attempt >= max_attempts {
            return Ok(Submission::checked(player, mv));
        }
        warn!("{} played {} under the {} ruleset", seat.name, mv, ruleset);
        observer.on_event(&GameEvent::MoveRejected {
            player,
            mv,
            ruleset,
            attempts_left: max_attempts - attempt,
        });
        attempt += 1;
    }
}

fn phase_standings(phase: &GamePhase, seats: &PlayerMap<Seat>) -> Vec<Standing> {
    phase
        .seats
        .iter()
        .map(|&player| Standing {
            player,
            name: seats[player].name.clone(),
            points: phase.scores.points(player),
        })
        .collect()
}
