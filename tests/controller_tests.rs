//! Game controller tests.
//!
//! These tests drive whole games with scripted participants and a scripted
//! setup collaborator, then check the state machine, the bonus unlock rule
//! and the reported verdicts.

use std::collections::VecDeque;

use dragon_wizard_knight::controller::{
    GameController, GameEvent, GameState, SetupInput, BONUS_OPPONENT_SEAT,
    STANDARD_OPPONENT_SEAT,
};
use dragon_wizard_knight::core::{GameConfig, GameError, Phase, PlayerId, Result, SetupError};
use dragon_wizard_knight::participants::ScriptedPlayer;
use dragon_wizard_knight::rules::{GameResult, Move};

const YOU: PlayerId = PlayerId::HUMAN;
const SALLY: PlayerId = STANDARD_OPPONENT_SEAT;
const BOB: PlayerId = BONUS_OPPONENT_SEAT;

/// Setup collaborator answering from fixed queues.
#[derive(Default)]
struct ScriptedSetup {
    names: VecDeque<String>,
    rounds: VecDeque<i64>,
}

impl ScriptedSetup {
    fn new(names: &[&str], rounds: &[i64]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            rounds: rounds.iter().copied().collect(),
        }
    }
}

impl SetupInput for ScriptedSetup {
    fn player_name(&mut self) -> Result<String> {
        self.names
            .pop_front()
            .ok_or_else(|| GameError::Input("no more names".to_string()))
    }

    fn rounds_total(&mut self, _phase: Phase, _player_name: &str) -> Result<i64> {
        self.rounds
            .pop_front()
            .ok_or_else(|| GameError::Input("no more round counts".to_string()))
    }
}

fn controller<'a>(
    config: GameConfig,
    human: Vec<Move>,
    sally: Vec<Move>,
    bob: Vec<Move>,
    events: &'a mut Vec<GameEvent>,
) -> GameController<ScriptedSetup, &'a mut Vec<GameEvent>> {
    GameController::new(
        config.with_seed(7).with_player_name("Ada"),
        Box::new(ScriptedPlayer::human(human)),
        ScriptedSetup::default(),
        events,
    )
    .unwrap()
    .with_opponents(
        Box::new(ScriptedPlayer::computer(sally)),
        Box::new(ScriptedPlayer::computer(bob)),
    )
}

fn count(events: &[GameEvent], label: &str) -> usize {
    events.iter().filter(|e| e.label() == label).count()
}

/// Winning the standard game outright unlocks the bonus game.
#[test]
fn test_standard_win_unlocks_bonus() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(3).with_bonus_rounds(2);
    let report = controller(
        config,
        vec![Move::Dragon],
        vec![Move::Knight],
        vec![Move::Knight],
        &mut events,
    )
    .run()
    .unwrap();

    assert!(report.bonus_played());
    assert_eq!(report.phase(Phase::Standard).unwrap().result, GameResult::Winner(YOU));
    // 3 standard wins + 2 bonus wins (Dragon beats both Knights)
    assert_eq!(report.points(YOU), 5);
    assert_eq!(report.points(SALLY), 0);
    assert_eq!(report.points(BOB), 0);
    assert_eq!(report.result, GameResult::Winner(YOU));
    assert_eq!(report.winner_names(), vec!["Ada"]);

    assert_eq!(count(&events, "bonus-unlocked"), 1);
    assert_eq!(count(&events, "round-resolved"), 5);
    assert_eq!(count(&events, "phase-complete"), 2);
}

/// An equal standard score routes straight to Finished.
#[test]
fn test_standard_tie_skips_bonus() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(2).with_bonus_rounds(2);
    let report = controller(
        config,
        vec![Move::Wizard],
        vec![Move::Wizard],
        vec![Move::Knight],
        &mut events,
    )
    .run()
    .unwrap();

    assert!(!report.bonus_played());
    assert_eq!(report.phases.len(), 1);
    assert_eq!(report.phases[0].ties, 2);
    assert_eq!(report.result, GameResult::Tie(vec![YOU, SALLY]));
    assert_eq!(report.standings.len(), 2);
    assert_eq!(count(&events, "bonus-skipped"), 1);
    assert_eq!(count(&events, "bonus-unlocked"), 0);
}

/// A lower standard score also routes straight to Finished.
#[test]
fn test_standard_loss_skips_bonus() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(3);
    let report = controller(
        config,
        vec![Move::Wizard],
        vec![Move::Knight],
        vec![Move::Knight],
        &mut events,
    )
    .run()
    .unwrap();

    assert!(!report.bonus_played());
    assert_eq!(report.result, GameResult::Winner(SALLY));
    assert_eq!(report.points(SALLY), 3);
}

/// The controller walks the documented states in order.
#[test]
fn test_state_sequence() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(2).with_bonus_rounds(1);
    let mut game = controller(
        config,
        vec![Move::Knight],
        vec![Move::Wizard],
        vec![Move::Wizard],
        &mut events,
    );

    assert_eq!(game.state(), GameState::AwaitingSetup);
    let mut states = Vec::new();
    while !game.state().is_finished() {
        states.push(game.step().unwrap());
    }

    assert_eq!(
        states,
        vec![
            GameState::StandardRound(1),
            GameState::StandardRound(2),
            GameState::StandardComplete,
            GameState::BonusRound(1),
            GameState::BonusComplete,
            GameState::Finished,
        ]
    );
    assert_eq!(game.name(BOB), Some("Bob"));
    assert_eq!(game.cumulative_points(YOU), 3);
    assert!(game.report().is_some());

    // Stepping a finished game is a no-op
    assert_eq!(game.step().unwrap(), GameState::Finished);
}

/// The round counter never runs past the phase target.
#[test]
fn test_round_counter_bounded() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(3);
    let mut game = controller(
        config,
        vec![Move::Dragon],
        vec![Move::Dragon],
        vec![Move::Dragon],
        &mut events,
    );

    while !game.state().is_finished() {
        if let Some(phase) = game.active_phase() {
            assert!(phase.round <= phase.rounds_total);
        }
        game.step().unwrap();
    }
}

/// Totals carry across phases; two opponents sharing the lead is a tie.
#[test]
fn test_cumulative_tie_reported_explicitly() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(1).with_bonus_rounds(2);
    let report = controller(
        config,
        vec![Move::Dragon, Move::Wizard, Move::Wizard],
        vec![Move::Knight, Move::Knight, Move::Wizard],
        vec![Move::Wizard, Move::Knight],
        &mut events,
    )
    .run()
    .unwrap();

    let bonus = report.phase(Phase::Bonus).unwrap();
    assert_eq!(bonus.result, GameResult::Tie(vec![SALLY, BOB]));

    assert_eq!(report.points(YOU), 1);
    assert_eq!(report.points(SALLY), 1);
    assert_eq!(report.points(BOB), 1);
    assert_eq!(report.result, GameResult::Tie(vec![YOU, SALLY, BOB]));
}

/// A Druid win in the bonus game pays double.
#[test]
fn test_druid_win_in_bonus_game() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(1).with_bonus_rounds(1);
    let report = controller(
        config,
        vec![Move::Wizard, Move::Druid],
        vec![Move::Dragon],
        vec![Move::Dragon],
        &mut events,
    )
    .run()
    .unwrap();

    let bonus = report.phase(Phase::Bonus).unwrap();
    assert_eq!(bonus.standings[0].points, 2);
    assert_eq!(report.points(YOU), 3);
}

/// Rejected setup answers are reported and asked for again.
#[test]
fn test_setup_reprompts() {
    let mut events: Vec<GameEvent> = Vec::new();
    let setup = ScriptedSetup::new(&["  ", "Ada"], &[0, -2, 1]);
    let report = GameController::new(
        GameConfig::new().with_seed(3),
        Box::new(ScriptedPlayer::human(vec![Move::Dragon])),
        setup,
        &mut events,
    )
    .unwrap()
    .with_opponents(
        Box::new(ScriptedPlayer::computer(vec![Move::Dragon])),
        Box::new(ScriptedPlayer::computer(vec![Move::Dragon])),
    )
    .run()
    .unwrap();

    assert_eq!(report.standings[0].name, "Ada");
    assert_eq!(report.phases[0].rounds_played, 1);

    let rejections: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::SetupRejected { error, .. } => Some(error.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejections,
        vec![
            SetupError::EmptyName,
            SetupError::NonPositiveRounds(0),
            SetupError::NonPositiveRounds(-2),
        ]
    );
}

/// Repeated setup failure ends the game with a clear error.
#[test]
fn test_setup_gives_up_after_bound() {
    let setup = ScriptedSetup::new(&["", " ", "\t", "Ada"], &[3]);
    let result = GameController::new(
        GameConfig::new().with_seed(3),
        Box::new(ScriptedPlayer::human(vec![Move::Dragon])),
        setup,
        (),
    )
    .unwrap()
    .run();

    assert_eq!(result.unwrap_err(), GameError::SetupAttemptsExhausted { attempts: 3 });
}

/// Bonus rounds are asked for only once the bonus game unlocks.
#[test]
fn test_bonus_rounds_prompted_at_unlock() {
    let mut events = Vec::new();
    let mut game = GameController::new(
        GameConfig::new().with_seed(1).with_player_name("Ada"),
        Box::new(ScriptedPlayer::human(vec![Move::Knight])),
        ScriptedSetup::new(&[], &[2, 1]),
        &mut events,
    )
    .unwrap()
    .with_opponents(
        Box::new(ScriptedPlayer::computer(vec![Move::Wizard])),
        Box::new(ScriptedPlayer::computer(vec![Move::Wizard])),
    );

    game.step().unwrap();
    assert_eq!(game.active_phase().unwrap().rounds_total, 2);

    while !game.state().is_finished() {
        game.step().unwrap();
    }
    let report = game.report().unwrap();
    assert_eq!(report.phase(Phase::Bonus).unwrap().rounds_played, 1);
}

/// Invalid preset configuration is rejected up front.
#[test]
fn test_invalid_config_rejected() {
    let result = GameController::new(
        GameConfig::new().with_player_name("   "),
        Box::new(ScriptedPlayer::human(vec![Move::Dragon])),
        ScriptedSetup::default(),
        (),
    );
    assert!(matches!(result, Err(GameError::Setup(SetupError::EmptyName))));
}

/// An illegal human move is reported and asked for again within the round.
#[test]
fn test_human_invalid_move_is_retried() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(2).with_bonus_rounds(1);
    let report = controller(
        config,
        vec![Move::Druid, Move::Dragon],
        vec![Move::Knight],
        vec![Move::Knight],
        &mut events,
    )
    .run()
    .unwrap();

    assert_eq!(count(&events, "move-rejected"), 2);
    assert_eq!(report.phase(Phase::Standard).unwrap().standings[0].points, 2);
}

/// Past the retry bound the illegal move stands and forfeits the round.
#[test]
fn test_human_invalid_move_forfeits_after_bound() {
    let mut events = Vec::new();
    let config = GameConfig::new()
        .with_standard_rounds(2)
        .with_max_move_attempts(2);
    let report = controller(
        config,
        vec![Move::Druid],
        vec![Move::Wizard],
        vec![Move::Wizard],
        &mut events,
    )
    .run()
    .unwrap();

    assert_eq!(count(&events, "move-rejected"), 2);
    assert_eq!(report.result, GameResult::Winner(SALLY));
    assert_eq!(report.points(SALLY), 2);

    let forfeits = events
        .iter()
        .filter(|e| matches!(e, GameEvent::RoundResolved { outcome, .. } if outcome.forfeits.as_slice() == [YOU]))
        .count();
    assert_eq!(forfeits, 2);
}

/// An illegal computer move voids the round without scoring it.
#[test]
fn test_computer_invalid_move_voids_round() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(2);
    let report = controller(
        config,
        vec![Move::Dragon],
        vec![Move::Druid],
        vec![Move::Druid],
        &mut events,
    )
    .run()
    .unwrap();

    assert_eq!(count(&events, "round-voided"), 2);
    assert_eq!(count(&events, "round-resolved"), 0);
    assert_eq!(report.phases[0].rounds_played, 2);
    assert_eq!(report.result, GameResult::Tie(vec![YOU, SALLY]));
}

/// Same seed, same game.
#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed: u64| {
        GameController::new(
            GameConfig::new()
                .with_seed(seed)
                .with_player_name("Ada")
                .with_standard_rounds(10)
                .with_bonus_rounds(10),
            Box::new(ScriptedPlayer::human(vec![Move::Dragon, Move::Wizard, Move::Knight])),
            ScriptedSetup::default(),
            Vec::<GameEvent>::new(),
        )
        .unwrap()
        .run()
        .unwrap()
    };

    assert_eq!(play(11), play(11));
    assert_eq!(play(11).seed, 11);
}

/// Seats are named as setup reaches them; Bob only once the bonus unlocks.
#[test]
fn test_seat_names_follow_setup() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(1).with_bonus_rounds(1);
    let mut game = controller(
        config,
        vec![Move::Dragon],
        vec![Move::Knight],
        vec![Move::Knight],
        &mut events,
    );

    assert_eq!(game.name(YOU), None);
    assert_eq!(game.name(SALLY), None);

    game.step().unwrap();
    assert_eq!(game.name(YOU), Some("Ada"));
    assert_eq!(game.name(SALLY), Some("Sally"));
    assert_eq!(game.name(BOB), None);

    while game.state() != GameState::BonusRound(1) {
        game.step().unwrap();
    }
    assert_eq!(game.name(BOB), Some("Bob"));
}

/// Running a game that was already stepped to the end hands back its report.
#[test]
fn test_run_after_stepping_to_the_end() {
    let mut events = Vec::new();
    let config = GameConfig::new().with_standard_rounds(2);
    let mut game = controller(
        config,
        vec![Move::Wizard],
        vec![Move::Knight],
        vec![Move::Knight],
        &mut events,
    );

    while !game.state().is_finished() {
        game.step().unwrap();
    }
    let stepped = game.report().cloned().unwrap();
    let report = game.run().unwrap();

    assert_eq!(report, stepped);
    assert_eq!(report.result, GameResult::Winner(SALLY));
}
