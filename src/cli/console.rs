//! Terminal collaborators: prompts in, narration out.

use dialoguer::Input;
use log::trace;

use crate::controller::{GameEvent, GameObserver, GameReport, SetupInput, Standing};
use crate::core::{GameError, Phase, PlayerId, Result};
use crate::participants::MoveInput;
use crate::rules::{GameResult, Move, RuleSet};

const DIVIDER: &str = "\n--------------------------------------------------\n";

/// Rules shown before the game starts.
pub const RULES: &str = "\
welcome to Dragon, Wizard, Knight! this is a game of luck, mind-reading, and superpowers.

during this game you play against a robot. the game keeps score and declares a winner
after the number of rounds you choose at the beginning.

when prompted, enter your character: (D)ragon, (W)izard, or (K)night.

  dragon beats knight -- the knight cannot withstand fire
  knight beats wizard -- the wizard is slain by the knight's sword
  wizard beats dragon -- the dragon cannot break the wizard's spell

if you are strong enough to beat the robot outright, more features will be unlocked!";

const BONUS_RULES: &str = "\
congrats! you won the standard game... but can you beat both opponents at once?
every bonus round all three of you play at the same time, and only a character that
beats BOTH other characters wins the round.

one new character joins: the dr(U)id. the druid tames the dragon, falls to the knight,
and cannot touch the wizard. a druid win pays double, but a beaten druid LOSES a point.
continue at your own risk...";

/// Parse a typed move letter and check it against the ruleset.
pub fn parse_move(input: &str, ruleset: RuleSet) -> std::result::Result<Move, String> {
    let mut chars = input.trim().chars();
    let mv = match (chars.next(), chars.next()) {
        (Some(letter), None) => Move::from_letter(letter),
        _ => None,
    };
    match mv {
        Some(mv) if ruleset.is_legal(mv) => Ok(mv),
        _ => Err(format!("please enter one of {}", letters(ruleset))),
    }
}

fn letters(ruleset: RuleSet) -> String {
    ruleset
        .legal_moves()
        .iter()
        .map(|mv| mv.letter().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn input_error(err: dialoguer::Error) -> GameError {
    GameError::Input(err.to_string())
}

/// Reads setup answers and moves from the terminal.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl SetupInput for ConsoleInput {
    fn player_name(&mut self) -> Result<String> {
        Input::<String>::new()
            .with_prompt("good luck... sorry, I didn't catch your name. what is it?")
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)
    }

    fn rounds_total(&mut self, phase: Phase, player_name: &str) -> Result<i64> {
        let prompt = match phase {
            Phase::Standard => format!("how many rounds would you like to play, {player_name}?"),
            Phase::Bonus => format!("how many bonus rounds, {player_name}?"),
        };
        Input::<i64>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(input_error)
    }
}

impl MoveInput for ConsoleInput {
    fn request_move(&mut self, ruleset: RuleSet) -> Result<Move> {
        let raw = Input::<String>::new()
            .with_prompt(format!("choose your character ({})", letters(ruleset)))
            .validate_with(|s: &String| parse_move(s, ruleset).map(|_| ()))
            .interact_text()
            .map_err(input_error)?;
        parse_move(&raw, ruleset).map_err(GameError::Input)
    }
}

/// Prints game events as plain text.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    fn scores(standings: &[Standing], ties: u32) {
        for s in standings {
            println!("{}'s points = {}", s.name, s.points);
        }
        println!("tied rounds = {ties}\n");
    }

    fn verdict(result: &GameResult, standings: &[Standing]) -> String {
        let name = |id: PlayerId| {
            standings
                .iter()
                .find(|s| s.player == id)
                .map_or("?", |s| s.name.as_str())
        };
        match result {
            GameResult::Winner(p) => name(*p).to_string(),
            GameResult::Tie(ps) if ps.is_empty() => "no one".to_string(),
            GameResult::Tie(ps) => {
                let names: Vec<_> = ps.iter().map(|&p| name(p)).collect();
                format!("it's a tie :( {}", names.join(" and "))
            }
        }
    }

    fn farewell(report: &GameReport) {
        println!("{DIVIDER}");
        println!("--- final scores ---");
        for s in &report.standings {
            println!("{}: {}", s.name, s.points);
        }
        let title = if report.bonus_played() { "MOST ULTIMATE" } else { "ULTIMATE" };
        let verdict = Self::verdict(&report.result, &report.standings);
        match report.result {
            GameResult::Winner(_) => println!("\n{verdict} is the {title} winner!\n"),
            GameResult::Tie(_) => println!("\n{verdict} share the {title} title!\n"),
        }
        println!("bye bye. thanks for playing, come again soon!\n");
    }
}

impl GameObserver for ConsoleObserver {
    fn on_event(&mut self, event: &GameEvent) {
        trace!("event {}", event.label());
        match event {
            GameEvent::SetupRejected { error, .. } => println!("--> {error}\n"),
            GameEvent::PhaseStarted { phase, roster, .. } => {
                let opponents: Vec<_> = roster.iter().skip(1).map(|s| s.name.as_str()).collect();
                match phase {
                    Phase::Standard => println!(
                        "\nright, apologies {}. good luck, but you won't need it. {} never fails...{DIVIDER}",
                        roster.first().map_or("stranger", |s| s.name.as_str()),
                        opponents.join(" and ")
                    ),
                    Phase::Bonus => println!("now face {} at once!\n", opponents.join(" AND ")),
                }
            }
            GameEvent::RoundStarted {
                phase,
                round,
                rounds_total,
            } => {
                let label = if *phase == Phase::Bonus { "bonus round" } else { "round" };
                println!("\n--- {label} {round} of {rounds_total} ---");
            }
            GameEvent::MoveRejected { mv, ruleset, .. } => {
                println!("--> {mv} cannot be played now, please enter one of {}", letters(*ruleset));
            }
            GameEvent::MovesRevealed { moves, .. } => {
                for m in moves.iter().skip(1) {
                    println!("{} chose: {}", m.name, m.mv);
                }
            }
            GameEvent::RoundResolved {
                outcome,
                standings,
                ties,
                round,
                rounds_total,
                ..
            } => {
                let winner = outcome
                    .winner
                    .and_then(|w| standings.iter().find(|s| s.player == w))
                    .map_or("it's a tie :( no one", |s| s.name.as_str());
                match outcome.winning_move() {
                    Some(mv) if mv.is_druid() => {
                        println!("\nsomeone played druid... {winner} is the winner of this round!\n")
                    }
                    _ => println!("\n{winner} is the winner of this round!\n"),
                }
                println!("--- scores (round {round} / {rounds_total}) ---");
                Self::scores(standings, *ties);
            }
            GameEvent::RoundVoided { round, error, .. } => {
                println!("round {round} could not be scored: {error}");
            }
            GameEvent::PhaseComplete {
                phase,
                result,
                standings,
                ..
            } => {
                let verdict = Self::verdict(result, standings);
                println!("{DIVIDER}");
                println!("{verdict} won the {phase}!\n");
            }
            GameEvent::BonusUnlocked => println!("{DIVIDER}{BONUS_RULES}\n"),
            GameEvent::BonusSkipped => {}
            GameEvent::GameFinished(report) => Self::farewell(report),
        }
    }
}
