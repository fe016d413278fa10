use std::process::ExitCode;

use dragon_wizard_knight::cli::{ConsoleInput, ConsoleObserver, RULES};
use dragon_wizard_knight::controller::GameController;
use dragon_wizard_knight::core::GameConfig;
use dragon_wizard_knight::participants::HumanPlayer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    println!("{RULES}\n");

    let human = Box::new(HumanPlayer::new(ConsoleInput));
    let result = GameController::new(GameConfig::new(), human, ConsoleInput, ConsoleObserver)
        .and_then(GameController::run);

    match result {
        Ok(report) => {
            log::info!("seed {} winner(s): {:?}", report.seed, report.winner_names());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
