use std::process::ExitCode;

use railyard::{services::run_demo, structures::DemoConfig};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = match DemoConfig::builtin() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let level = match config.level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run_demo(&config) {
        Ok(outcomes) => {
            let failed = outcomes.iter().filter(|o| !o.passed).count();
            for outcome in &outcomes {
                info!(
                    "{}: {}",
                    outcome.name,
                    if outcome.passed { "Pass" } else { "Fail" }
                );
            }
            if failed > 0 {
                error!("{} of {} scenarios failed", failed, outcomes.len());
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
