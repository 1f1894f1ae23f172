use std::process::ExitCode;

use activity_history::cli::{self, CliArgs, USAGE};
use activity_history::{HistoryConfig, HistoryResult};
use log::error;

/// Renders one page of the activity history as JSON on stdout.
/// Reads activities from a JSON file; never writes anything back.
fn main() -> ExitCode {
    env_logger::init();

    match render() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}\n{}", e, USAGE);
            ExitCode::FAILURE
        }
    }
}

fn render() -> HistoryResult<String> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = HistoryConfig::load(args.config.as_deref())?;
    let report = cli::run(&args, config)?;
    Ok(serde_json::to_string_pretty(&report)?)
}
