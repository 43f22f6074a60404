mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, expand, sweep};
use terminal::logging;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let result = match commands.command {
        Commands::Sweep(args) => sweep::sweep(&args).await,
        Commands::Expand { file } => expand::expand(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
