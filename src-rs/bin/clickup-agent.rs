use std::io;
use std::process::ExitCode;

use clap::Parser;

use clickup_agent_rs::cli::Cli;
use clickup_agent_rs::logging;
use clickup_agent_rs::{Dispatcher, Settings};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let settings = Settings::from_env().with_base_url(cli.base_url);
    let log = logging::init(&settings.log);

    let mut dispatcher = Dispatcher::new(settings, io::stdout().lock()).with_log(log);
    dispatcher.dispatch(cli.command).exit_code()
}
