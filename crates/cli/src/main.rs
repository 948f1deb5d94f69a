use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{debug, warn};
use variable_group_copier_cli::cli_args::Args;
use variable_group_copier_cli::console::TerminalConsole;
use variable_group_copier_core::config;
use variable_group_copier_core::console::UserConsole;
use variable_group_copier_core::copier::Copier;
use variable_group_copier_core::error::Result;
use variable_group_copier_core::repository::RemoteRepository;
use variable_group_copier_core::resolver::ParametersResolver;

fn execute(args: &Args) -> Result<bool> {
    let config_path = config::get_config_path(args.config_path.as_deref());
    debug!("Config path: `{config_path}`");

    let defaults = config::load_defaults(&config_path)?;
    let service_defaults = defaults.clone();

    let mut copier = Copier::new(ParametersResolver::new(TerminalConsole::stdio(), defaults));

    let outcome = copier.copy(&args.parameters, |account, token| {
        let service_url = service_defaults.service_url(account)?;
        RemoteRepository::connect(&service_url, token)
    });

    if copier.resolver().interactive_mode() && !args.no_pause {
        if let Err(e) = copier.resolver_mut().console_mut().wait_any_key(None) {
            warn!("Could not wait for a key press: {e}");
        }
    }

    // Failures were already logged with their context by the copier
    Ok(outcome.is_ok())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match execute(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
