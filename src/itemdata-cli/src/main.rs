mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use env_logger::Env;
use log::warn;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file should not stop lookups; fall back to defaults.
    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    env_logger::init_from_env(Env::default().default_filter_or(config.log_filter(cli.verbose)));
    if let Some(e) = config_err {
        warn!("ignoring config: {:#}", e);
    }

    let format = cli.format.or(config.format).unwrap_or_default();

    match cli.command {
        Commands::Module { id } => commands::module::show(&id, format)?,

        Commands::Ship { name, property } => {
            commands::ship::show(&name, property.as_deref(), format)?;
        }

        Commands::Suit { id } => commands::lookup::show_suit(&id, format)?,
        Commands::Weapon { id } => commands::lookup::show_weapon(&id, format)?,
        Commands::Actor { id } => commands::lookup::show_actor(&id, format)?,

        Commands::Classify { ids } => commands::classify::handle(&ids, format)?,

        Commands::Types { all } => commands::module::types(all, format)?,

        Commands::ListModules { category } => commands::module::list(&category, format)?,

        Commands::Configure {
            format,
            log_level,
            show,
        } => {
            commands::configure::handle(format, log_level, show)?;
        }
    }

    Ok(())
}
