mod cards;
mod cli;
mod currency;
mod error;
mod fields;
mod fmt;
mod hand;
mod loader;
mod models;
mod session;
mod settings;
mod tournament;
mod xml;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

const LOG_ENV: &str = "POKERHIST_LOG";

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Tournaments {
            dir,
            from_date,
            to_date,
            lenient,
        } => cli::tournaments::run(dir, from_date, to_date, lenient),
        Commands::Hands {
            dir,
            tournament,
            lenient,
        } => cli::hands::run(dir, &tournament, lenient),
        Commands::Show { dir, game, lenient } => cli::show::run(dir, &game, lenient),
        Commands::Config {
            hands_dir,
            cards_dir,
            hero,
            lenient,
        } => cli::config::run(hands_dir, cards_dir, hero, lenient),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
