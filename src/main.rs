//! Lumen - configuration loader for a personal blog theme.
//!
//! Reads `site.toml` (or a `.json` equivalent), validates it into a
//! `SiteConfig` and hands it to the commands below. The config is
//! built once here and passed down by reference.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use lumen::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name } => cli::init::new_site(name.as_deref()),
        Commands::Check => {
            let config = cli::load_config(&cli)?;
            cli::check::check_site(&config);
            Ok(())
        }
        Commands::Show { format } => {
            let config = cli::load_config(&cli)?;
            println!("{}", cli::show::format_config(&config, *format)?);
            Ok(())
        }
        Commands::Footer { text } => {
            println!("{}", cli::footer::footer_markup(&cli, text.as_deref())?);
            Ok(())
        }
    }
}
