//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lumen blog theme configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory (.toml or .json)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented site.toml template
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write into (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Validate the site configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the normalized configuration with defaults applied
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Json)]
        format: ShowFormat,
    },

    /// Render the copyright footer markup
    #[command(visible_alias = "f")]
    Footer {
        /// Copyright text; defaults to `copyright` from the config
        text: Option<String>,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Json,
    Toml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lumen", "check"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_show_format() {
        let cli = Cli::parse_from(["lumen", "show", "--format", "toml", "-C", "blog.json"]);
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: ShowFormat::Toml
            }
        ));
        assert_eq!(cli.config, PathBuf::from("blog.json"));
    }

    #[test]
    fn test_footer_text() {
        let cli = Cli::parse_from(["lumen", "footer", "© 2020"]);
        match cli.command {
            Commands::Footer { text } => assert_eq!(text.as_deref(), Some("© 2020")),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
