//! Typegen CLI.
//!
//! Generates a TypeScript client module (type declarations plus URL-building
//! route functions) from a schema inventory.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Compile an inventory into `v<version>.ts`
//! - `inspect` - Summarize an inventory
//! - `config` - Show or create the configuration file
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate from a published inventory into ./src/api
//! typegen generate https://example.com/inventory --output src/api
//!
//! # Print the module for a local inventory
//! typegen generate ./inventory --stdout
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use typegen_cli::commands::{self, generate::GenerateArgs};
use typegen_cli::{ConfigAction, exit_code_for};
use typegen_core::cli::{ExitCode, OutputFormat};

/// Typegen - TypeScript client generator for schema inventories.
#[derive(Parser, Debug)]
#[command(name = "typegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,

    /// Configuration file (default: platform config dir/typegen/config.toml)
    #[arg(long, global = true, env = "TYPEGEN_CONFIG")]
    config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a TypeScript module from an inventory.
    ///
    /// Writes `v<version>.ts` into the output directory. An existing file is
    /// only replaced after confirmation or with `--yes`.
    ///
    /// # Examples
    ///
    /// ```bash
    /// typegen generate https://example.com/inventory --output src/api --yes
    /// ```
    Generate {
        /// Inventory root: an http(s) URL or a directory
        inventory: String,

        /// Output directory (default: `output.directory` from the configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing module without asking
        #[arg(short, long)]
        yes: bool,

        /// Print the module to stdout instead of writing a file
        #[arg(long, conflicts_with_all = ["output", "yes"])]
        stdout: bool,
    },

    /// Summarize an inventory: version, counts per kind, and items.
    Inspect {
        /// Inventory root: an http(s) URL or a directory
        inventory: String,
    },

    /// Show or create the configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let exit_code = match cli.format.parse::<OutputFormat>() {
        Ok(output_format) => match execute_command(cli.command, cli.config, output_format).await {
            Ok(code) => code,
            Err(err) => {
                eprintln!("{} {err:#}", "error:".red().bold());
                exit_code_for(&err)
            }
        },
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::INVALID_INPUT
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging on stderr.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to info.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Routes a command to its handler.
async fn execute_command(
    command: Commands,
    config: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            inventory,
            output,
            yes,
            stdout,
        } => {
            let args = GenerateArgs {
                inventory,
                output,
                yes,
                stdout,
            };
            commands::generate::run(args, config, output_format).await
        }
        Commands::Inspect { inventory } => {
            commands::inspect::run(inventory, config, output_format).await
        }
        Commands::Config { action } => commands::config::run(action, config, output_format).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::parse_from([
            "typegen",
            "generate",
            "https://example.com/inventory",
            "--output",
            "src/api",
            "--yes",
        ]);
        let Commands::Generate {
            inventory,
            output,
            yes,
            stdout,
        } = cli.command
        else {
            panic!("Expected Generate command");
        };
        assert_eq!(inventory, "https://example.com/inventory");
        assert_eq!(output, Some(PathBuf::from("src/api")));
        assert!(yes);
        assert!(!stdout);
    }

    #[test]
    fn test_cli_parsing_generate_stdout() {
        let cli = Cli::parse_from(["typegen", "generate", "./inventory", "--stdout"]);
        assert!(matches!(cli.command, Commands::Generate { stdout: true, .. }));
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "typegen",
            "generate",
            "./inventory",
            "--stdout",
            "--output",
            "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_requires_inventory() {
        assert!(Cli::try_parse_from(["typegen", "generate"]).is_err());
    }

    #[test]
    fn test_cli_parsing_inspect() {
        let cli = Cli::parse_from(["typegen", "inspect", "./inventory"]);
        assert!(matches!(cli.command, Commands::Inspect { .. }));
    }

    #[test]
    fn test_cli_parsing_config_actions() {
        let cli = Cli::parse_from(["typegen", "config", "show"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Show
            }
        ));

        let cli = Cli::parse_from(["typegen", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Init { force: true }
            }
        ));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "typegen",
            "inspect",
            "./inventory",
            "--verbose",
            "--format",
            "json",
            "--config",
            "/tmp/typegen.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/typegen.toml")));
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["typegen", "config", "path"]);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::parse_from(["typegen", "completions", "zsh"]);
        let Commands::Completions { shell } = cli.command else {
            panic!("Expected Completions command");
        };
        assert_eq!(shell, Shell::Zsh);
    }
}
