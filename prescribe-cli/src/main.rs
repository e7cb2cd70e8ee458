use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use prescribe_core::CostConfig;
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod input;
mod render;

use config::Config;
use error::CliResult;

#[derive(Parser)]
#[command(name = "prescribe")]
#[command(about = "prescribe - minimum-cost edit prescriptions, step by step")]
#[command(version)]
#[command(long_about = "
prescribe computes the cheapest sequence of insertions, deletions, replacements
and matches that turns one word into another, and shows every intermediate state.

Examples:
  prescribe                                   (prompts for both words)
  prescribe table --original cat --target cats
  prescribe distance kitten sitting --replace-cost 1 --insert-cost 1 --delete-cost 1
  prescribe replay flaw lawn DMMMI
  prescribe config --example --output prescribe.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two words and print the step-by-step table (the default)
    Table {
        /// Word to transform (prompted for when omitted)
        #[arg(long)]
        original: Option<String>,

        /// Word to reach (prompted for when omitted)
        #[arg(long)]
        target: Option<String>,

        /// Do not underline the element touched by each step
        #[arg(long)]
        no_highlight: bool,

        #[command(flatten)]
        costs: CostArgs,
    },

    /// Print the optimal cost and the prescription tags
    Distance {
        /// Word to transform
        original: String,

        /// Word to reach
        target: String,

        #[command(flatten)]
        costs: CostArgs,
    },

    /// Replay a hand-written prescription such as 'MMRI'
    Replay {
        /// Word to transform
        original: String,

        /// Word to reach
        target: String,

        /// Operation tags: M (match), R (replace), I (insert), D (delete)
        prescription: String,

        /// Do not underline the element touched by each step
        #[arg(long)]
        no_highlight: bool,

        #[command(flatten)]
        costs: CostArgs,
    },

    /// Print the configuration in effect
    Config {
        /// Print the default configuration instead
        #[arg(long)]
        example: bool,

        /// Write the configuration to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Cost overrides applied on top of the configuration file.
#[derive(Args, Clone, Debug, Default)]
pub struct CostArgs {
    /// Cost of replacing one element
    #[arg(long)]
    pub replace_cost: Option<u32>,

    /// Cost of inserting one element
    #[arg(long)]
    pub insert_cost: Option<u32>,

    /// Cost of deleting one element
    #[arg(long)]
    pub delete_cost: Option<u32>,

    /// Cost of keeping a matching element
    #[arg(long)]
    pub match_cost: Option<u32>,
}

impl CostArgs {
    pub fn apply(&self, mut costs: CostConfig) -> CostConfig {
        if let Some(cost) = self.replace_cost {
            costs.replace_cost = cost;
        }
        if let Some(cost) = self.insert_cost {
            costs.insert_cost = cost;
        }
        if let Some(cost) = self.delete_cost {
            costs.delete_cost = cost;
        }
        if let Some(cost) = self.match_cost {
            costs.match_cost = cost;
        }
        costs
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

fn run(command: Commands, mut config: Config) -> CliResult<()> {
    match command {
        Commands::Table {
            original,
            target,
            no_highlight,
            costs,
        } => {
            config.costs = costs.apply(config.costs);
            commands::table::execute(&config, original, target, no_highlight)
        }

        Commands::Distance {
            original,
            target,
            costs,
        } => {
            config.costs = costs.apply(config.costs);
            commands::distance::execute(&config, original, target)
        }

        Commands::Replay {
            original,
            target,
            prescription,
            no_highlight,
            costs,
        } => {
            config.costs = costs.apply(config.costs);
            commands::replay::execute(&config, original, target, prescription, no_highlight)
        }

        Commands::Config { example, output } => commands::config::execute(&config, example, output),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Table {
        original: None,
        target: None,
        no_highlight: false,
        costs: CostArgs::default(),
    });

    if let Err(err) = run(command, config) {
        error::print_error_and_exit(&err);
    }

    Ok(())
}
