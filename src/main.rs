use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ticketdesk::AccordionMode;
use ticketdesk::commands::{LsOptions, OutputOptions, cmd_config_set, cmd_config_show, cmd_ls};

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(about = "Support tickets as a filterable accordion")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tickets ordered by priority and recency
    #[command(visible_alias = "l")]
    Ls {
        /// Only show tickets whose title contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Accordion mode: single, multiple
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<AccordionMode>,

        /// Toggle the panel of this ticket id (repeatable)
        #[arg(short, long = "open", value_name = "ID")]
        open: Vec<String>,

        /// Open the panel at this position in the list (repeatable)
        #[arg(long = "open-index", value_name = "N")]
        open_index: Vec<usize>,

        /// Close every visible panel (multiple mode only)
        #[arg(long)]
        close_all: bool,

        /// Read tickets from a YAML or JSON file
        #[arg(short, long, value_name = "FILE")]
        source: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value (mode, query, source.path, source.latency_ms)
    Set {
        key: String,
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_mode(s: &str) -> Result<AccordionMode, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid mode. Must be one of: {}",
            AccordionMode::ALL_STRINGS.join(", ")
        )
    })
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ls {
            query,
            mode,
            open,
            open_index,
            close_all,
            source,
            json,
        } => {
            cmd_ls(
                LsOptions {
                    query,
                    mode,
                    toggle: open,
                    open_indices: open_index,
                    close_all,
                    source,
                },
                OutputOptions { json },
            )
            .await
        }

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(OutputOptions { json }),
            ConfigAction::Set { key, value, json } => {
                cmd_config_set(&key, &value, OutputOptions { json })
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
