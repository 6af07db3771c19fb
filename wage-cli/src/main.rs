use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use wage_cli::console::Console;
use wage_cli::app::CompareWith;
use wage_cli::views::main_menu;
use wage_cli::{app, logging};
use wage_core::CompensationLedger;
use wage_core::db::{DEFAULT_BACKEND, DEFAULT_DATABASE, DbConfig};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// True hourly wage calculator.
///
/// Works out what a job really pays per hour once commuting time and cost
/// are counted, and keeps a monthly log of the results.
#[derive(Debug, Parser)]
#[command(name = "true-wage", version)]
struct Cli {
    /// Database backend to use.
    #[arg(long, default_value = DEFAULT_BACKEND)]
    backend: String,

    /// Database connection string.
    /// For SQLite this is a file path (e.g. `compensation_data.db`) or `:memory:`.
    #[arg(long, default_value = DEFAULT_DATABASE)]
    db: String,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Numbered menu for entering, updating and reporting (default).
    Interactive,
    /// Print every stored record, newest first.
    List,
    /// Print wage statistics per person and the top earner's trend.
    Report,
    /// Recompute one stored record in full and print its monthly history.
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Calculate and store every profile in a CSV file.
    Import {
        #[arg(long)]
        file: PathBuf,
    },
    /// Price a commute described in a TOML scenario file. Needs no database.
    Scenario {
        #[arg(long)]
        file: PathBuf,

        /// Compare against the file's alternative commute.
        #[arg(long)]
        alternative: bool,

        /// Compare against a fresh copy of the current commute instead.
        #[arg(long, conflicts_with = "alternative")]
        copy_current: bool,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref())?;

    let command = cli.command.unwrap_or(Command::Interactive);
    let db_config = DbConfig::new(cli.backend, cli.db);
    debug!(?command, backend = %db_config.backend, "starting");
    let mut stdout = io::stdout().lock();

    match command {
        Command::Scenario {
            file,
            alternative,
            copy_current,
        } => {
            let compare = if copy_current {
                CompareWith::CurrentCopy
            } else if alternative {
                CompareWith::Alternative
            } else {
                CompareWith::Nothing
            };
            app::run_scenario(&file, compare, &mut stdout)?;
        }
        Command::Interactive => {
            let repo = app::open_repository(&db_config).await?;
            let mut console = Console::new(io::stdin().lock(), stdout);
            main_menu::run(&mut console, &CompensationLedger::new(&*repo)).await?;
        }
        Command::List => {
            let repo = app::open_repository(&db_config).await?;
            app::list_records(&CompensationLedger::new(&*repo), &mut stdout).await?;
        }
        Command::Report => {
            let repo = app::open_repository(&db_config).await?;
            app::print_report(&CompensationLedger::new(&*repo), &mut stdout).await?;
        }
        Command::Show { id } => {
            let repo = app::open_repository(&db_config).await?;
            app::show_record(&CompensationLedger::new(&*repo), id, &mut stdout).await?;
        }
        Command::Import { file } => {
            let repo = app::open_repository(&db_config).await?;
            app::import_profiles(&CompensationLedger::new(&*repo), &file, &mut stdout).await?;
        }
    }
    Ok(())
}
