//! `leontief` - CLI for input-output demand-shock impact analysis.
//!
//! Loads a sectoral transaction table from CSV, derives the technical
//! coefficients and the Leontief inverse, and either propagates a
//! demand shock (`shock`), exports the inverse (`inverse`), or lists
//! the sectors (`sectors`).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leontief_core::display::report;
use leontief_core::io::export;
use leontief_core::{
    load_transaction_table, propagate, rank_impacts, technical_coefficients, DemandShock,
    InversionOptions, LeontiefInverse,
};

#[derive(Parser)]
#[command(
    name = "leontief",
    version,
    about = "Leontief input-output demand-shock impact analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sector indices and names from a transaction table
    Sectors {
        /// Path to the transaction-table CSV
        input: PathBuf,
    },

    /// Propagate a demand shock and report ranked sector impacts
    Shock {
        /// Path to the transaction-table CSV
        input: PathBuf,

        /// Index of the shocked sector (see `sectors`)
        #[arg(long)]
        sector: usize,

        /// Demand change in the table's currency units; negative
        /// values model a contraction
        #[arg(long, allow_hyphen_values = true)]
        magnitude: f64,

        /// How many ranked sectors to print
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Also write the full ranking to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Reject (I - A) whose condition estimate exceeds this
        #[arg(long, default_value_t = 1e12)]
        condition_limit: f64,
    },

    /// Compute the total-requirements matrix and export it as CSV
    Inverse {
        /// Path to the transaction-table CSV
        input: PathBuf,

        #[arg(long, default_value = "leontief_inverse.csv")]
        output: PathBuf,

        /// Reject (I - A) whose condition estimate exceeds this
        #[arg(long, default_value_t = 1e12)]
        condition_limit: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leontief_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> leontief_core::Result<()> {
    match cli.command {
        Commands::Sectors { input } => {
            let table = load_transaction_table(&input)?;
            print!("{}", report::format_sector_list(table.sectors()));
        }

        Commands::Shock {
            input,
            sector,
            magnitude,
            top,
            output,
            format,
            condition_limit,
        } => {
            let table = load_transaction_table(&input)?;
            let coefficients = technical_coefficients(&table);
            let inverse =
                LeontiefInverse::compute(&coefficients, &InversionOptions { condition_limit })?;

            let shock = DemandShock::new(sector, magnitude);
            let impact = propagate(&inverse, &shock)?;
            let result = rank_impacts(&impact, table.sectors(), &shock)?;

            match format {
                OutputFormat::Table => print!("{}", report::format_impact_report(&result, top)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }

            if let Some(path) = output {
                export::write_impact_ranking(&path, &result)?;
                println!("Ranking saved to {}", path.display());
            }
        }

        Commands::Inverse {
            input,
            output,
            condition_limit,
        } => {
            let table = load_transaction_table(&input)?;
            let coefficients = technical_coefficients(&table);
            let inverse =
                LeontiefInverse::compute(&coefficients, &InversionOptions { condition_limit })?;

            export::write_leontief_matrix(&output, table.sectors(), &inverse)?;
            let n = table.sector_count();
            println!("Leontief inverse ({n} x {n}) saved to {}", output.display());
        }
    }
    Ok(())
}
