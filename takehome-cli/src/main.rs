use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use takehome_cli::{csv_loader, report, schedule_file, utils};
use takehome_core::{FilingProfile, FilingType, LiabilityWorksheet, RateSchedule};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Take-home pay and tax liability estimator.
///
/// Computes social security, medicare, state disability, state income,
/// and federal income taxes for a single filer and prints the resulting
/// take-home income.
#[derive(Debug, Parser)]
struct Cli {
    /// Total gross income for the year. Accepts comma separators
    /// (e.g. `100,000`).
    #[arg(long, value_parser = utils::parse_money, required_unless_present = "batch")]
    income: Option<Decimal>,

    /// Pre-tax retirement (401k) contribution for the year.
    #[arg(long, value_parser = utils::parse_money, default_value = "0")]
    retirement: Decimal,

    /// Mortgage interest paid during the year.
    #[arg(long, value_parser = utils::parse_money, default_value = "0")]
    mortgage: Decimal,

    /// Property tax paid during the year.
    #[arg(long, value_parser = utils::parse_money, default_value = "0")]
    property_tax: Decimal,

    /// Filing type: `employee` (or `w2`) / `contractor` (or `1099`).
    #[arg(long, default_value = "employee")]
    filing: String,

    /// Built-in rate schedule edition to use.
    #[arg(long, default_value = "2020")]
    year: i32,

    /// TOML rate schedule file; overrides --year.
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// CSV file of profiles to estimate in one run. Rows carry their own
    /// filing types; the single-profile flags are ignored.
    #[arg(long)]
    batch: Option<PathBuf>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let schedule = match &cli.schedule {
        Some(path) => schedule_file::load_from_file(path)?,
        None => RateSchedule::for_tax_year(cli.year).ok_or_else(|| {
            anyhow::anyhow!("no built-in rate schedule for tax year {}", cli.year)
        })?,
    };
    debug!(tax_year = schedule.tax_year, "rate schedule loaded");

    let profiles = match &cli.batch {
        Some(path) => csv_loader::load_from_file(path)?,
        None => {
            let income = cli
                .income
                .ok_or_else(|| anyhow::anyhow!("--income is required without --batch"))?;
            let filing_type = FilingType::parse(&cli.filing)
                .ok_or_else(|| anyhow::anyhow!("unrecognized filing type '{}'", cli.filing))?;
            vec![FilingProfile {
                gross_income: income,
                filing_type,
                retirement_contribution: cli.retirement,
                mortgage_interest: cli.mortgage,
                property_tax: cli.property_tax,
            }]
        }
    };

    let worksheet = LiabilityWorksheet::new(&schedule);
    for (index, profile) in profiles.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let result = worksheet.calculate(profile)?;
        print!("{}", report::render(profile, &result));
    }

    Ok(())
}
