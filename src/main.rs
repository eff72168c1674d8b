mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use courier_income::data;
use courier_income::income::{self, ColumnLayout, IncomeError, Registry};

#[derive(Parser)]
#[command(
    name = "courier-income",
    version,
    about = "Extract self-employment income from bank activity."
)]
struct Cli {
    /// Bank activity in CSV format, without a header row
    csvfile: PathBuf,
    /// Tabulate the matched deposits with per-source and grand totals
    #[arg(short, long)]
    table: bool,
    /// Income source as NAME=PATTERN (regex); replaces the defaults, first match wins
    #[arg(short, long = "source", value_name = "NAME=PATTERN", value_parser = parse_source)]
    sources: Vec<(String, String)>,
    /// Also list deposits that matched no income source
    #[arg(short, long)]
    unmatched: bool,
    /// Warn about and skip malformed rows instead of aborting
    #[arg(long)]
    skip_invalid: bool,
}

fn parse_source(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, pattern)) if !name.is_empty() && !pattern.is_empty() => {
            Ok((name.to_owned(), pattern.to_owned()))
        },
        _ => Err(format!("expected NAME=PATTERN, got '{}'", arg)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let registry = if cli.sources.is_empty() {
        Registry::default()
    } else {
        Registry::from_patterns(cli.sources)?
    };
    let layout = ColumnLayout::default();

    println!("reading {}...", cli.csvfile.display());
    let rows = data::read_rows(&cli.csvfile)?;
    let transactions = data::load_transactions(&rows, &layout, cli.skip_invalid)?;
    let aggregation = income::aggregate(transactions, &registry)?;

    if cli.unmatched && !aggregation.unmatched().is_empty() {
        println!("{}\n", output::unmatched(aggregation.unmatched()));
    }

    let aggregation = match aggregation.require_matches() {
        Ok(aggregation) => aggregation,
        Err(IncomeError::NoDeposits) => {
            println!("No deposits found!");
            return Ok(());
        },
        Err(IncomeError::NoMatchingTransactions { .. }) => {
            println!("No matching transactions found!");
            return Ok(());
        },
        Err(err) => return Err(err.into()),
    };

    println!("{}", output::found(aggregation.matched()));

    let view = income::build(&aggregation);
    println!("\n{}", output::summary(&view));

    if cli.table {
        println!("\n{}", output::table(&view));
    }

    Ok(())
}
