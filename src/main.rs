use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use meteo_summary::{generate_daily_summary, generate_summary, load_data_from_csv};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Summarise daily low/high Fahrenheit readings from a CSV file, in Celsius.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with a header row then `date,low,high` rows
    file: PathBuf,

    /// Which report to print
    #[arg(long, value_enum, default_value_t = Report::Both)]
    report: Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Overall extremes and averages
    Overview,
    /// Low and high of every day
    Daily,
    Both,
}

fn main() -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let records = load_data_from_csv(&args.file);

    if args.report != Report::Daily {
        print!("{}", generate_summary(&records)?);
    }
    if args.report == Report::Both {
        println!();
    }
    if args.report != Report::Overview {
        print!("{}", generate_daily_summary(&records)?);
    }

    Ok(())
}
