use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use section_bf::{SearchConfig, SectionSearch, WriterSink};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "section_bf",
    about = "Search 𝔽_43[t] for sections of y^2 = x^3 + t^7 x + 1"
)]
struct Cli {
    /// Fixed coefficient of t^4 in x (enumerates x of degree 4 instead of < 4)
    leading_coeff: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = search_config(&cli);
    let search = SectionSearch::new(config).context("invalid search configuration")?;

    let stdout = io::stdout();
    let mut sink = WriterSink::new(BufWriter::new(stdout.lock()));
    search.run(&mut sink).context("section search failed")?;

    Ok(())
}

fn search_config(cli: &Cli) -> SearchConfig {
    let config = SearchConfig::default();
    match cli.leading_coeff {
        Some(coeff) => config.with_leading_coeff(coeff),
        None => config,
    }
}
