use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcf2csv_app::cli::Cli;
use vcf2csv_app::export::{ExportOptions, census, export};
use vcf2csv_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    // stdout may carry the CSV
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();

    let cli = Cli::parse();

    let mut settings = load_config(cli.config.as_deref())?;
    cli.apply(&mut settings);

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level));
    match filter {
        Ok(filter) => {
            if let Err(e) = filter_handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(_) => {
            tracing::warn!(
                level = %settings.logging.level,
                "Invalid log level in config, keeping info"
            );
        }
    }

    tracing::debug!(settings = ?settings, "Configuration loaded");

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    if cli.census {
        let census = census(input)?;
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &census)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    export(input, output, &ExportOptions::from(&settings.export))?;

    Ok(())
}
