//! Decoder → normalizer → CSV pipeline.

use std::io::{Read, Write};

use anyhow::Context;
use vcf2csv_core::config::{ExportConfig, OnError};
use vcf2csv_rfc::rfc::vcard::Decoder;
use vcf2csv_service::diagnostics::{Census, log_diagnostics};
use vcf2csv_service::entry::COLUMNS;
use vcf2csv_service::normalize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub debug: bool,
    pub header: bool,
    pub on_error: OnError,
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            debug: config.debug,
            header: config.header,
            on_error: config.on_error,
        }
    }
}

/// Counts for one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: usize,
    pub skipped: usize,
}

/// ## Summary
/// Decodes every vCard in `reader`, normalizes it and writes one CSV row per
/// entry to `writer`.
///
/// Records are numbered from 1 in logs and errors.
///
/// ## Errors
/// - The input cannot be read or decoded. Decode errors end the run whatever
///   the error policy, since the stream cannot be resynchronized.
/// - A record fails to normalize under [`OnError::Halt`].
/// - Writing the CSV fails.
///
/// Rows written before an error are flushed.
#[tracing::instrument(skip_all, fields(header = options.header, on_error = ?options.on_error))]
pub fn export<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &ExportOptions,
) -> anyhow::Result<ExportSummary> {
    let decoder = Decoder::from_reader(reader).context("Failed to read vCard input")?;
    let mut csv = csv::Writer::from_writer(writer);

    if options.header {
        csv.write_record(COLUMNS)?;
    }

    let mut summary = ExportSummary::default();

    for (index, record) in decoder.enumerate() {
        let number = index + 1;

        let record = match record {
            Ok(record) => record,
            Err(error) => {
                csv.flush()?;
                return Err(error).context("Failed to decode vCard input");
            }
        };

        match normalize(record) {
            Ok(normalized) => {
                if options.debug {
                    log_diagnostics(number, &normalized);
                }
                csv.write_record(normalized.entry.to_row())?;
                summary.written += 1;
            }
            Err(error) => match options.on_error {
                OnError::Skip => {
                    tracing::warn!(record = number, %error, "Skipping record");
                    summary.skipped += 1;
                }
                OnError::Halt => {
                    csv.flush()?;
                    return Err(error)
                        .with_context(|| format!("Failed to normalize record {number}"));
                }
            },
        }
    }

    csv.flush()?;

    tracing::info!(
        written = summary.written,
        skipped = summary.skipped,
        "Export finished"
    );

    Ok(summary)
}

/// ## Summary
/// Decodes every vCard in `reader` and records how often each field occurs.
///
/// ## Errors
/// Returns an error if the input cannot be read or decoded.
#[tracing::instrument(skip_all)]
pub fn census<R: Read>(reader: R) -> anyhow::Result<Census> {
    let decoder = Decoder::from_reader(reader).context("Failed to read vCard input")?;
    let mut census = Census::new();
    let mut records = 0_usize;

    for record in decoder {
        census.observe(&record.context("Failed to decode vCard input")?);
        records += 1;
    }

    tracing::info!(records, "Census finished");

    Ok(census)
}
