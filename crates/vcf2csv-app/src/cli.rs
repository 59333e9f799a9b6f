use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;
use vcf2csv_core::config::{OnError, Settings};

#[derive(Debug, Parser)]
#[command(name = "vcf2csv", version, about = "Convert vCard contacts to a CSV address list")]
pub struct Cli {
    /// vCard file to read. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// CSV file to write. Writes stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file, instead of `vcf2csv.toml` in the working directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log resolved labels and unused fields for every record.
    #[arg(long)]
    pub debug: bool,

    /// Write a header row.
    #[arg(long)]
    pub header: bool,

    /// What to do with a record that cannot be normalized.
    #[arg(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,

    /// Print the maximum occurrences of each field as JSON instead of exporting.
    #[arg(long)]
    pub census: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicy {
    Halt,
    Skip,
}

impl From<ErrorPolicy> for OnError {
    fn from(policy: ErrorPolicy) -> Self {
        match policy {
            ErrorPolicy::Halt => Self::Halt,
            ErrorPolicy::Skip => Self::Skip,
        }
    }
}

impl Cli {
    /// Overrides loaded settings with the flags that were given.
    ///
    /// `--debug` raises a plain level below `debug` and never lowers one.
    /// A filter directive such as `warn,vcf2csv=trace` is kept as written.
    pub fn apply(&self, settings: &mut Settings) {
        if self.debug {
            settings.export.debug = true;
            if let Ok(level) = settings.logging.level.trim().parse::<Level>()
                && level < Level::DEBUG
            {
                settings.logging.level = Level::DEBUG.as_str().to_ascii_lowercase();
            }
        }
        if self.header {
            settings.export.header = true;
        }
        if let Some(policy) = self.on_error {
            settings.export.on_error = policy.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use vcf2csv_core::config::{ExportConfig, LoggingConfig};

    use super::*;

    fn settings() -> Settings {
        Settings {
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
            export: ExportConfig {
                debug: false,
                header: true,
                on_error: OnError::Skip,
            },
        }
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "vcf2csv",
            "contacts.vcf",
            "-o",
            "out.csv",
            "--on-error",
            "skip",
            "--header",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("contacts.vcf")));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.on_error, Some(ErrorPolicy::Skip));
        assert!(cli.header);
        assert!(!cli.census);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["vcf2csv", "--on-error", "retry"]).is_err());
    }

    #[test]
    fn absent_flags_keep_settings() {
        let cli = Cli::try_parse_from(["vcf2csv"]).unwrap();
        let mut settings = settings();

        cli.apply(&mut settings);

        assert_eq!(settings.logging.level, "warn");
        assert!(!settings.export.debug);
        assert!(settings.export.header);
        assert_eq!(settings.export.on_error, OnError::Skip);
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from(["vcf2csv", "--debug", "--on-error", "halt"]).unwrap();
        let mut settings = settings();

        cli.apply(&mut settings);

        assert_eq!(settings.logging.level, "debug");
        assert!(settings.export.debug);
        assert_eq!(settings.export.on_error, OnError::Halt);
    }

    #[test]
    fn debug_never_lowers_verbosity() {
        let cli = Cli::try_parse_from(["vcf2csv", "--debug"]).unwrap();

        for configured in ["trace", "TRACE", "debug", "warn,vcf2csv=trace"] {
            let mut settings = settings();
            settings.logging.level = configured.to_string();

            cli.apply(&mut settings);

            assert_eq!(settings.logging.level, configured);
            assert!(settings.export.debug);
        }
    }

    #[test]
    fn debug_raises_quieter_levels() {
        let cli = Cli::try_parse_from(["vcf2csv", "--debug"]).unwrap();

        for configured in ["error", "warn", "info"] {
            let mut settings = settings();
            settings.logging.level = configured.to_string();

            cli.apply(&mut settings);

            assert_eq!(settings.logging.level, "debug");
        }
    }
}
