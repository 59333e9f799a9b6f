use thiserror::Error;

/// Errors loading `vcf2csv` settings.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A source could not be read or did not match [`crate::config::Settings`].
    #[error("Failed to load configuration: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
