/// Name shared by the binary, the config file and the environment prefix.
pub const APP_NAME: &str = "vcf2csv";

/// Optional TOML file read from the working directory.
pub const CONFIG_FILE_NAME: &str = const_str::concat!(APP_NAME, ".toml");

/// Prefix for environment overrides, e.g. `VCF2CSV_EXPORT__ON_ERROR=skip`.
pub const ENV_PREFIX: &str = "VCF2CSV";

/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
