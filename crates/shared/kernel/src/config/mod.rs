use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Environment prefix for overrides, e.g. `GAC__VALIDATION__FAIL_FAST=true`.
pub const ENV_PREFIX: &str = "GAC";

/// Custom error type for config loading.
#[gac_derive::gac_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from an optional file layered with environment overrides.
///
/// 1. **File**: `path` when given (required to exist), otherwise an optional `gac.*` file
///    in the working directory. The format follows the extension (TOML, JSON, YAML).
/// 2. **Environment**: variables prefixed with `GAC__`; nested keys are separated by
///    double underscores (`GAC__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Fails when an explicit file is missing or the merged sources do not match `T`.
///
/// # Example
/// ```rust
/// use gac_kernel::config::load_config;
/// use gac_kernel::domain::config::ComplianceConfig;
///
/// let cfg: ComplianceConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.validation.catch_panics);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => File::from(path.as_ref()).required(true),
        None => File::with_name("gac").required(false),
    };

    let builder = Config::builder().add_source(file).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .convert_case(config::Case::Snake)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("profiles.enabled"),
    );

    match &path {
        Some(path) => info!("Loading config from {}", path.as_ref().display()),
        None => info!("Loading config from environment"),
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
