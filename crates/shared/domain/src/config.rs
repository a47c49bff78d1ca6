use crate::profiles::ProfileSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level compliance configuration shared by the CLI and embedding services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComplianceConfigInner {
    pub validation: ValidationConfig,
    pub profiles: ProfilesConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ComplianceConfig {
    #[serde(flatten, default)]
    inner: Arc<ComplianceConfigInner>,
}

impl Deref for ComplianceConfig {
    type Target = ComplianceConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ComplianceConfig {
    fn deref_mut(&mut self) -> &mut ComplianceConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// How constraints are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Stop at the first violation instead of collecting all of them.
    pub fail_fast: bool,
    /// Turn panicking predicates into execution errors.
    pub catch_panics: bool,
}

/// Which built-in profiles are registered at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    pub enabled: ProfileSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"gac_kernel=debug"`.
    pub level: String,
    pub json: bool,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { fail_fast: false, catch_panics: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, path: None }
    }
}
