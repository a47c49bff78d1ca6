//! # CLI Argument Definitions

use clap::{Parser, ValueEnum};
use gac::domain::{ObjectKind, ProfileSet};
use std::path::PathBuf;

/// Validates OpenADR 3 JSON documents against the enabled compliance profiles.
#[derive(Debug, Parser)]
#[command(name = "gac-check")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    /// JSON files holding one object or an array of objects
    #[arg(required = true)]
    pub(crate) files: Vec<PathBuf>,

    /// Object type of the documents (detected from `objectType` or field names by default)
    #[arg(short, long, value_enum, default_value_t = KindArg::Auto)]
    pub(crate) kind: KindArg,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Profiles to enable, overriding the configuration (e.g. `gac20` or `all`)
    #[arg(short, long, value_delimiter = ',')]
    pub(crate) profiles: Vec<ProfileSet>,

    /// Stop at the first violation of each document
    #[arg(long)]
    pub(crate) fail_fast: bool,

    /// Print one JSON line per document instead of text
    #[arg(long)]
    pub(crate) json: bool,

    /// Log filter directive, overriding the configuration (e.g. `debug`)
    #[arg(long)]
    pub(crate) log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum KindArg {
    Auto,
    Event,
    Program,
    Ven,
    Report,
}

impl KindArg {
    /// Root kind to parse as, `None` when it must be detected.
    pub(crate) const fn kind(self) -> Option<ObjectKind> {
        match self {
            Self::Auto => None,
            Self::Event => Some(ObjectKind::Event),
            Self::Program => Some(ObjectKind::Program),
            Self::Ven => Some(ObjectKind::Ven),
            Self::Report => Some(ObjectKind::Report),
        }
    }
}
