//! # gac-check
//!
//! Validates OpenADR 3 JSON documents against the compliance profiles enabled in
//! configuration. Exits with `0` when every document is compliant, `1` when at least one
//! violation was found and `2` when a file could not be processed.

mod args;
mod document;
mod output;

use crate::args::Cli;
use crate::document::Document;
use anyhow::{Context, Result};
use clap::Parser;
use gac::domain::ProfileSet;
use gac::domain::config::ComplianceConfig;
use gac::kernel::ValidatorPluginRegistry;
use gac::kernel::config::load_config;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            let _ = writeln!(io::stderr(), "error: {err:#}");
            ExitCode::from(2)
        },
    }
}

/// Returns `Ok(false)` when any document has violations.
fn run(cli: &Cli) -> Result<bool> {
    let mut cfg: ComplianceConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    apply_overrides(&mut cfg, cli);

    let _log = gac_logger::init_from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let registry = ValidatorPluginRegistry::with_config(cfg.validation);
    gac::init(&registry, cfg.profiles.enabled)?;

    let mut out = io::stdout().lock();
    let mut compliant = true;

    for file in &cli.files {
        let body = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .with_context(|| format!("{} is not valid JSON", file.display()))?;

        let is_array = value.is_array();
        for (position, value) in document::split(value).into_iter().enumerate() {
            let document = Document::parse(value, cli.kind.kind())
                .with_context(|| format!("{}[{position}]", file.display()))?;

            let result = registry.validate(document.object());
            debug!(file = %file.display(), kind = %result.kind(), valid = result.is_valid(), "Validated");
            compliant &= result.is_valid();

            let index = is_array.then_some(position);
            output::write_result(&mut out, file, index, &result, cli.json)?;
        }
    }

    out.flush()?;
    Ok(compliant)
}

fn apply_overrides(cfg: &mut ComplianceConfig, cli: &Cli) {
    if cli.fail_fast {
        cfg.validation.fail_fast = true;
    }
    if !cli.profiles.is_empty() {
        cfg.profiles.enabled = cli.profiles.iter().fold(ProfileSet::empty(), |set, named| set | *named);
    }
    if let Some(level) = &cli.log_level {
        cfg.logging.level.clone_from(level);
    }
}
