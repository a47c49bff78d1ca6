use gac::kernel::ValidationResult;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// A validated document as printed with `--json`.
#[derive(Debug, Serialize)]
struct Line<'a> {
    file: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    valid: bool,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// Writes one validation outcome to `out`.
///
/// `index` is the position inside a top-level array, `None` for single-object files.
pub(crate) fn write_result(
    out: &mut impl Write,
    file: &Path,
    index: Option<usize>,
    result: &ValidationResult,
    json: bool,
) -> io::Result<()> {
    if json {
        let line = Line { file, index, valid: result.is_valid(), result };
        serde_json::to_writer(&mut *out, &line)?;
        return writeln!(out);
    }

    let name = match index {
        Some(index) => format!("{}[{index}]", file.display()),
        None => file.display().to_string(),
    };

    if result.is_valid() {
        return writeln!(out, "{name}: OK ({}, {} constraints)", result.kind(), result.evaluated());
    }

    let count = result.violations().len();
    let noun = if count == 1 { "error" } else { "errors" };
    writeln!(out, "{name}: {count} validation {noun} for {}", result.kind())?;
    for violation in result.violations() {
        writeln!(out, "  {violation}")?;
    }
    Ok(())
}
