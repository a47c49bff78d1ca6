//! Program rules. Each field reports at most one violation.

use crate::{pattern_rule, rule};
use gac_kernel::Constraint;
use gac_kernel::domain::Program;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

static PROGRAM_TYPE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^DSO_CPO_INTERFACE-\d+\.\d+\.\d+$"));

const RETAILER_NAME_CHARS: RangeInclusive<usize> = 2..=128;

pub(crate) fn constraints() -> Vec<Constraint> {
    vec![
        rule(
            "program.retailer_name.present",
            "retailer_name",
            "The program must have a retailer name.",
            |p: &Program| p.retailer_name.is_some(),
        ),
        rule(
            "program.retailer_name.length",
            "retailer_name",
            "The retailer name must be between 2 and 128 characters long.",
            |p: &Program| {
                p.retailer_name
                    .as_deref()
                    .is_none_or(|name| RETAILER_NAME_CHARS.contains(&name.chars().count()))
            },
        ),
        rule(
            "program.program_type.present",
            "program_type",
            "The program must have a program type.",
            |p: &Program| p.program_type.is_some(),
        ),
        pattern_rule(
            "program.program_type.format",
            "program_type",
            "The program type must follow the format DSO_CPO_INTERFACE-x.x.x.",
            &PROGRAM_TYPE,
            |p: &Program, format: &Regex| p.program_type.as_deref().is_none_or(|t| format.is_match(t)),
        ),
        rule(
            "program.binding_events.required",
            "binding_events",
            "The program must have bindingEvents set to true.",
            |p: &Program| p.binding_events,
        ),
    ]
}
