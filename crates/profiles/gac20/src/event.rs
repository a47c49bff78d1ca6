//! Event rules.
//!
//! Target rules on values (`not_empty`, `ean18`, `length`) only run once the event has
//! exactly one target of each required type; otherwise the presence rules already report.

use crate::{pattern_rule, rule};
use gac_kernel::Constraint;
use gac_kernel::domain::constants::{POWER_SERVICE_LOCATION, VEN_NAME};
use gac_kernel::domain::{Event, EventPayloadDescriptor, EventPayloadType, Target, Unit};
use regex::Regex;
use std::sync::LazyLock;

static EAN18: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^EAN\d{15}$"));

const VEN_NAME_MAX_CHARS: usize = 128;

pub(crate) fn constraints() -> Vec<Constraint> {
    vec![
        rule(
            "event.priority.unset",
            "priority",
            "The event must not have a priority set for GAC 2.0 compliance",
            |e: &Event| e.priority.is_none(),
        ),
        rule(
            "event.interval_period.consistent",
            "intervals",
            "'interval_period' must either be set on the event-level, or for each interval.",
            interval_period_consistent,
        ),
        rule(
            "event.targets.power_service_location.present",
            "targets",
            "The event must contain a POWER_SERVICE_LOCATION target.",
            |e: &Event| e.targets_of(POWER_SERVICE_LOCATION).next().is_some(),
        ),
        rule(
            "event.targets.ven_name.present",
            "targets",
            "The event must contain a VEN_NAME target.",
            |e: &Event| e.targets_of(VEN_NAME).next().is_some(),
        ),
        rule(
            "event.targets.power_service_location.single",
            "targets",
            "The event must contain exactly one POWER_SERVICE_LOCATION target.",
            |e: &Event| e.targets_of(POWER_SERVICE_LOCATION).count() <= 1,
        ),
        rule(
            "event.targets.ven_name.single",
            "targets",
            "The event must contain exactly one VEN_NAME target.",
            |e: &Event| e.targets_of(VEN_NAME).count() <= 1,
        ),
        rule(
            "event.targets.power_service_location.not_empty",
            "targets",
            "The POWER_SERVICE_LOCATION target value may not be empty.",
            |e: &Event| single_targets(e).is_none_or(|(psl, _)| !psl.values.is_empty()),
        ),
        pattern_rule(
            "event.targets.power_service_location.ean18",
            "targets",
            "The POWER_SERVICE_LOCATION target value must be a list of 'EAN18' values.",
            &EAN18,
            |e: &Event, ean18: &Regex| {
                single_targets(e).is_none_or(|(psl, _)| psl.values.iter().all(|v| ean18.is_match(v)))
            },
        ),
        rule(
            "event.targets.ven_name.not_empty",
            "targets",
            "The VEN_NAME target value may not be empty.",
            |e: &Event| single_targets(e).is_none_or(|(_, ven)| !ven.values.is_empty()),
        ),
        rule(
            "event.targets.ven_name.length",
            "targets",
            "The VEN_NAME target value must be a list of 'VEN name' values (between 1 and 128 characters).",
            |e: &Event| {
                single_targets(e).is_none_or(|(_, ven)| {
                    ven.values.iter().all(|v| (1..=VEN_NAME_MAX_CHARS).contains(&v.chars().count()))
                })
            },
        ),
        rule(
            "event.payload_descriptor.present",
            "payload_descriptors",
            "The event must have a payload descriptor.",
            |e: &Event| e.payload_descriptors.is_some(),
        ),
        rule(
            "event.payload_descriptor.single",
            "payload_descriptors",
            "The event must have exactly one payload descriptor.",
            |e: &Event| e.payload_descriptors.as_ref().is_none_or(|d| d.len() == 1),
        ),
        rule(
            "event.payload_descriptor.type",
            "payload_descriptors",
            "The payload descriptor must have a payload type of 'IMPORT_CAPACITY_LIMIT'.",
            |e: &Event| {
                first_descriptor(e)
                    .is_none_or(|d| d.payload_type == EventPayloadType::ImportCapacityLimit)
            },
        ),
        rule(
            "event.payload_descriptor.units",
            "payload_descriptors",
            "The payload descriptor must have a units of 'KW' (case sensitive).",
            |e: &Event| first_descriptor(e).is_none_or(|d| d.units == Some(Unit::Kw)),
        ),
        rule(
            "event.intervals.present",
            "intervals",
            "The event must have at least one interval.",
            |e: &Event| !e.intervals.is_empty(),
        ),
        rule(
            "event.intervals.increasing_ids",
            "intervals",
            "The event interval must have an id value that is strictly increasing.",
            |e: &Event| e.intervals.windows(2).all(|pair| pair[1].id > pair[0].id),
        ),
        rule(
            "event.intervals.single_payload",
            "intervals",
            "The event interval must have exactly one payload.",
            |e: &Event| e.intervals.iter().all(|i| i.payloads.len() == 1),
        ),
        rule(
            "event.intervals.payload_type",
            "intervals",
            "The event interval payload must have a payload type of 'IMPORT_CAPACITY_LIMIT'.",
            |e: &Event| {
                e.intervals.iter().all(|i| match i.payloads.as_slice() {
                    [payload] => payload.payload_type == EventPayloadType::ImportCapacityLimit,
                    _ => true,
                })
            },
        ),
    ]
}

/// Either the event carries the period once, or every interval carries its own.
fn interval_period_consistent(event: &Event) -> bool {
    if event.interval_period.is_some() {
        event.intervals.iter().all(|i| i.interval_period.is_none())
    } else {
        event.intervals.iter().all(|i| i.interval_period.is_some())
    }
}

/// The `POWER_SERVICE_LOCATION` and `VEN_NAME` targets, when there is exactly one of each.
fn single_targets(event: &Event) -> Option<(&Target, &Target)> {
    Some((single(event.targets_of(POWER_SERVICE_LOCATION))?, single(event.targets_of(VEN_NAME))?))
}

fn single<'a>(mut targets: impl Iterator<Item = &'a Target>) -> Option<&'a Target> {
    let first = targets.next()?;
    targets.next().is_none().then_some(first)
}

fn first_descriptor(event: &Event) -> Option<&EventPayloadDescriptor> {
    event.payload_descriptors.as_ref().and_then(|d| d.first())
}
