use crate::kind::ObjectKind;
use crate::models::common::{EventPayloadType, Interval, IntervalPeriod, PayloadValues, Target, Unit};
use crate::object::{DomainObject, Model};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// An OpenADR 3 event: instructions for the resources addressed by its targets.
///
/// `id` is assigned by the VTN; an event without one is a `NewEvent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "programID")]
    pub program_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_descriptors: Option<Vec<EventPayloadDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_period: Option<IntervalPeriod>,
    #[serde(default)]
    pub intervals: Vec<Interval<EventPayload>>,
}

impl Event {
    #[must_use]
    pub fn new(program_id: impl Into<String>, intervals: Vec<Interval<EventPayload>>) -> Self {
        Self { program_id: program_id.into(), intervals, ..Self::default() }
    }

    /// Targets of the given type (e.g. `POWER_SERVICE_LOCATION`).
    pub fn targets_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Target> + 'a {
        self.targets.iter().flatten().filter(move |t| t.kind == kind)
    }
}

/// Describes the payloads carried by the intervals of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayloadDescriptor {
    pub payload_type: EventPayloadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl EventPayloadDescriptor {
    #[must_use]
    pub const fn new(payload_type: EventPayloadType, units: Option<Unit>) -> Self {
        Self { payload_type, units, currency: None }
    }
}

/// A typed list of values within an event interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub payload_type: EventPayloadType,
    #[serde(default)]
    pub values: PayloadValues,
}

impl EventPayload {
    #[must_use]
    pub fn new(payload_type: EventPayloadType, values: PayloadValues) -> Self {
        Self { payload_type, values }
    }
}

impl DomainObject for Event {
    fn kind(&self) -> ObjectKind {
        Self::MODEL.specialize(self.id.is_some())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Model for Event {
    const MODEL: ObjectKind = ObjectKind::Event;
}
