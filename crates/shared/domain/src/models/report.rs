use crate::kind::ObjectKind;
use crate::models::common::{Interval, IntervalPeriod, PayloadValues};
use crate::object::{DomainObject, Model};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// A report sent by a VEN in response to an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "programID")]
    pub program_id: String,
    #[serde(rename = "eventID")]
    pub event_id: String,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
    #[serde(default)]
    pub resources: Vec<ReportResource>,
}

/// Reported values for one resource behind the VEN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResource {
    pub resource_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_period: Option<IntervalPeriod>,
    #[serde(default)]
    pub intervals: Vec<Interval<ReportPayload>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    #[serde(rename = "type")]
    pub payload_type: String,
    #[serde(default)]
    pub values: PayloadValues,
}

impl DomainObject for Report {
    fn kind(&self) -> ObjectKind {
        Self::MODEL.specialize(self.id.is_some())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Model for Report {
    const MODEL: ObjectKind = ObjectKind::Report;
}
