use crate::kind::ObjectKind;
use crate::models::common::{IntervalPeriod, Target};
use crate::object::{DomainObject, Model};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// An OpenADR 3 program: the tariff or agreement events are published under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub program_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_long_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer_long_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_subdivision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_period: Option<IntervalPeriod>,
    #[serde(default)]
    pub binding_events: bool,
    #[serde(default)]
    pub local_price: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
}

impl Program {
    #[must_use]
    pub fn new(program_name: impl Into<String>) -> Self {
        Self { program_name: program_name.into(), ..Self::default() }
    }
}

impl DomainObject for Program {
    fn kind(&self) -> ObjectKind {
        Self::MODEL.specialize(self.id.is_some())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Model for Program {
    const MODEL: ObjectKind = ObjectKind::Program;
}
