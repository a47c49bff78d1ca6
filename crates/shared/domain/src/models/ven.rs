use crate::kind::ObjectKind;
use crate::models::common::Target;
use crate::object::{DomainObject, Model};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// A Virtual End Node: the client side receiving events on behalf of resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ven {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub ven_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
}

impl Ven {
    #[must_use]
    pub fn new(ven_name: impl Into<String>) -> Self {
        Self { ven_name: ven_name.into(), ..Self::default() }
    }
}

impl DomainObject for Ven {
    fn kind(&self) -> ObjectKind {
        Self::MODEL.specialize(self.id.is_some())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Model for Ven {
    const MODEL: ObjectKind = ObjectKind::Ven;
}
