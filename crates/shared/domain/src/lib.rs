//! # Domain Models
//!
//! OpenADR 3 domain types as consumed by the compliance profiles. This crate stands in for
//! the base protocol library: it owns the data shapes and the object-kind hierarchy, never
//! validation rules. Keep it lean: no I/O, no logic beyond simple helpers.

pub mod config;
pub mod constants;
pub mod kind;
pub mod models;
pub mod object;
pub mod profiles;

pub use kind::ObjectKind;
pub use models::common::{
    EventPayloadType, Interval, IntervalPeriod, PayloadValue, PayloadValues, Target, Unit,
};
pub use models::event::{Event, EventPayload, EventPayloadDescriptor};
pub use models::program::Program;
pub use models::report::{Report, ReportResource};
pub use models::ven::Ven;
pub use object::{DomainObject, Model};
pub use profiles::{ProfileSet, UnknownProfile};
