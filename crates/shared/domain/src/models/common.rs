use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `(type, values)` pair narrowing which resources an object addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Target {
    pub fn new<I, S>(kind: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { kind: kind.into(), values: values.into_iter().map(Into::into).collect() }
    }
}

/// Start and (ISO 8601) duration of an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalPeriod {
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomize_start: Option<String>,
}

impl IntervalPeriod {
    #[must_use]
    pub fn new(start: DateTime<Utc>, duration: impl Into<String>) -> Self {
        Self { start, duration: Some(duration.into()), randomize_start: None }
    }
}

/// One interval of an event or report, carrying typed payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval<P> {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_period: Option<IntervalPeriod>,
    #[serde(default = "Vec::new")]
    pub payloads: Vec<P>,
}

/// A single payload value. OpenADR allows numbers, booleans and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<f64> for PayloadValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

pub type PayloadValues = Vec<PayloadValue>;

/// Event payload types. Unknown spellings are kept verbatim in [`EventPayloadType::Private`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayloadType {
    Simple,
    Price,
    ChargeStateSetpoint,
    DispatchSetpoint,
    DispatchSetpointRelative,
    ControlSetpoint,
    ExportPrice,
    GhgEmissions,
    Curve,
    Olu,
    ImportCapacitySubscription,
    ImportCapacityReservation,
    ImportCapacityReservationFee,
    ImportCapacityAvailable,
    ImportCapacityAvailablePrice,
    ExportCapacitySubscription,
    ExportCapacityReservation,
    ExportCapacityReservationFee,
    ExportCapacityAvailable,
    ExportCapacityAvailablePrice,
    ImportCapacityLimit,
    ExportCapacityLimit,
    AlertGridEmergency,
    AlertBlackStart,
    AlertPossibleOutage,
    AlertFlexAlert,
    AlertFire,
    AlertFreezing,
    AlertWind,
    AlertTsunami,
    AlertAirQuality,
    AlertOther,
    CtaDemandResponse,
    #[serde(untagged)]
    Private(String),
}

/// Units of measure. Matching is case sensitive: `"kw"` is a private unit, not `KW`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "KWH")]
    Kwh,
    #[serde(rename = "GHG")]
    Ghg,
    #[serde(rename = "VOLTS")]
    Volts,
    #[serde(rename = "AMPS")]
    Amps,
    #[serde(rename = "CELSIUS")]
    Celsius,
    #[serde(rename = "FAHRENHEIT")]
    Fahrenheit,
    #[serde(rename = "PERCENT")]
    Percent,
    #[serde(rename = "KW")]
    Kw,
    #[serde(rename = "KVAH")]
    Kvah,
    #[serde(rename = "KVARH")]
    Kvarh,
    #[serde(rename = "KVA")]
    Kva,
    #[serde(rename = "KVAR")]
    Kvar,
    #[serde(untagged)]
    Private(String),
}
