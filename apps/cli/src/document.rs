use anyhow::{Context, Result, anyhow};
use gac::domain::{DomainObject, Event, ObjectKind, Program, Report, Ven};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One parsed OpenADR 3 object.
#[derive(Debug)]
pub(crate) enum Document {
    Event(Event),
    Program(Program),
    Ven(Ven),
    Report(Report),
}

impl Document {
    /// Parses `value` as `kind`, or as the detected kind when `kind` is `None`.
    pub(crate) fn parse(value: Value, kind: Option<ObjectKind>) -> Result<Self> {
        let kind = match kind {
            Some(kind) => kind,
            None => detect(&value).ok_or_else(|| {
                anyhow!("Cannot detect the object type, pass --kind explicitly")
            })?,
        };

        match kind.root() {
            ObjectKind::Event => from_value(value, kind).map(Self::Event),
            ObjectKind::Program => from_value(value, kind).map(Self::Program),
            ObjectKind::Ven => from_value(value, kind).map(Self::Ven),
            _ => from_value(value, kind).map(Self::Report),
        }
    }

    pub(crate) fn object(&self) -> &dyn DomainObject {
        match self {
            Self::Event(event) => event,
            Self::Program(program) => program,
            Self::Ven(ven) => ven,
            Self::Report(report) => report,
        }
    }
}

/// Splits a file body into its objects; a top-level array holds several.
pub(crate) fn split(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        value => vec![value],
    }
}

fn from_value<T: DeserializeOwned>(value: Value, kind: ObjectKind) -> Result<T> {
    serde_json::from_value(value).with_context(|| format!("Not a valid {kind} document"))
}

/// `objectType` wins; otherwise the first distinguishing field decides.
fn detect(value: &Value) -> Option<ObjectKind> {
    let object = value.as_object()?;

    if let Some(object_type) = object.get("objectType").and_then(Value::as_str) {
        return match object_type {
            "EVENT" => Some(ObjectKind::Event),
            "PROGRAM" => Some(ObjectKind::Program),
            "VEN" => Some(ObjectKind::Ven),
            "REPORT" => Some(ObjectKind::Report),
            _ => None,
        };
    }

    [
        ("venName", ObjectKind::Ven),
        ("programName", ObjectKind::Program),
        ("clientName", ObjectKind::Report),
        ("intervals", ObjectKind::Event),
    ]
    .into_iter()
    .find(|(field, _)| object.contains_key(*field))
    .map(|(_, kind)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_type_takes_precedence() {
        let value = json!({"objectType": "VEN", "programName": "p", "venName": "NL-ABC"});
        assert_eq!(detect(&value), Some(ObjectKind::Ven));
    }

    #[test]
    fn detection_falls_back_to_field_names() {
        assert_eq!(detect(&json!({"programName": "p"})), Some(ObjectKind::Program));
        assert_eq!(detect(&json!({"programID": "p", "intervals": []})), Some(ObjectKind::Event));
        assert_eq!(detect(&json!({"eventID": "e", "clientName": "c"})), Some(ObjectKind::Report));
        assert_eq!(detect(&json!({"unrelated": true})), None);
        assert_eq!(detect(&json!([1, 2])), None);
    }

    #[test]
    fn explicit_kind_skips_detection() {
        let document = Document::parse(json!({"venName": "NL-ABC"}), Some(ObjectKind::Ven)).unwrap();
        assert_eq!(document.object().kind(), ObjectKind::NewVen);

        let err = Document::parse(json!({"venName": "NL-ABC"}), Some(ObjectKind::Program));
        assert!(err.unwrap_err().to_string().contains("Not a valid Program document"));
    }

    #[test]
    fn arrays_are_split_into_objects() {
        assert_eq!(split(json!([{"a": 1}, {"b": 2}])).len(), 2);
        assert_eq!(split(json!({"a": 1})).len(), 1);
    }
}
