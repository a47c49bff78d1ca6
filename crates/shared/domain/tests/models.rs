use gac_domain::{
    DomainObject, Event, EventPayloadType, ObjectKind, PayloadValue, Program, Report, Unit, Ven,
};

const EVENT_JSON: &str = r#"{
    "programID": "program-1",
    "eventName": "limit",
    "targets": [
        {"type": "POWER_SERVICE_LOCATION", "values": ["EAN123456789012345"]},
        {"type": "VEN_NAME", "values": ["NL-ABC"]}
    ],
    "payloadDescriptors": [
        {"objectType": "EVENT_PAYLOAD_DESCRIPTOR", "payloadType": "IMPORT_CAPACITY_LIMIT", "units": "KW"}
    ],
    "intervalPeriod": {"start": "2023-01-01T00:00:00Z", "duration": "PT5M"},
    "intervals": [
        {"id": 0, "payloads": [{"type": "IMPORT_CAPACITY_LIMIT", "values": [2.36]}]}
    ]
}"#;

#[test]
fn event_deserializes_from_openadr_field_names() {
    let event: Event = serde_json::from_str(EVENT_JSON).unwrap();

    assert_eq!(event.program_id, "program-1");
    assert_eq!(event.priority, None);
    assert_eq!(event.targets_of("VEN_NAME").count(), 1);

    let descriptor = &event.payload_descriptors.as_ref().unwrap()[0];
    assert_eq!(descriptor.payload_type, EventPayloadType::ImportCapacityLimit);
    assert_eq!(descriptor.units, Some(Unit::Kw));

    let interval = &event.intervals[0];
    assert_eq!(interval.payloads[0].values, vec![PayloadValue::Number(2.36)]);
    assert!(interval.interval_period.is_none());
}

#[test]
fn unknown_units_and_payload_types_are_kept_verbatim() {
    let json = r#"{"programID": "p", "payloadDescriptors": [{"payloadType": "MY_TYPE", "units": "kw"}]}"#;
    let event: Event = serde_json::from_str(json).unwrap();

    let descriptor = &event.payload_descriptors.unwrap()[0];
    assert_eq!(descriptor.payload_type, EventPayloadType::Private("MY_TYPE".to_owned()));
    assert_eq!(descriptor.units, Some(Unit::Private("kw".to_owned())));
}

#[test]
fn stored_objects_report_the_existing_kind() {
    let mut event: Event = serde_json::from_str(EVENT_JSON).unwrap();
    assert_eq!(event.kind(), ObjectKind::NewEvent);

    event.id = Some("event-1".to_owned());
    assert_eq!(event.kind(), ObjectKind::ExistingEvent);
}

#[test]
fn program_binding_events_defaults_to_false() {
    let program: Program =
        serde_json::from_str(r#"{"programName": "p", "retailerName": "Retailer"}"#).unwrap();

    assert!(!program.binding_events);
    assert_eq!(program.retailer_name.as_deref(), Some("Retailer"));
    assert_eq!(program.kind(), ObjectKind::NewProgram);
}

#[test]
fn ven_and_report_resolve_their_kinds() {
    let ven: Ven = serde_json::from_str(r#"{"id": "v1", "venName": "NL-ABC"}"#).unwrap();
    assert_eq!(ven.kind(), ObjectKind::ExistingVen);

    let report: Report = serde_json::from_str(
        r#"{"programID": "p", "eventID": "e", "clientName": "c", "resources": []}"#,
    )
    .unwrap();
    assert_eq!(report.kind(), ObjectKind::NewReport);
}

#[test]
fn downcast_through_the_object_trait() {
    let ven = Ven::new("NL-ABC");
    let object: &dyn DomainObject = &ven;

    assert_eq!(object.as_any().downcast_ref::<Ven>(), Some(&ven));
    assert!(object.as_any().downcast_ref::<Program>().is_none());
}
