use gac_kernel::domain::Ven;
use gac_kernel::{ValidatorPluginRegistry, ViolationReason};

fn messages(name: &str) -> Vec<String> {
    let registry = ValidatorPluginRegistry::new();
    registry.register_plugin(gac_profile_gac20::plugin()).unwrap();
    registry.validate(&Ven::new(name)).violations().iter().map(|v| v.message.to_string()).collect()
}

#[test]
fn emi3_names_are_accepted() {
    for name in ["NL-ABC", "NLABC", "DE-1A2", "BE123"] {
        assert!(messages(name).is_empty(), "{name}");
    }
}

#[test]
fn names_outside_the_emi3_format_are_rejected() {
    for name in ["ABCDEFG", "nl-abc", "NL-AB", "NL--ABC", ""] {
        assert_eq!(messages(name), ["The ven name must be formatted as an eMI3 identifier."], "{name}");
    }
}

#[test]
fn unknown_country_codes_are_rejected() {
    assert_eq!(
        messages("ZZ-123"),
        ["The first two characters of the ven name must be a valid ISO 3166-1 alpha-2 country code."]
    );
}

#[test]
fn ven_violations_point_at_the_name() {
    let registry = ValidatorPluginRegistry::new();
    registry.register_plugin(gac_profile_gac20::plugin()).unwrap();

    let result = registry.validate(&Ven::new("ABCDEFG"));
    let violation = &result.violations()[0];

    assert_eq!(violation.location.as_deref(), Some("ven_name"));
    assert_eq!(violation.code.as_deref(), Some(gac_profile_gac20::VIOLATION_CODE));
    assert_eq!(violation.reason, ViolationReason::Violated);
    assert_eq!(violation.profile.to_string(), "GAC 2.0");
}

#[test]
fn registering_the_shared_plugin_twice_keeps_one_copy() {
    let registry = ValidatorPluginRegistry::new();
    registry.register_plugin(gac_profile_gac20::plugin()).unwrap();
    registry.register_plugin(gac_profile_gac20::plugin()).unwrap();

    assert_eq!(registry.constraint_count(gac_kernel::domain::ObjectKind::NewVen), 2);
}
