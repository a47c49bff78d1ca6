use gac::domain::{ObjectKind, ProfileSet, Ven};
use gac::kernel::ValidatorPluginRegistry;
use serial_test::serial;

#[test]
fn gac20_is_compiled_in_by_default() {
    assert!(gac::profiles::is_enabled("gac20"));
    assert!(!gac::profiles::is_enabled("gac30"));
}

#[test]
fn init_registers_the_requested_profiles() {
    let registry = ValidatorPluginRegistry::new();

    let handles = gac::init(&registry, ProfileSet::GAC20).unwrap();

    assert_eq!(handles.len(), 1);
    assert_eq!(registry.profiles()[0].to_string(), "GAC 2.0");
    assert!(registry.constraint_count(ObjectKind::NewEvent) > 0);
}

#[test]
fn empty_profile_set_registers_nothing() {
    let registry = ValidatorPluginRegistry::new();

    assert!(gac::init(&registry, ProfileSet::empty()).unwrap().is_empty());
    assert!(registry.validate(&Ven::new("not an emi3 name")).is_valid());
}

#[test]
#[serial]
fn global_init_is_idempotent() {
    let registry = ValidatorPluginRegistry::global();
    registry.clear();

    let first = gac::init_global(ProfileSet::ALL).unwrap();
    let second = gac::init_global(ProfileSet::ALL).unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.constraint_count(ObjectKind::Ven), 2);
    assert!(!registry.validate(&Ven::new("ZZ-123")).is_valid());
    registry.clear();
}
