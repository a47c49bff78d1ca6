#[test]
fn gac_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/gac_error_pass.rs");
    t.pass("tests/ui/gac_error_only_message.rs");
}
