// Profile names accepted by configuration and the CLI.
pub const GAC20: &str = "gac20";

// Target types the GAC profile cares about.
pub const POWER_SERVICE_LOCATION: &str = "POWER_SERVICE_LOCATION";
pub const VEN_NAME: &str = "VEN_NAME";
