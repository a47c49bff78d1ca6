//! # GAC 2.0 compliance profile
//!
//! Grid Aware Charging narrows OpenADR 3 for capacity limits sent by a DSO to charge point
//! operators. This crate packages those rules as one validator plugin:
//!
//! * **Events** ([`event`]): no priority, one `POWER_SERVICE_LOCATION` (EAN18) and one
//!   `VEN_NAME` target, a single `IMPORT_CAPACITY_LIMIT` payload descriptor in `KW`, and
//!   consistently defined, strictly ordered intervals.
//! * **Programs** ([`program`]): retailer name, `DSO_CPO_INTERFACE-x.x.x` program type,
//!   binding events.
//! * **VENs** ([`ven`]): eMI3 formatted names with a valid country code.
//!
//! The requirement that a program has a safe mode event spans several objects and is not
//! checked here.
//!
//! ```rust
//! use gac_kernel::ValidatorPluginRegistry;
//! use gac_kernel::domain::Ven;
//!
//! let registry = ValidatorPluginRegistry::new();
//! registry.register_plugin(gac_profile_gac20::plugin()).unwrap();
//!
//! assert!(registry.validate(&Ven::new("NL-ABC")).is_valid());
//! assert!(!registry.validate(&Ven::new("ABCDEFG")).is_valid());
//! ```

mod country;
pub mod event;
pub mod program;
pub mod ven;

use gac_derive::validator_plugin;
use gac_kernel::domain::Model;
use gac_kernel::{Constraint, ConstraintError, ConstraintSet, Outcome, ValidatorPlugin};
use regex::Regex;
use std::sync::LazyLock;

/// Code attached to every violation of this profile.
pub const VIOLATION_CODE: &str = "value_error";

static PLUGIN: LazyLock<Gac20ValidatorPlugin> = LazyLock::new(Gac20ValidatorPlugin::default);

/// Validator plugin for the GAC 2.0 profile.
#[validator_plugin(profile = "GAC", version = "2.0")]
pub struct Gac20ValidatorPlugin {}

impl Default for Gac20ValidatorPlugin {
    fn default() -> Self {
        Self::new(Gac20ValidatorPluginInner {})
    }
}

impl ValidatorPlugin for Gac20ValidatorPlugin {
    fn constraint_sets(&self) -> Vec<ConstraintSet> {
        let mut set = ConstraintSet::new(Self::PROFILE);
        set.extend(event::constraints());
        set.extend(program::constraints());
        set.extend(ven::constraints());
        vec![set]
    }
}

/// The process-wide instance. Registering it repeatedly is a no-op.
pub fn plugin() -> &'static Gac20ValidatorPlugin {
    &PLUGIN
}

/// A rule that holds or fails with a fixed message at a fixed location.
fn rule<T, F>(id: &'static str, location: &'static str, message: &'static str, holds: F) -> Constraint
where
    T: Model,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Constraint::new(id, move |instance: &T| violation(holds(instance), location, message))
}

/// Like [`rule`], for predicates that depend on a compiled pattern.
fn pattern_rule<T, F>(
    id: &'static str,
    location: &'static str,
    message: &'static str,
    pattern: &'static LazyLock<Result<Regex, regex::Error>>,
    holds: F,
) -> Constraint
where
    T: Model,
    F: Fn(&T, &Regex) -> bool + Send + Sync + 'static,
{
    Constraint::fallible(id, move |instance: &T| {
        let regex = compiled(pattern)?;
        Ok(violation(holds(instance, regex), location, message))
    })
}

fn violation(holds: bool, location: &'static str, message: &'static str) -> Outcome {
    Outcome::ensure(holds, message).at(location).with_code(VIOLATION_CODE)
}

fn compiled(
    pattern: &'static LazyLock<Result<Regex, regex::Error>>,
) -> Result<&'static Regex, ConstraintError> {
    LazyLock::force(pattern).as_ref().map_err(|e| ConstraintError::Internal {
        message: e.to_string().into(),
        context: Some("Invalid GAC pattern".into()),
    })
}
