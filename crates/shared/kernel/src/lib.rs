//! Validation kernel for compliance profiles.
//! Profiles contribute [`ConstraintSet`]s through a [`ValidatorPlugin`]; the
//! [`ValidatorPluginRegistry`] flattens them per object kind and runs every applicable
//! constraint on demand.
//!
//! ## Registering and validating
//! ```rust
//! use gac_kernel::domain::Ven;
//! use gac_kernel::{Constraint, ConstraintSet, Outcome, Profile, ValidatorPluginRegistry};
//!
//! let registry = ValidatorPluginRegistry::new();
//! let set = ConstraintSet::new(Profile::new("DEMO", "1.0")).with(Constraint::new(
//!     "ven.name.upper",
//!     |ven: &Ven| Outcome::ensure(ven.ven_name.chars().all(|c| !c.is_lowercase()), "upper case only"),
//! ));
//! let handle = gac_kernel::PluginHandle::new(Profile::new("DEMO", "1.0"), vec![set]);
//! registry.register_handle(&handle).unwrap();
//!
//! let result = registry.validate(&Ven::new("nl-abc"));
//! assert_eq!(result.violations().len(), 1);
//! ```
extern crate self as gac_kernel;

pub mod config;
pub mod constraint;
pub mod error;
pub mod plugin;
pub mod prelude;
pub mod profile;
pub mod registry;
pub mod result;
pub mod runner;

pub use gac_domain as domain;

pub use constraint::{Constraint, ConstraintError, ConstraintSet, Outcome};
pub use error::RegistryError;
pub use plugin::{PluginHandle, ValidatorPlugin};
pub use profile::Profile;
pub use registry::{RegisteredConstraint, ValidatorPluginRegistry};
pub use result::{ValidationFailure, ValidationResult, Violation, ViolationReason};
pub use runner::{RunnerConfig, ValidationRunner};
