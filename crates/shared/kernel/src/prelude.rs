pub use crate::constraint::{Constraint, ConstraintError, ConstraintErrorExt, ConstraintSet, Outcome};
pub use crate::domain::{DomainObject, Model, ObjectKind};
pub use crate::error::RegistryError;
pub use crate::plugin::{PluginHandle, ValidatorPlugin};
pub use crate::profile::Profile;
pub use crate::registry::ValidatorPluginRegistry;
pub use crate::result::{ValidationFailure, ValidationResult, Violation};
