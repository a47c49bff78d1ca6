//! Type-erased access to domain objects.
//! Validators receive instances through these traits and downcast to the concrete model.

use crate::kind::ObjectKind;
use std::any::Any;
use std::fmt::Debug;

/// A validated object: knows its most specific kind and can be downcast.
pub trait DomainObject: Any + Debug + Send + Sync {
    /// The most specific kind of this instance (e.g. `NewEvent`).
    fn kind(&self) -> ObjectKind;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A concrete model type, tied to the root kind it represents.
pub trait Model: DomainObject + Sized {
    /// Root kind shared by all instances of this type (e.g. `Event`).
    const MODEL: ObjectKind;
}
