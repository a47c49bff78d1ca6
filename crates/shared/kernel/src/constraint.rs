//! Constraints, their outcomes and the sets profiles publish them in.

use crate::profile::Profile;
use gac_domain::{DomainObject, Model, ObjectKind};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Raised while evaluating a constraint rather than by the rule itself.
#[gac_derive::gac_error]
pub enum ConstraintError {
    #[error("Constraint expects {expected} but was given a {found}{}", format_context(.context))]
    TypeMismatch { expected: &'static str, found: ObjectKind, context: Option<Cow<'static, str>> },

    #[error("Constraint panicked: {message}{}", format_context(.context))]
    Panicked { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{message}{}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Result of evaluating one constraint against one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub valid: bool,
    pub message: Option<Cow<'static, str>>,
    pub code: Option<Cow<'static, str>>,
    /// Field path of the offending value, e.g. `"targets"`.
    pub location: Option<Cow<'static, str>>,
}

impl Outcome {
    #[must_use]
    pub const fn valid() -> Self {
        Self { valid: true, message: None, code: None, location: None }
    }

    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self { valid: false, message: Some(message.into()), code: None, location: None }
    }

    /// Valid when `condition` holds, otherwise invalid with `message`.
    pub fn ensure(condition: bool, message: impl Into<Cow<'static, str>>) -> Self {
        if condition { Self::valid() } else { Self::invalid(message) }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn at(mut self, location: impl Into<Cow<'static, str>>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

type Check = dyn Fn(&dyn DomainObject) -> Result<Outcome, ConstraintError> + Send + Sync;

/// A named predicate over one model type.
///
/// Checks are typed (`Fn(&Event) -> Outcome`) and stored type-erased; handing a constraint
/// an instance of another type fails with [`ConstraintError::TypeMismatch`].
pub struct Constraint {
    id: Cow<'static, str>,
    applies_to: ObjectKind,
    model: ObjectKind,
    check: Box<Check>,
}

impl Constraint {
    /// A constraint applying to `T::MODEL` and all its specializations.
    pub fn new<T, F>(id: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        T: Model,
        F: Fn(&T) -> Outcome + Send + Sync + 'static,
    {
        Self::fallible(id, move |instance: &T| Ok(check(instance)))
    }

    /// Like [`Constraint::new`], for checks that can fail to execute.
    pub fn fallible<T, F>(id: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        T: Model,
        F: Fn(&T) -> Result<Outcome, ConstraintError> + Send + Sync + 'static,
    {
        let check = move |object: &dyn DomainObject| {
            let Some(instance) = object.as_any().downcast_ref::<T>() else {
                return Err(ConstraintError::TypeMismatch {
                    expected: std::any::type_name::<T>(),
                    found: object.kind(),
                    context: None,
                });
            };
            check(instance)
        };

        Self { id: id.into(), applies_to: T::MODEL, model: T::MODEL, check: Box::new(check) }
    }

    /// Narrows the constraint to a specialization of its model, e.g. `NewEvent` only.
    ///
    /// The registry rejects kinds outside the model's hierarchy.
    #[must_use]
    pub fn for_kind(mut self, kind: ObjectKind) -> Self {
        self.applies_to = kind;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn id_cow(&self) -> Cow<'static, str> {
        self.id.clone()
    }

    #[must_use]
    pub const fn applies_to(&self) -> ObjectKind {
        self.applies_to
    }

    /// Root kind of the model type the check was written for.
    #[must_use]
    pub const fn model(&self) -> ObjectKind {
        self.model
    }

    /// Runs the check. Panics from the predicate propagate; see the runner for isolation.
    ///
    /// # Errors
    /// Returns [`ConstraintError`] when the instance has the wrong type or the check fails
    /// to execute.
    pub fn evaluate(&self, instance: &dyn DomainObject) -> Result<Outcome, ConstraintError> {
        (self.check)(instance)
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("id", &self.id)
            .field("applies_to", &self.applies_to)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// The constraints one profile version contributes, in evaluation order.
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    profile: Profile,
    constraints: Vec<Arc<Constraint>>,
}

impl ConstraintSet {
    #[must_use]
    pub const fn new(profile: Profile) -> Self {
        Self { profile, constraints: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.push(constraint);
        self
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.constraints.push(Arc::new(constraint));
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn constraints(&self) -> &[Arc<Constraint>] {
        &self.constraints
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl Extend<Constraint> for ConstraintSet {
    fn extend<I: IntoIterator<Item = Constraint>>(&mut self, iter: I) {
        self.constraints.extend(iter.into_iter().map(Arc::new));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gac_domain::{Program, Ven};

    fn upper_case() -> Constraint {
        Constraint::new("ven.upper", |ven: &Ven| {
            Outcome::ensure(!ven.ven_name.chars().any(char::is_lowercase), "upper case only")
                .at("ven_name")
        })
    }

    #[test]
    fn typed_check_runs_on_its_model() {
        let outcome = upper_case().evaluate(&Ven::new("nl-abc")).unwrap();
        assert!(!outcome.is_valid());
        assert_eq!(outcome.message.as_deref(), Some("upper case only"));
        assert_eq!(outcome.location.as_deref(), Some("ven_name"));

        assert!(upper_case().evaluate(&Ven::new("NL-ABC")).unwrap().is_valid());
    }

    #[test]
    fn other_models_are_a_type_mismatch() {
        let err = upper_case().evaluate(&Program::new("p")).unwrap_err();
        assert!(matches!(err, ConstraintError::TypeMismatch { found: ObjectKind::NewProgram, .. }));
    }

    #[test]
    fn constraint_defaults_to_its_model_kind() {
        let constraint = upper_case();
        assert_eq!(constraint.applies_to(), ObjectKind::Ven);
        assert_eq!(constraint.for_kind(ObjectKind::NewVen).applies_to(), ObjectKind::NewVen);
    }

    #[test]
    fn fallible_checks_surface_their_error() {
        let constraint = Constraint::fallible("ven.lookup", |_: &Ven| {
            Err::<Outcome, _>(ConstraintError::from("lookup table missing"))
        });
        let err = constraint.evaluate(&Ven::new("NL-ABC")).unwrap_err();
        assert_eq!(err.to_string(), "lookup table missing");
    }

    #[test]
    fn set_keeps_insertion_order() {
        let mut set = ConstraintSet::new(Profile::new("T", "1"))
            .with(upper_case())
            .with(Constraint::new("b", |_: &Ven| Outcome::valid()));
        set.extend([Constraint::new("c", |_: &Ven| Outcome::valid())]);

        let ids: Vec<_> = set.constraints().iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["ven.upper", "b", "c"]);
    }
}
