use crate::constraint::{ConstraintError, Outcome};
use crate::profile::Profile;
use gac_domain::ObjectKind;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Code attached to violations produced by a constraint that failed to execute.
pub const EXECUTION_ERROR_CODE: &str = "constraint_execution_error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    /// The rule evaluated and found the instance non-compliant.
    Violated,
    /// The rule could not be evaluated (panic, error, wrong type).
    ExecutionError,
}

/// One failed constraint, attributed to its profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub profile: Profile,
    pub constraint_id: Cow<'static, str>,
    pub kind: ObjectKind,
    pub message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Cow<'static, str>>,
    pub reason: ViolationReason,
}

impl Violation {
    pub(crate) fn from_outcome(
        profile: Profile,
        constraint_id: Cow<'static, str>,
        kind: ObjectKind,
        outcome: Outcome,
    ) -> Self {
        let message = outcome
            .message
            .unwrap_or_else(|| Cow::Owned(format!("Constraint '{constraint_id}' is not satisfied")));
        Self {
            profile,
            constraint_id,
            kind,
            message,
            code: outcome.code,
            location: outcome.location,
            reason: ViolationReason::Violated,
        }
    }

    pub(crate) fn from_error(
        profile: Profile,
        constraint_id: Cow<'static, str>,
        kind: ObjectKind,
        error: &ConstraintError,
    ) -> Self {
        Self {
            profile,
            constraint_id,
            kind,
            message: Cow::Owned(error.to_string()),
            code: Some(Cow::Borrowed(EXECUTION_ERROR_CODE)),
            location: None,
            reason: ViolationReason::ExecutionError,
        }
    }

    #[must_use]
    pub fn is_execution_error(&self) -> bool {
        self.reason == ViolationReason::ExecutionError
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.profile, self.constraint_id)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Every violation found for one instance, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    kind: ObjectKind,
    evaluated: usize,
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub(crate) const fn new(kind: ObjectKind, evaluated: usize, violations: Vec<Violation>) -> Self {
        Self { kind, evaluated, violations }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Kind the instance was validated as.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Number of constraints that ran.
    #[must_use]
    pub const fn evaluated(&self) -> usize {
        self.evaluated
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Converts into `Err` when at least one constraint failed.
    ///
    /// # Errors
    /// Returns a [`ValidationFailure`] listing every violation.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { kind: self.kind, violations: self.violations })
        }
    }
}

/// Aggregate error for a non-compliant instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    kind: ObjectKind,
    violations: Vec<Violation>,
}

impl ValidationFailure {
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s) for {}", self.violations.len(), self.kind)?;
        for violation in &self.violations {
            write!(f, "\n{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(id: &'static str, location: Option<&'static str>) -> Violation {
        let mut outcome = Outcome::invalid("broken");
        outcome.location = location.map(Cow::Borrowed);
        Violation::from_outcome(Profile::new("GAC", "2.0"), Cow::Borrowed(id), ObjectKind::NewEvent, outcome)
    }

    #[test]
    fn violation_display_includes_location_when_known() {
        assert_eq!(violation("a", Some("targets")).to_string(), "[GAC 2.0] a (targets): broken");
        assert_eq!(violation("a", None).to_string(), "[GAC 2.0] a: broken");
    }

    #[test]
    fn failure_lists_every_violation() {
        let result = ValidationResult::new(
            ObjectKind::NewEvent,
            3,
            vec![violation("a", Some("priority")), violation("b", None)],
        );
        let failure = result.into_result().unwrap_err();

        assert_eq!(
            failure.to_string(),
            "2 validation error(s) for NewEvent\n[GAC 2.0] a (priority): broken\n[GAC 2.0] b: broken"
        );
    }

    #[test]
    fn missing_message_falls_back_to_the_constraint_id() {
        let outcome = Outcome { valid: false, ..Outcome::default() };
        let v = Violation::from_outcome(Profile::new("T", "1"), Cow::Borrowed("x"), ObjectKind::Ven, outcome);
        assert_eq!(v.message, "Constraint 'x' is not satisfied");
    }

    #[test]
    fn execution_errors_carry_the_reserved_code() {
        let err = ConstraintError::from("boom");
        let v = Violation::from_error(Profile::new("T", "1"), Cow::Borrowed("x"), ObjectKind::Ven, &err);

        assert!(v.is_execution_error());
        assert_eq!(v.code.as_deref(), Some(EXECUTION_ERROR_CODE));
        assert_eq!(v.message, "boom");
    }
}
