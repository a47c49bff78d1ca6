use crate::constraint::{Constraint, ConstraintError};
use crate::registry::RegisteredConstraint;
use crate::result::{ValidationResult, Violation};
use gac_domain::config::ValidationConfig;
use gac_domain::{DomainObject, ObjectKind};
use std::any::Any;
use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use tracing::{trace, warn};

/// Execution settings of the runner: `fail_fast` and `catch_panics`.
pub type RunnerConfig = ValidationConfig;

/// Evaluates registered constraints against one instance.
///
/// Every constraint runs unless `fail_fast` is set. A constraint that panics or errors is
/// reported as an execution error and never hides the outcome of the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRunner {
    config: RunnerConfig,
}

impl ValidationRunner {
    #[must_use]
    pub const fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn run(
        &self,
        kind: ObjectKind,
        instance: &dyn DomainObject,
        constraints: &[RegisteredConstraint],
    ) -> ValidationResult {
        let mut violations = Vec::new();
        let mut evaluated = 0;

        for registered in constraints {
            evaluated += 1;
            let constraint = registered.constraint();

            let violation = match self.evaluate(constraint, instance) {
                Ok(outcome) if outcome.is_valid() => None,
                Ok(outcome) => Some(Violation::from_outcome(
                    registered.profile().clone(),
                    constraint.id_cow(),
                    kind,
                    outcome,
                )),
                Err(error) => {
                    warn!(constraint = constraint.id(), %kind, %error, "Constraint failed to execute");
                    Some(Violation::from_error(
                        registered.profile().clone(),
                        constraint.id_cow(),
                        kind,
                        &error,
                    ))
                },
            };

            if let Some(violation) = violation {
                violations.push(violation);
                if self.config.fail_fast {
                    break;
                }
            }
        }

        trace!(%kind, evaluated, violations = violations.len(), "Validated instance");
        ValidationResult::new(kind, evaluated, violations)
    }

    fn evaluate(
        &self,
        constraint: &Constraint,
        instance: &dyn DomainObject,
    ) -> Result<crate::Outcome, ConstraintError> {
        if !self.config.catch_panics {
            return constraint.evaluate(instance);
        }

        panic::catch_unwind(AssertUnwindSafe(|| constraint.evaluate(instance))).unwrap_or_else(
            |payload| Err(ConstraintError::Panicked { message: panic_message(&*payload), context: None }),
        )
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Cow<'static, str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Cow::Borrowed(message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Cow::Owned(message.clone())
    } else {
        Cow::Borrowed("non-string panic payload")
    }
}
