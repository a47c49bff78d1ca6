//! Registry of validator plugins, indexed by object kind.
//!
//! Registration merges a plugin's constraint sets into a new snapshot and publishes it
//! atomically. Each kind maps to the full ordered list of constraints that apply to it,
//! inherited ones included, so lookup is a single map access. Readers never block and
//! never see a half-merged index.

use crate::constraint::Constraint;
use crate::error::RegistryError;
use crate::plugin::{PluginHandle, ValidatorPlugin};
use crate::profile::Profile;
use crate::result::{ValidationFailure, ValidationResult};
use crate::runner::{RunnerConfig, ValidationRunner};
use arc_swap::ArcSwap;
use fxhash::FxHashMap;
use gac_domain::{DomainObject, ObjectKind};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};
use strum::IntoEnumIterator;
use tracing::{debug, info};

static GLOBAL: LazyLock<ValidatorPluginRegistry> = LazyLock::new(ValidatorPluginRegistry::new);

/// A constraint as stored in the index, attributed to the profile that contributed it.
#[derive(Debug, Clone)]
pub struct RegisteredConstraint {
    profile: Profile,
    plugin: u64,
    constraint: Arc<Constraint>,
}

impl RegisteredConstraint {
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Token of the plugin handle that registered this constraint.
    #[must_use]
    pub const fn plugin(&self) -> u64 {
        self.plugin
    }

    // Versions of one profile are separate namespaces and may reuse ids.
    fn collides_with(&self, profile: &Profile, constraint: &Constraint) -> bool {
        self.constraint.applies_to() == constraint.applies_to()
            && self.constraint.id() == constraint.id()
            && !self.profile.is_sibling_of(profile)
    }
}

type Constraints = Arc<[RegisteredConstraint]>;

#[derive(Debug, Default, Clone)]
struct Index {
    by_kind: FxHashMap<ObjectKind, Constraints>,
    plugins: Vec<PluginHandle>,
}

impl Index {
    fn get(&self, kind: ObjectKind) -> Option<&Constraints> {
        self.by_kind.get(&kind)
    }

    fn contains(&self, handle: &PluginHandle) -> bool {
        self.plugins.iter().any(|registered| registered == handle)
    }

    /// Builds the index that results from adding `handle`, or explains why it cannot.
    fn merged_with(&self, handle: &PluginHandle) -> Result<Self, RegistryError> {
        let mut staged: FxHashMap<ObjectKind, Vec<RegisteredConstraint>> = FxHashMap::default();

        for set in handle.constraint_sets() {
            for constraint in set.constraints() {
                let kind = constraint.applies_to();
                if !kind.is_a(constraint.model()) {
                    return Err(RegistryError::KindMismatch {
                        id: constraint.id_cow(),
                        kind,
                        model: constraint.model(),
                        context: None,
                    });
                }

                let registered = self.get(kind).into_iter().flat_map(|c| c.iter());
                let pending = staged.get(&kind).into_iter().flatten();
                if let Some(existing) = registered
                    .chain(pending)
                    .find(|existing| existing.collides_with(set.profile(), constraint))
                {
                    return Err(RegistryError::DuplicateConstraint {
                        id: constraint.id_cow(),
                        kind,
                        profile: set.profile().clone(),
                        existing: existing.profile.clone(),
                        context: None,
                    });
                }

                let entry = RegisteredConstraint {
                    profile: set.profile().clone(),
                    plugin: handle.token(),
                    constraint: Arc::clone(constraint),
                };
                // Flatten now: every specialization of `kind` gets the constraint too.
                for target in ObjectKind::iter().filter(|target| target.is_a(kind)) {
                    staged.entry(target).or_default().push(entry.clone());
                }
            }
        }

        let mut next = self.clone();
        for (kind, added) in staged {
            let merged: Constraints = match next.by_kind.get(&kind) {
                Some(current) => current.iter().cloned().chain(added).collect(),
                None => added.into(),
            };
            next.by_kind.insert(kind, merged);
        }
        next.plugins.push(handle.clone());
        Ok(next)
    }
}

/// Maps object kinds to the ordered constraints every registered plugin contributes.
#[derive(Debug)]
pub struct ValidatorPluginRegistry {
    index: ArcSwap<Index>,
    write: Mutex<()>,
    runner: ValidationRunner,
}

impl Default for ValidatorPluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorPluginRegistry {
    /// An empty registry with the default runner settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            index: ArcSwap::from_pointee(Index::default()),
            write: Mutex::new(()),
            runner: ValidationRunner::new(config),
        }
    }

    /// Process-wide registry for callers that cannot thread an instance through.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    #[must_use]
    pub const fn runner(&self) -> &ValidationRunner {
        &self.runner
    }

    /// Sets the plugin up and registers its constraints.
    ///
    /// Registering the same plugin again is a no-op that returns the same handle.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateConstraint`] when another plugin already
    /// registered a constraint with the same id for the same kind, and
    /// [`RegistryError::KindMismatch`] for constraints narrowed to a foreign kind.
    /// The registry is unchanged on error.
    pub fn register_plugin<P>(&self, plugin: &P) -> Result<PluginHandle, RegistryError>
    where
        P: ValidatorPlugin + ?Sized,
    {
        let handle = plugin.setup();
        self.register_handle(&handle)?;
        Ok(handle)
    }

    /// Registers an already set-up plugin handle.
    ///
    /// # Errors
    /// See [`ValidatorPluginRegistry::register_plugin`].
    pub fn register_handle(&self, handle: &PluginHandle) -> Result<(), RegistryError> {
        let _guard = self.write.lock();
        let current = self.index.load_full();

        if current.contains(handle) {
            debug!(profile = %handle.profile(), token = handle.token(), "Plugin already registered");
            return Ok(());
        }

        let next = current.merged_with(handle)?;
        self.index.store(Arc::new(next));

        info!(
            profile = %handle.profile(),
            token = handle.token(),
            constraints = handle.constraint_count(),
            "Registered validator plugin"
        );
        Ok(())
    }

    /// Validates `instance` as its own (most specific) kind.
    pub fn validate(&self, instance: &dyn DomainObject) -> ValidationResult {
        self.validate_as(instance, instance.kind())
    }

    /// Validates `instance` against the constraints registered for `kind`.
    pub fn validate_as(&self, instance: &dyn DomainObject, kind: ObjectKind) -> ValidationResult {
        let snapshot = self.index.load();
        let constraints = snapshot.get(kind).map_or(&[][..], |c| &c[..]);
        self.runner.run(kind, instance, constraints)
    }

    /// Construction hook: returns the instance when it satisfies every constraint.
    ///
    /// # Errors
    /// Returns a [`ValidationFailure`] listing all violations otherwise.
    pub fn construct<T: DomainObject>(&self, instance: T) -> Result<T, ValidationFailure> {
        self.validate(&instance).into_result()?;
        Ok(instance)
    }

    /// Constraints applying to `kind`, in evaluation order.
    #[must_use]
    pub fn constraints(&self, kind: ObjectKind) -> Constraints {
        self.index.load().get(kind).cloned().unwrap_or_else(|| Arc::from(Vec::new()))
    }

    #[must_use]
    pub fn constraint_count(&self, kind: ObjectKind) -> usize {
        self.index.load().get(kind).map_or(0, |c| c.len())
    }

    #[must_use]
    pub fn constraint_ids(&self, kind: ObjectKind) -> Vec<Cow<'static, str>> {
        self.index
            .load()
            .get(kind)
            .map(|c| c.iter().map(|r| r.constraint.id_cow()).collect())
            .unwrap_or_default()
    }

    /// Profiles of the registered plugins, in registration order.
    #[must_use]
    pub fn profiles(&self) -> Vec<Profile> {
        self.index.load().plugins.iter().map(|h| h.profile().clone()).collect()
    }

    #[must_use]
    pub fn is_registered(&self, handle: &PluginHandle) -> bool {
        self.index.load().contains(handle)
    }

    /// Drops every registration. Meant for tests sharing the global registry.
    pub fn clear(&self) {
        let _guard = self.write.lock();
        self.index.store(Arc::new(Index::default()));
        debug!("Cleared validator registry");
    }
}
