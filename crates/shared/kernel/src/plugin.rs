//! Validator plugins and the handles they register through.
//!
//! A plugin is usually declared with `#[validator_plugin(profile = "..", version = "..")]`,
//! which generates its [`PluginState`]; the author only supplies
//! [`ValidatorPlugin::constraint_sets`].

use crate::constraint::ConstraintSet;
use crate::profile::Profile;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity and constraint sets of a plugin after `setup()`.
///
/// Clones share the identity: the registry treats them as the same plugin.
#[derive(Clone)]
pub struct PluginHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    token: u64,
    profile: Profile,
    sets: Vec<ConstraintSet>,
}

impl PluginHandle {
    /// Creates a handle with a fresh identity.
    #[must_use]
    pub fn new(profile: Profile, sets: Vec<ConstraintSet>) -> Self {
        let token = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        Self { inner: Arc::new(HandleInner { token, profile, sets }) }
    }

    #[must_use]
    pub fn token(&self) -> u64 {
        self.inner.token
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.inner.profile
    }

    #[must_use]
    pub fn constraint_sets(&self) -> &[ConstraintSet] {
        &self.inner.sets
    }

    /// Total number of constraints across all sets.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.inner.sets.iter().map(ConstraintSet::len).sum()
    }
}

impl PartialEq for PluginHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.token == other.inner.token
    }
}

impl Eq for PluginHandle {}

impl fmt::Debug for PluginHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginHandle")
            .field("token", &self.inner.token)
            .field("profile", &self.inner.profile)
            .field("constraints", &self.constraint_count())
            .finish()
    }
}

/// Caches the handle produced by the first `setup()`.
#[derive(Debug, Default)]
pub struct PluginCell(OnceLock<PluginHandle>);

impl PluginCell {
    #[must_use]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[must_use]
    pub fn get(&self) -> Option<&PluginHandle> {
        self.0.get()
    }

    fn get_or_init(&self, init: impl FnOnce() -> PluginHandle) -> &PluginHandle {
        self.0.get_or_init(init)
    }
}

/// Per-instance state every plugin carries. Generated by `#[validator_plugin]`.
pub trait PluginState {
    fn profile(&self) -> Profile;
    fn cell(&self) -> &PluginCell;
}

/// A compliance profile packaged for registration.
pub trait ValidatorPlugin: PluginState + Send + Sync {
    /// Builds the constraint sets of this profile. Called once, on first `setup()`.
    fn constraint_sets(&self) -> Vec<ConstraintSet>;

    /// Prepares the plugin for registration.
    ///
    /// Idempotent: later calls return the handle of the first one.
    fn setup(&self) -> PluginHandle {
        self.cell().get_or_init(|| PluginHandle::new(self.profile(), self.constraint_sets())).clone()
    }

    fn is_set_up(&self) -> bool {
        self.cell().get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Constraint, Outcome};
    use gac_domain::Ven;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct Counting {
        builds: AtomicUsize,
        cell: PluginCell,
    }

    impl PluginState for Counting {
        fn profile(&self) -> Profile {
            Profile::new("T", "1")
        }

        fn cell(&self) -> &PluginCell {
            &self.cell
        }
    }

    impl ValidatorPlugin for Counting {
        fn constraint_sets(&self) -> Vec<ConstraintSet> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            vec![
                ConstraintSet::new(self.profile())
                    .with(Constraint::new("ok", |_: &Ven| Outcome::valid())),
            ]
        }
    }

    #[test]
    fn setup_builds_once_and_returns_the_same_handle() {
        let plugin = Counting::default();
        assert!(!plugin.is_set_up());

        let first = plugin.setup();
        let second = plugin.setup();

        assert_eq!(first, second);
        assert_eq!(plugin.builds.load(Ordering::SeqCst), 1);
        assert_eq!(first.constraint_count(), 1);
        assert!(plugin.is_set_up());
    }

    #[test]
    fn separate_instances_get_separate_identities() {
        assert_ne!(Counting::default().setup(), Counting::default().setup());
    }
}
