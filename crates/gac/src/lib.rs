//! Facade crate for the compliance profiles and shared modules.
//! Re-exports domain/kernel primitives and registers the profiles selected at runtime.
//! Keep this crate thin: it should compose other crates, not implement rules.
//!
//! ## Usage
//! - Add `gac` with the desired profile features (`gac20` is on by default).
//! - Call [`init`] with a registry and the [`ProfileSet`] from configuration.

pub use gac_domain as domain;
use gac_domain::ProfileSet;
pub use gac_kernel as kernel;
use gac_kernel::{PluginHandle, RegistryError, ValidatorPluginRegistry};
use tracing::{info, warn};

/// Profile registry for runtime introspection.
pub mod profiles {
    #[cfg(feature = "gac20")]
    pub use gac_profile_gac20 as gac20;

    /// Build-time enabled profiles (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "gac20")]
        gac_domain::constants::GAC20,
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Registers every requested profile that was compiled in.
///
/// Requested profiles missing from the build are skipped with a warning. Calling this
/// again with the same registry is a no-op for profiles already registered.
///
/// # Errors
/// Returns the first [`RegistryError`] raised by a registration.
#[cfg_attr(not(feature = "gac20"), allow(unused_mut, unused_variables))]
pub fn init(
    registry: &ValidatorPluginRegistry,
    requested: ProfileSet,
) -> Result<Vec<PluginHandle>, RegistryError> {
    let mut handles = Vec::new();

    if requested.is_empty() {
        warn!("No compliance profiles requested, every object will pass");
    }
    for name in requested.names() {
        if !profiles::is_enabled(name) {
            warn!(profile = name, "Profile requested but not compiled in");
        }
    }

    #[cfg(feature = "gac20")]
    if requested.contains(ProfileSet::GAC20) {
        handles.push(registry.register_plugin(profiles::gac20::plugin())?);
    }

    info!(count = handles.len(), profiles = ?registry.profiles(), "Compliance profiles ready");
    Ok(handles)
}

/// [`init`] against [`ValidatorPluginRegistry::global`].
///
/// # Errors
/// See [`init`].
pub fn init_global(requested: ProfileSet) -> Result<Vec<PluginHandle>, RegistryError> {
    init(ValidatorPluginRegistry::global(), requested)
}
