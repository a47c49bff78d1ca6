#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the compliance workspace.
//!
//! * [`macro@gac_error`] turns an enum into a `thiserror` error with attachable context.
//! * [`macro@validator_plugin`] turns a struct into a cheaply clonable validator plugin handle.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! gac-derive.workspace = true
//! ```
//!
//! Examples below are `ignore`d because they need the consuming crates in scope.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Context Accessor**: Generates `fn context_str(&self) -> Option<&str>`.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with **named** variant fields.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source` field (or a field marked
///    `#[source]`/`#[from]`) and a `context` field.
///
/// A module-private `format_context` helper is emitted next to the enum, so declare one
/// error enum per module.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[gac_derive::gac_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Building layered config")?.try_deserialize().map_err(Into::into)
/// }
/// ```
#[proc_macro_attribute]
pub fn gac_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a validator plugin handle.
///
/// This macro transforms a struct into the plugin pattern used by `gac-kernel`:
/// 1. Moves the declared fields into a `<Name>Inner` struct.
/// 2. Generates a `<Name>` wrapper holding `Arc<<Name>Inner>` plus a shared setup cell, so
///    every clone is the same plugin instance as far as the registry is concerned.
/// 3. Implements `Deref<Target = <Name>Inner>` and `From<<Name>Inner>`.
/// 4. Implements `gac_kernel::plugin::PluginState` with the profile given in the arguments.
///
/// The author still implements `gac_kernel::plugin::ValidatorPlugin` to contribute the
/// constraint sets.
///
/// # Arguments
///
/// * `profile = "..."` - compliance profile identifier (required).
/// * `version = "..."` - compliance profile version (required).
///
/// # Example
/// ```rust,ignore
/// #[gac_derive::validator_plugin(profile = "GAC", version = "2.0")]
/// pub struct Gac20ValidatorPlugin {}
///
/// impl ValidatorPlugin for Gac20ValidatorPlugin {
///     fn constraint_sets(&self) -> Vec<ConstraintSet> {
///         vec![ConstraintSet::new(Self::PROFILE)]
///     }
/// }
///
/// let plugin = Gac20ValidatorPlugin::new(Gac20ValidatorPluginInner {});
/// ```
#[proc_macro_attribute]
pub fn validator_plugin(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::plugin::expand_plugin(args.into(), input).into()
}
