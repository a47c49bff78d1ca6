use crate::profile::Profile;
use gac_domain::ObjectKind;
use std::borrow::Cow;

/// Reasons a plugin registration is rejected. A rejected registration changes nothing.
#[gac_derive::gac_error]
pub enum RegistryError {
    #[error(
        "Constraint '{id}' for {kind} from {profile} is already registered by {existing}{}",
        format_context(.context)
    )]
    DuplicateConstraint {
        id: Cow<'static, str>,
        kind: ObjectKind,
        profile: Profile,
        existing: Profile,
        context: Option<Cow<'static, str>>,
    },

    #[error("Constraint '{id}' targets {kind}, which is not a kind of {model}{}", format_context(.context))]
    KindMismatch {
        id: Cow<'static, str>,
        kind: ObjectKind,
        model: ObjectKind,
        context: Option<Cow<'static, str>>,
    },
}
