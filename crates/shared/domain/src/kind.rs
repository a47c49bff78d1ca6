//! Object kinds and their specialization hierarchy.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifies a kind of validated object.
///
/// Every root kind (`Event`, `Program`, `Ven`, `Report`) has a `New*` specialization for
/// objects not yet stored by the server and an `Existing*` one for stored objects.
/// Constraints registered for a root kind apply to both specializations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum ObjectKind {
    Event,
    NewEvent,
    ExistingEvent,
    Program,
    NewProgram,
    ExistingProgram,
    Ven,
    NewVen,
    ExistingVen,
    Report,
    NewReport,
    ExistingReport,
}

impl ObjectKind {
    /// The kind this one specializes, `None` for root kinds.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::NewEvent | Self::ExistingEvent => Some(Self::Event),
            Self::NewProgram | Self::ExistingProgram => Some(Self::Program),
            Self::NewVen | Self::ExistingVen => Some(Self::Ven),
            Self::NewReport | Self::ExistingReport => Some(Self::Report),
            Self::Event | Self::Program | Self::Ven | Self::Report => None,
        }
    }

    /// The root of this kind's hierarchy.
    #[must_use]
    pub const fn root(self) -> Self {
        match self.parent() {
            Some(parent) => parent,
            None => self,
        }
    }

    /// Iterates from `self` up to the root kind, most specific first.
    pub fn lineage(self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Returns `true` if `self` is `ancestor` or one of its specializations.
    #[must_use]
    pub fn is_a(self, ancestor: Self) -> bool {
        self.lineage().any(|kind| kind == ancestor)
    }

    /// Picks the `New*` or `Existing*` specialization of a root kind.
    #[must_use]
    pub const fn specialize(self, stored: bool) -> Self {
        match (self.root(), stored) {
            (Self::Event, false) => Self::NewEvent,
            (Self::Event, true) => Self::ExistingEvent,
            (Self::Program, false) => Self::NewProgram,
            (Self::Program, true) => Self::ExistingProgram,
            (Self::Ven, false) => Self::NewVen,
            (Self::Ven, true) => Self::ExistingVen,
            (_, false) => Self::NewReport,
            (_, true) => Self::ExistingReport,
        }
    }
}
