use crate::constants::GAC20;
use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Built-in compliance profiles that can be enabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ProfileSet: u32 {
        const GAC20 = 1 << 0;

        const ALL = Self::GAC20.bits();
    }
}

impl ProfileSet {
    /// Configuration names of the profiles in this set.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        [(Self::GAC20, GAC20)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::GAC20
    }
}

/// A profile name that no built-in profile answers to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown compliance profile '{0}' (expected gac20, all or *)")]
pub struct UnknownProfile(pub String);

impl FromStr for ProfileSet {
    type Err = UnknownProfile;

    /// Parses a comma separated list of names. Blank entries are skipped, so `""` is the
    /// empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_names(s.split(','))
    }
}

impl ProfileSet {
    /// Unions the named profiles, rejecting the first unknown name.
    ///
    /// # Errors
    /// Returns [`UnknownProfile`] for a name that is not `gac20`, `all` or `*`.
    pub fn parse_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self, UnknownProfile> {
        names.into_iter().map(str::trim).filter(|name| !name.is_empty()).try_fold(
            Self::empty(),
            |set, name| match name {
                GAC20 => Ok(set | Self::GAC20),
                "all" | "*" => Ok(set | Self::ALL),
                unknown => Err(UnknownProfile(unknown.to_owned())),
            },
        )
    }
}

impl From<u32> for ProfileSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

// Serialized as a list of names (`["gac20"]`) so config files stay readable.
impl Serialize for ProfileSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let names: Vec<_> = self.names().collect();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ProfileSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ProfileSetVisitor;

        impl<'de> Visitor<'de> for ProfileSetVisitor {
            type Value = ProfileSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of profile names or a comma separated string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v).map(ProfileSet::from).map_err(E::custom)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = ProfileSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= name.parse::<ProfileSet>().map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_any(ProfileSetVisitor)
    }
}
