//! The pet entity as stored by repositories.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Closed set of pet categories.
///
/// Serialized as `SCREAMING_SNAKE_CASE` (`"DOG"`). Parsing, through [`str::parse`] or serde,
/// ignores case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Kind {
    Dog,
    Cat,
    Bird,
    Fish,
    Rabbit,
    Reptile,
    Other,
}

impl TryFrom<String> for Kind {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A stored pet. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pet {
    id: String,
    name: String,
    kind: Kind,
    profile_text: String,
}

impl Pet {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: Kind,
        profile_text: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), name: name.into(), kind, profile_text: profile_text.into() }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn profile_text(&self) -> &str {
        &self.profile_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("dog".parse::<Kind>(), Ok(Kind::Dog));
        assert_eq!("Reptile".parse::<Kind>(), Ok(Kind::Reptile));
        assert!("dragon".parse::<Kind>().is_err());
    }

    #[test]
    fn kind_display_matches_wire_name() {
        for kind in Kind::iter() {
            let wire = serde_json::to_value(kind).expect("serialize kind");
            assert_eq!(wire, serde_json::Value::String(kind.to_string()));
        }
    }

    #[test]
    fn kind_deserializes_case_insensitively() {
        let kinds: Vec<Kind> =
            serde_json::from_str(r#"["dog", "Cat", "BIRD"]"#).expect("deserialize kinds");
        assert_eq!(kinds, [Kind::Dog, Kind::Cat, Kind::Bird]);
        assert!(serde_json::from_str::<Kind>(r#""dragon""#).is_err());
    }

    #[test]
    fn accessors_return_constructor_values() {
        let pet = Pet::new("1", "Rex", Kind::Dog, "Friendly");
        assert_eq!(pet.id(), "1");
        assert_eq!(pet.name(), "Rex");
        assert_eq!(pet.kind(), Kind::Dog);
        assert_eq!(pet.profile_text(), "Friendly");
    }
}
