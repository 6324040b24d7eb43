//! Wire representation of pets.
//!
//! Field-identical to the domain entity today, but kept separate so either side can
//! change without forcing a change on the other.

use pethub_derive::api_model;
use pethub_kernel::domain::pet::{Kind, Pet};
use serde::{Deserialize, Serialize};

/// Pet category as exposed over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KindDto {
    Dog,
    Cat,
    Bird,
    Fish,
    Rabbit,
    Reptile,
    Other,
}

/// A pet as returned by `GET /pets`.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct PetDto {
    /// Unique pet identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Pet category
    pub kind: KindDto,
    /// Free-form description
    pub profile_text: String,
}

impl From<Kind> for KindDto {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Dog => Self::Dog,
            Kind::Cat => Self::Cat,
            Kind::Bird => Self::Bird,
            Kind::Fish => Self::Fish,
            Kind::Rabbit => Self::Rabbit,
            Kind::Reptile => Self::Reptile,
            Kind::Other => Self::Other,
        }
    }
}

impl From<&Pet> for PetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id().to_owned(),
            name: pet.name().to_owned(),
            kind: pet.kind().into(),
            profile_text: pet.profile_text().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_fields() {
        let dto = PetDto::from(&Pet::new("1", "Rex", Kind::Dog, "Friendly"));
        assert_eq!(
            serde_json::to_value(&dto).expect("serialize"),
            json!({ "id": "1", "name": "Rex", "kind": "DOG", "profileText": "Friendly" })
        );
    }

    #[test]
    fn kind_wire_names_match_domain_names() {
        let kinds =
            [Kind::Dog, Kind::Cat, Kind::Bird, Kind::Fish, Kind::Rabbit, Kind::Reptile, Kind::Other];
        for kind in kinds {
            let wire = serde_json::to_value(KindDto::from(kind)).expect("serialize");
            assert_eq!(wire, json!(kind.to_string()));
        }
    }

    #[test]
    fn empty_profile_text_is_serialized_not_omitted() {
        let dto = PetDto::from(&Pet::new("7", "Polly", Kind::Bird, ""));
        let wire = serde_json::to_value(&dto).expect("serialize");

        let keys: Vec<&str> =
            wire.as_object().expect("object").keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4, "{keys:?}");
        assert_eq!(wire["profileText"], json!(""));
    }
}
