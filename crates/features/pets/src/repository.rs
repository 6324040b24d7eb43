//! Sources of domain pets.

use crate::error::PetsError;
use fxhash::FxHashSet;
use pethub_kernel::domain::pet::Pet;
use std::fmt::Debug;
use std::sync::Arc;

/// Supplies stored pets to the service.
pub trait PetRepository: Debug + Send + Sync {
    /// Current complete contents, in storage order.
    ///
    /// # Errors
    /// Implementation specific; the service passes errors through untouched.
    fn all(&self) -> Result<Vec<Pet>, PetsError>;

    /// Looks a pet up by id.
    ///
    /// # Errors
    /// Implementation specific; the service passes errors through untouched.
    fn find(&self, id: &str) -> Result<Option<Pet>, PetsError>;
}

/// Immutable in-process pet store, filled once at startup.
#[derive(Debug, Clone)]
pub struct InMemoryPetRepository {
    pets: Arc<[Pet]>,
}

impl InMemoryPetRepository {
    /// Builds the store, keeping the given order.
    ///
    /// # Errors
    /// Returns [`PetsError::Validation`] if two pets share an id.
    pub fn new(pets: impl IntoIterator<Item = Pet>) -> Result<Self, PetsError> {
        let pets: Vec<Pet> = pets.into_iter().collect();

        let mut seen = FxHashSet::default();
        if let Some(dup) = pets.iter().find(|pet| !seen.insert(pet.id())) {
            return Err(PetsError::Validation {
                message: format!("duplicate pet id '{}'", dup.id()).into(),
                context: None,
            });
        }

        Ok(Self { pets: pets.into() })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { pets: Vec::new().into() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pets.len()
    }
}

impl PetRepository for InMemoryPetRepository {
    fn all(&self) -> Result<Vec<Pet>, PetsError> {
        Ok(self.pets.to_vec())
    }

    fn find(&self, id: &str) -> Result<Option<Pet>, PetsError> {
        Ok(self.pets.iter().find(|pet| pet.id() == id).cloned())
    }
}
