use crate::dto::PetDto;
use crate::error::PetsError;
use crate::mapper::PetMapper;
use crate::repository::PetRepository;
use std::sync::Arc;
use tracing::debug;

/// Reads pets from the repository and projects them into transfer records.
#[derive(Debug, Clone)]
pub struct PetService {
    repository: Arc<dyn PetRepository>,
    mapper: PetMapper,
}

impl PetService {
    pub fn new(repository: Arc<dyn PetRepository>, mapper: PetMapper) -> Self {
        Self { repository, mapper }
    }

    /// All pets in repository order.
    ///
    /// # Errors
    /// Repository errors are returned unchanged.
    pub fn get_all_pets(&self) -> Result<Vec<PetDto>, PetsError> {
        let pets = self.repository.all()?;
        let dtos = self.mapper.to_dtos(&pets);
        debug!(count = dtos.len(), "Listed pets");
        Ok(dtos)
    }

    /// A single pet.
    ///
    /// # Errors
    /// [`PetsError::NotFound`] for an unknown id; repository errors are returned unchanged.
    pub fn get_pet(&self, id: &str) -> Result<PetDto, PetsError> {
        self.repository
            .find(id)?
            .map(|pet| self.mapper.to_dto(&pet))
            .ok_or_else(|| PetsError::NotFound { message: id.to_owned().into(), context: None })
    }
}
