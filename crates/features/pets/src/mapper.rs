use crate::dto::PetDto;
use pethub_kernel::domain::pet::Pet;

/// Stateless projection of domain pets into transfer records.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetMapper;

impl PetMapper {
    #[must_use]
    pub fn to_dto(&self, pet: &Pet) -> PetDto {
        PetDto::from(pet)
    }

    /// Maps every pet, preserving order.
    #[must_use]
    pub fn to_dtos(&self, pets: &[Pet]) -> Vec<PetDto> {
        pets.iter().map(|pet| self.to_dto(pet)).collect()
    }
}
