//! Pets feature slice.
//!
//! Layers, leaf first: [`dto`] wire records, [`mapper::PetMapper`] projection,
//! [`repository::PetRepository`] storage seam, [`service::PetService`] orchestration,
//! and (with `server`) the Axum handlers behind [`router`].

pub mod dto;
mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod mapper;
pub mod repository;
pub mod service;

pub use error::{PetsError, PetsErrorExt};

use crate::mapper::PetMapper;
use crate::repository::{InMemoryPetRepository, PetRepository};
use crate::service::PetService;
use pethub_kernel::domain::config::PetsConfig;
use pethub_kernel::domain::registry::InitializedSlice;
use pethub_kernel::safe_nanoid;
use std::sync::Arc;

/// Pets feature state: one service instance shared by all requests.
#[pethub_derive::pethub_slice]
pub struct Pets {
    pub service: PetService,
}

impl Pets {
    /// Wires mapper and service around `repository`.
    #[must_use]
    pub fn with_repository(repository: Arc<dyn PetRepository>) -> Self {
        Self::new(PetsInner { service: PetService::new(repository, PetMapper) })
    }
}

/// Initialize the pets feature from its configuration.
///
/// Seed entries without an id get a generated one.
///
/// # Errors
/// Returns [`PetsError::Validation`] if the seed contains duplicate ids.
pub fn init(config: &PetsConfig) -> Result<InitializedSlice, PetsError> {
    let pets = config.seed.iter().cloned().map(|seed| seed.into_pet(|| safe_nanoid!()));
    let repository = InMemoryPetRepository::new(pets).context("Seeding pet repository")?;

    tracing::info!(pets = repository.len(), "Pets slice initialized");

    Ok(InitializedSlice::new(Pets::with_repository(Arc::new(repository))))
}

/// Routes of the pets slice, documented for `OpenAPI`.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<pethub_kernel::server::ApiState> {
    use utoipa_axum::routes;

    utoipa_axum::router::OpenApiRouter::new()
        .routes(routes!(handlers::hello_handler))
        .routes(routes!(handlers::list_pets_handler))
        .routes(routes!(handlers::get_pet_handler))
}
