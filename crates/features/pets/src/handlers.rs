use crate::Pets;
use crate::dto::PetDto;
use crate::error::PetsError;
use axum::Json;
use axum::extract::Path;
use pethub_derive::api_handler;
use pethub_kernel::prelude::*;

#[api_handler(
    get,
    path = "/pets/hello",
    responses((status = OK, description = "Static greeting", body = String, content_type = "text/plain")),
    tag = PETS_TAG,
)]
pub(crate) async fn hello_handler() -> &'static str {
    PETS_GREETING
}

#[api_handler(
    get,
    path = "/pets",
    responses(
        (status = OK, description = "All pets in repository order", body = Vec<PetDto>),
        (status = INTERNAL_SERVER_ERROR, description = "Repository failure", body = ErrorBody),
    ),
    tag = PETS_TAG,
)]
pub(crate) async fn list_pets_handler(
    Slice(pets): Slice<Pets>,
) -> Result<Json<Vec<PetDto>>, PetsError> {
    pets.service.get_all_pets().map(Json)
}

#[api_handler(
    get,
    path = "/pets/{id}",
    params(("id" = String, Path, description = "Pet identifier")),
    responses(
        (status = OK, description = "The pet", body = PetDto),
        (status = NOT_FOUND, description = "No pet with this id", body = ErrorBody),
    ),
    tag = PETS_TAG,
)]
pub(crate) async fn get_pet_handler(
    Slice(pets): Slice<Pets>,
    Path(id): Path<String>,
) -> Result<Json<PetDto>, PetsError> {
    pets.service.get_pet(&id).map(Json)
}
