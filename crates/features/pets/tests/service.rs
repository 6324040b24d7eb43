use pethub_kernel::domain::pet::{Kind, Pet};
use pethub_pets::PetsError;
use pethub_pets::mapper::PetMapper;
use pethub_pets::repository::{InMemoryPetRepository, PetRepository};
use pethub_pets::service::PetService;
use std::sync::Arc;

#[derive(Debug)]
struct UnavailableRepository;

impl PetRepository for UnavailableRepository {
    fn all(&self) -> Result<Vec<Pet>, PetsError> {
        Err(PetsError::from(Box::<dyn std::error::Error + Send + Sync>::from("storage offline")))
    }

    fn find(&self, _id: &str) -> Result<Option<Pet>, PetsError> {
        Err(PetsError::from(Box::<dyn std::error::Error + Send + Sync>::from("storage offline")))
    }
}

fn service_with(pets: Vec<Pet>) -> (PetService, Arc<InMemoryPetRepository>) {
    let repository = Arc::new(InMemoryPetRepository::new(pets).expect("unique ids"));
    (PetService::new(repository.clone(), PetMapper), repository)
}

#[test]
fn get_all_pets_is_the_mapped_repository_contents() {
    let (service, repository) = service_with(vec![
        Pet::new("2", "Tom", Kind::Cat, "Aloof"),
        Pet::new("1", "Rex", Kind::Dog, "Friendly"),
        Pet::new("3", "Polly", Kind::Bird, ""),
    ]);

    let expected = PetMapper.to_dtos(&repository.all().expect("repository"));
    assert_eq!(service.get_all_pets().expect("service"), expected);
}

#[test]
fn empty_repository_yields_empty_list() {
    let service = PetService::new(Arc::new(InMemoryPetRepository::empty()), PetMapper);
    assert!(service.get_all_pets().expect("service").is_empty());
}

#[test]
fn get_pet_maps_the_match() {
    let (service, _) = service_with(vec![Pet::new("1", "Rex", Kind::Dog, "Friendly")]);

    let dto = service.get_pet("1").expect("pet exists");
    assert_eq!(dto.name, "Rex");
}

#[test]
fn get_pet_reports_not_found() {
    let (service, _) = service_with(vec![]);

    let err = service.get_pet("missing").expect_err("no such pet");
    assert!(matches!(err, PetsError::NotFound { .. }));
    assert_eq!(err.to_string(), "Pet not found: missing");
}

#[test]
fn repository_failure_passes_through_unchanged() {
    let service = PetService::new(Arc::new(UnavailableRepository), PetMapper);

    let err = service.get_all_pets().expect_err("repository is down");
    assert!(matches!(err, PetsError::Repository { context: None, .. }));
    assert_eq!(err.to_string(), "Pet repository error: storage offline");

    let err = service.get_pet("1").expect_err("repository is down");
    assert!(matches!(err, PetsError::Repository { .. }));
}
