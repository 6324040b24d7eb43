use pethub_kernel::domain::config::{PetSeed, PetsConfig};
use pethub_kernel::domain::pet::Kind;
use pethub_kernel::SAFE_ALPHABET;
use pethub_pets::{Pets, PetsError, init};
use std::any::TypeId;

fn seed(id: Option<&str>, name: &str, kind: Kind) -> PetSeed {
    PetSeed { id: id.map(str::to_owned), name: name.to_owned(), kind, profile_text: String::new() }
}

#[test]
fn init_registers_the_pets_slice() {
    let config = PetsConfig { seed: vec![seed(Some("1"), "Rex", Kind::Dog)] };

    let slice = init(&config).expect("init should succeed");
    assert_eq!(slice.id, TypeId::of::<Pets>());

    let pets = slice.downcast_ref::<Pets>().expect("pets slice");
    let listed = pets.service.get_all_pets().expect("listing");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "1");
}

#[test]
fn init_generates_missing_ids() {
    let config = PetsConfig { seed: vec![seed(None, "Tom", Kind::Cat), seed(None, "Rex", Kind::Dog)] };

    let slice = init(&config).expect("init should succeed");
    let pets = slice.downcast_ref::<Pets>().expect("pets slice");
    let listed = pets.service.get_all_pets().expect("listing");

    assert_eq!(listed.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), ["Tom", "Rex"]);
    assert_ne!(listed[0].id, listed[1].id);
    assert!(listed.iter().all(|p| p.id.chars().all(|c| SAFE_ALPHABET.contains(&c))));
}

#[test]
fn init_rejects_duplicate_seed_ids() {
    let config = PetsConfig {
        seed: vec![seed(Some("1"), "Rex", Kind::Dog), seed(Some("1"), "Tom", Kind::Cat)],
    };

    let err = init(&config).expect_err("duplicate ids");
    assert!(matches!(err, PetsError::Validation { context: Some(_), .. }));
}
