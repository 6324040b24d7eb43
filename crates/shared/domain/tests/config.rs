use pethub_domain::config::{ApiConfig, LogConfig, PetSeed, ServerConfig};
use pethub_domain::pet::Kind;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.dir.is_none());

    let cfg = ApiConfig::default();
    assert!(cfg.pets.seed.is_empty());
}

#[test]
fn api_config_deserializes_with_seed() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "pets": {
            "seed": [
                { "id": "1", "name": "Rex", "kind": "DOG", "profile_text": "Friendly" },
                { "name": "Tom", "kind": "CAT" }
            ]
        }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.log.level, "info");
    assert_eq!(cfg.pets.seed.len(), 2);
    assert_eq!(cfg.pets.seed[0].kind, Kind::Dog);
    assert_eq!(cfg.pets.seed[1].id, None);
    assert_eq!(cfg.pets.seed[1].profile_text, "");
}

#[test]
fn seed_kind_ignores_case() {
    let raw = json!({ "name": "Rex", "kind": "dog" });
    let seed: PetSeed = serde_json::from_value(raw).expect("lowercase kind");
    assert_eq!(seed.kind, Kind::Dog);
}

#[test]
fn seed_rejects_unknown_kind() {
    let raw = json!({ "name": "Smaug", "kind": "DRAGON" });
    assert!(serde_json::from_value::<PetSeed>(raw).is_err());
}

#[test]
fn seed_generates_missing_or_blank_ids() {
    let seed = PetSeed { id: Some(" ".to_owned()), name: "Tom".to_owned(), kind: Kind::Cat, profile_text: String::new() };
    let pet = seed.into_pet(|| "generated".to_owned());
    assert_eq!(pet.id(), "generated");

    let seed = PetSeed { id: Some("7".to_owned()), name: "Rex".to_owned(), kind: Kind::Dog, profile_text: String::new() };
    let pet = seed.into_pet(|| unreachable!("id is present"));
    assert_eq!(pet.id(), "7");
}

#[test]
fn config_mutation_does_not_leak_into_clones() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(changed.server.port, 9000);
}
