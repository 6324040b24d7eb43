/// `OpenAPI` tag for platform endpoints (health, docs).
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the pets slice.
pub const PETS_TAG: &str = "Pets";

/// Route prefix of the pets slice.
pub const PETS_PATH: &str = "/pets";
/// Body of `GET /pets/hello`.
pub const PETS_GREETING: &str = "Hello Pets!";

/// Environment variable prefix for configuration overrides (`PETHUB__SERVER__PORT`).
pub const ENV_PREFIX: &str = "PETHUB";
/// Default configuration file stem, resolved from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "server";
