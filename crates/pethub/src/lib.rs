//! Facade crate for `PetHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no business logic.

pub use pethub_domain as domain;
use pethub_domain::config::ApiConfig;
use pethub_domain::registry::InitializedSlice;
pub use pethub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use pethub_kernel::server::router::system_router;
        pub use pethub_pets::router as pets_router;
    }
}

/// Feature slices composed by [`init`].
pub mod features {
    pub use pethub_pets as pets;
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns the first slice initialization failure.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::pets::init(&config.pets)?];

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_defaults_registers_one_slice() {
        let slices = init(&ApiConfig::default()).expect("default config initializes");
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].id, std::any::TypeId::of::<features::pets::Pets>());
    }
}
