#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `PetHub` crates.
//!
//! * [`macro@pethub_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@pethub_slice`] turns a struct into an `Arc`-backed feature slice handle.
//! * [`macro@api_model`] and [`macro@api_handler`] keep DTOs and Axum handlers consistent
//!   and documented through `utoipa` when the consumer enables its `server` feature.
//! * [`macro@main`] bootstraps the Tokio runtime from `pethub-runtime`.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime.
///
/// Turns an `async fn main` returning a `Result` into a plain `fn main` that builds a
/// runtime from one of the `pethub_runtime::RuntimeConfig` presets.
///
/// # Arguments
///
/// * `high_performance` - Server profile.
/// * `memory_efficient` - Small-footprint profile.
/// * `default` - Worker threads detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[pethub_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for API data models (DTOs).
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` unless already present.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate's `server` feature is on.
/// * **Serde Policy**: `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// # Arguments
///
/// * `rename_all = "..."` - Overrides the serde rename policy.
/// * `deny_unknown_fields = false` - Disables strict field checking.
///
/// # Example
///
/// ```rust,ignore
/// use pethub_derive::api_model;
///
/// #[api_model]
/// pub struct PetDto {
///     pub id: String,
///     pub profile_text: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro bridging Axum handlers with `OpenAPI` documentation.
///
/// Accepts the same arguments as `utoipa::path` (`get`, `path = "..."`, `responses(...)`,
/// `tag = ...`) and only emits the `utoipa::path` attribute when the consuming crate's
/// `server` feature is on.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(get, path = "/pets/hello", responses((status = OK, body = String)))]
/// pub async fn hello_handler() -> &'static str {
///     "Hello Pets!"
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for domain error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant carrying a source.
/// * `From<SourceError>` for variants with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper used by the `#[error(...)]` strings.
///
/// # Requirements
///
/// Every variant has named fields. Variants with a source also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[pethub_derive::pethub_error]
/// pub enum PetsError {
///     #[error("Pet not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn pethub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro defining a feature slice handle.
///
/// For `struct Pets { .. }` it generates `PetsInner` with the declared fields, a cloneable
/// `Pets` wrapper over `Arc<PetsInner>` with `Deref`, and the `FeatureSlice` impl used by
/// the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[pethub_derive::pethub_slice]
/// pub struct Pets {
///     pub service: PetService,
/// }
///
/// let slice = Pets::new(PetsInner { service });
/// ```
#[proc_macro_attribute]
pub fn pethub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
