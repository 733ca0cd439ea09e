#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the feature slices.
//!
//! * [`macro@vacc_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@vacc_slice`] turns a struct into a registrable feature slice handle.
//!
//! Examples are `ignore`d because they need the consuming crates in scope.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for domain error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant with a `source` field.
/// * `From<SourceError>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * `kind(&self) -> &'static str`, the variant name, meant for structured log fields.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants must use named fields; tuple and unit variants are rejected.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[vacc_derive::vacc_error]
/// pub enum ContentClientError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal content error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// async fn fetch(client: &reqwest::Client) -> Result<(), ContentClientError> {
///     let response = client.get("...").send().await.context("Fetching RSV document")?;
///     # Ok(())
/// }
///
/// if let Err(err) = fetch(&client).await {
///     tracing::warn!(kind = err.kind(), "content fetch failed: {err}");
/// }
/// ```
#[proc_macro_attribute]
pub fn vacc_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cheap
/// `Arc` handle that derefs to the inner state and implements
/// `vacc_kernel::domain::registry::FeatureSlice`, so it can be registered in the
/// server state and fetched back by type.
///
/// # Example
/// ```rust,ignore
/// #[vacc_derive::vacc_slice]
/// pub struct Content {
///     pub source: std::sync::Arc<dyn ContentSource>,
/// }
///
/// let slice = Content::new(ContentInner { source });
/// assert_eq!(slice.slice_name(), "Content");
/// ```
#[proc_macro_attribute]
pub fn vacc_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
