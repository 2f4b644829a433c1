#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the `otsav` workspace.
//!
//! Currently this is a single attribute, [`macro@otsav_error`], which turns a plain enum
//! into the error type every crate in the workspace exposes.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(...)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a `source`.
/// * `From<Source>` for every variant with a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// * Only enums are accepted, and only variants with named fields.
/// * A `context` field must be `Option<Cow<'static, str>>`.
/// * A variant with a `source` (or `#[source]`/`#[from]`) field must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[otsav_derive::otsav_error]
/// pub enum ThemeError {
///     #[error("Theme store I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal theme error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &Path) -> Result<String, ThemeError> {
///     std::fs::read_to_string(path).context("Reading theme preference")
/// }
/// ```
#[proc_macro_attribute]
pub fn otsav_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
