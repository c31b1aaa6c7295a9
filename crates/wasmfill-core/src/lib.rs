//! Typed fill primitives for the wasmfill workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! four element types a host can fill (`i32`, `i64`, `f32`, `f64`), the
//! [`Span`] descriptor for a run of elements in linear memory, and the fill
//! operations themselves:
//!
//! - [`fill`](fill::fill) / [`fill_prefix`](fill::fill_prefix) over typed slices,
//! - [`fill_le_bytes`](fill::fill_le_bytes) over raw little-endian byte storage,
//! - [`raw::fill_raw`] for callers that own the bounds (the export surface).
//!
//! This crate is one of two that may contain `unsafe` code (along with
//! `wasmfill-ffi`), and only inside [`raw`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod element;
pub mod error;
pub mod fill;
pub mod raw;
pub mod span;
#[cfg(feature = "custom-function")]
pub mod transform;

pub use element::{ElementKind, FillElement, FillValue};
pub use error::SpanError;
pub use fill::{fill, fill_le_bytes, fill_prefix, fill_value_le_bytes};
pub use span::Span;
