//! Wasmfill: typed fills over WebAssembly linear memory.
//!
//! This is the facade crate that re-exports the safe public API of the
//! wasmfill sub-crates. The C/WebAssembly export table lives in
//! `wasmfill-ffi` and is built separately as a `cdylib`.
//!
//! # Quick start
//!
//! ```rust
//! use wasmfill::prelude::*;
//!
//! // One imported page that may grow to two.
//! let mut app = HostApp::new(MemoryConfig::default()).unwrap();
//!
//! let arr = app.new_array(10, ElementKind::I32).unwrap();
//! app.i32_fill(arr.pointer(), 10, 42).unwrap();
//! app.i32_fill(arr.pointer(), 3, -1).unwrap();
//!
//! let values = app.to_vec::<i32>(&arr).unwrap();
//! assert_eq!(values, [-1, -1, -1, 42, 42, 42, 42, 42, 42, 42]);
//!
//! // Plain slices work too.
//! let mut buf = [0.0f64; 4];
//! fill(&mut buf, 0.5);
//! assert_eq!(buf, [0.5; 4]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`primitives`] | `wasmfill-core` | Element kinds, fill primitives, spans, errors |
//! | [`memory`] | `wasmfill-memory` | Linear memory, typed arrays, the host |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element kinds, fill primitives, and spans (`wasmfill-core`).
///
/// Includes the slice fills ([`primitives::fill()`],
/// [`primitives::fill_prefix()`]), the byte-level fills used against linear
/// memory, and [`primitives::Span`].
pub use wasmfill_core as primitives;

/// Host-side linear memory and typed arrays (`wasmfill-memory`).
///
/// [`memory::HostApp`] allocates arrays and fills them through calls
/// shaped like the module exports.
pub use wasmfill_memory as memory;

/// Common imports for typical wasmfill usage.
///
/// ```rust
/// use wasmfill::prelude::*;
/// ```
pub mod prelude {
    // Element types and fills
    pub use wasmfill_core::{fill, fill_prefix, ElementKind, FillElement, FillValue, Span};

    // Host
    pub use wasmfill_memory::{HostApp, MemoryConfig, MemoryOrigin, Pages, TypedArray};

    // Errors
    pub use wasmfill_core::SpanError;
    pub use wasmfill_memory::MemoryError;
}
