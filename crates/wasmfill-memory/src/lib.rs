//! Host-side linear memory for the wasmfill primitives.
//!
//! Models the environment that owns a module's memory: page-granular
//! growth, a bump allocator handing out typed arrays, and bounds-checked
//! calls into the fill primitives.
//!
//! ```text
//! HostApp
//! ├── MemoryConfig   (initial/maximum pages, exported or imported)
//! ├── LinearMemory   (little-endian bytes, grows a page at a time)
//! └── IndexMap<String, TypedArray>   (named offset-based descriptors)
//! ```
//!
//! Typed arrays are descriptors (kind, pointer, length), not borrows, so
//! they stay valid when the memory grows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod app;
pub mod array;
pub mod config;
pub mod error;
pub mod linear;
pub mod units;

pub use app::HostApp;
pub use array::TypedArray;
pub use config::{MemoryConfig, MemoryOrigin};
pub use error::MemoryError;
pub use linear::LinearMemory;
pub use units::{Bytes, Pages, MAX_PAGES, PAGE_SIZE};
