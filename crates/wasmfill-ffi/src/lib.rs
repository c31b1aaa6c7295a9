//! C ABI and WebAssembly exports for the wasmfill primitives.
//!
//! Two surfaces live here:
//!
//! - [`exports`]: `i32Fill`, `i64Fill`, `f32Fill`, `f64Fill` (and
//!   `f64myCustomFunction`), unchecked and allocation-free. These are what a
//!   WebAssembly host calls with a pointer into the module's linear memory.
//! - [`checked`]: `wasmfill_*_fill_checked`, which validate what can be
//!   validated from a pointer and length and return a [`WasmfillStatus`].
//!
//! This crate is one of two that may contain `unsafe` code (along with
//! `wasmfill-core`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, mapping a caught panic to `WasmfillStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::WasmfillStatus::Panicked as i32, $body)
    };
}

/// Run an FFI body, returning `$fallback` if it panics.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(v) => v,
            Err(_) => $fallback,
        }
    };
}

pub mod checked;
pub mod exports;
pub mod status;
pub mod types;

pub use status::WasmfillStatus;
pub use types::WasmfillElementKind;
