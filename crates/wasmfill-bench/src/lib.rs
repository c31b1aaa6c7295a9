//! Benchmark fixtures for the wasmfill fill primitives.
//!
//! - [`ELEMENT_COUNTS`]: array lengths every fill benchmark runs at
//! - [`prepared_host`]: a host with one array of each kind already allocated

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wasmfill_core::ElementKind;
use wasmfill_memory::{HostApp, MemoryConfig, MemoryError, Pages, TypedArray};

/// Array lengths to benchmark.
pub const ELEMENT_COUNTS: [u32; 3] = [16, 1_024, 16_384];

/// A host with one `len`-element array per [`ElementKind`], in
/// [`ElementKind::ALL`] order.
///
/// The memory is imported with one page of headroom past all four arrays.
pub fn prepared_host(len: u32) -> Result<(HostApp, [TypedArray; 4]), MemoryError> {
    let bytes: usize = ElementKind::ALL
        .iter()
        .map(|k| len as usize * k.size())
        .sum();
    let pages = wasmfill_memory::Bytes(bytes)
        .pages_to_fit()
        .unwrap_or(Pages::MAX)
        .0
        .max(1);
    let mut app = HostApp::new(MemoryConfig::imported(1, pages + 1))?;
    let [i32s, i64s, f32s, f64s] = ElementKind::ALL;
    let arrays = [
        app.new_array(len, i32s)?,
        app.new_array(len, i64s)?,
        app.new_array(len, f32s)?,
        app.new_array(len, f64s)?,
    ];
    Ok((app, arrays))
}
