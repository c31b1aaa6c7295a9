//! Test fixtures for wasmfill development.
//!
//! [`GuardedBuffer`] wraps a fill target with a trailing guard region so
//! tests can assert that a fill wrote its span and nothing past it.
//! [`fixtures`] holds edge-case values per element kind.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use wasmfill_core::FillElement;

/// A payload of `len` elements followed by a guard region holding a sentinel.
pub struct GuardedBuffer<T: FillElement> {
    data: Vec<T>,
    len: usize,
    sentinel: T,
}

impl<T: FillElement> GuardedBuffer<T> {
    /// `len` payload elements set to `init`, then `guard` elements set to `sentinel`.
    pub fn new(len: usize, guard: usize, init: T, sentinel: T) -> Self {
        let mut data = vec![init; len];
        data.resize(len + guard, sentinel);
        Self {
            data,
            len,
            sentinel,
        }
    }

    /// Payload length in elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn payload(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Payload plus guard, for fills that are expected to stop at `len`.
    pub fn whole_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Base pointer of the payload, for the raw and exported fills.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// `true` if every payload element is bit-identical to `value`.
    pub fn payload_is(&self, value: T) -> bool {
        self.payload()
            .iter()
            .all(|v| v.bit_pattern() == value.bit_pattern())
    }

    /// `true` if no guard element has changed.
    pub fn guard_intact(&self) -> bool {
        self.data[self.len..]
            .iter()
            .all(|v| v.bit_pattern() == self.sentinel.bit_pattern())
    }
}
