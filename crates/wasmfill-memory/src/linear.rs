//! Byte-addressable linear memory.

use std::ops::Range;

use wasmfill_core::SpanError;

use crate::config::{MemoryConfig, MemoryOrigin};
use crate::error::MemoryError;
use crate::units::{Bytes, Pages};

/// A zero-initialised, little-endian, page-granular byte store.
///
/// Growth appends zeroed pages; existing bytes never move relative to
/// address 0, so offsets taken before a grow stay meaningful after it.
pub struct LinearMemory {
    data: Vec<u8>,
    maximum: Pages,
    origin: MemoryOrigin,
}

impl LinearMemory {
    /// Create a memory of `config.initial` pages.
    ///
    /// Validates `config` first.
    pub fn new(config: &MemoryConfig) -> Result<Self, MemoryError> {
        config.validate()?;
        Ok(Self {
            data: vec![0; config.initial.bytes().0],
            maximum: config.maximum,
            origin: config.origin,
        })
    }

    /// Current size in pages.
    pub fn size(&self) -> Pages {
        // Length is always a whole number of pages, at most MAX_PAGES.
        self.data_size().whole_pages().unwrap_or(Pages::MAX)
    }

    /// Current size in bytes.
    pub fn data_size(&self) -> Bytes {
        Bytes(self.data.len())
    }

    /// Configured maximum size.
    pub fn maximum(&self) -> Pages {
        self.maximum
    }

    /// Grow by `delta` pages, returning the previous size.
    ///
    /// Fails with [`MemoryError::CouldNotGrow`] if the memory is exported
    /// (and `delta` is non-zero) or the result would exceed the maximum.
    pub fn grow(&mut self, delta: Pages) -> Result<Pages, MemoryError> {
        let previous = self.size();
        if delta.0 == 0 {
            return Ok(previous);
        }
        let error = MemoryError::CouldNotGrow {
            current: previous,
            delta,
            maximum: self.maximum,
        };
        if self.origin == MemoryOrigin::Exported {
            return Err(error);
        }
        let new_size = match previous.checked_add(delta) {
            Some(size) if size <= self.maximum => size,
            _ => return Err(error),
        };
        self.data.resize(new_size.bytes().0, 0);
        tracing::debug!(from = previous.0, to = new_size.0, "linear memory grown");
        Ok(previous)
    }

    /// Bytes in `range`, bounds-checked.
    pub fn bytes(&self, range: Range<usize>) -> Result<&[u8], MemoryError> {
        let available = self.data.len();
        let end = range.end;
        self.data
            .get(range)
            .ok_or(MemoryError::Span(SpanError::OutOfBounds {
                requested: end,
                available,
            }))
    }

    /// Mutable bytes in `range`, bounds-checked.
    pub fn bytes_mut(&mut self, range: Range<usize>) -> Result<&mut [u8], MemoryError> {
        let available = self.data.len();
        let end = range.end;
        self.data
            .get_mut(range)
            .ok_or(MemoryError::Span(SpanError::OutOfBounds {
                requested: end,
                available,
            }))
    }

    /// The whole memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
