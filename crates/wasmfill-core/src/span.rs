//! Bounds-carrying descriptor for a run of elements in linear memory.
//!
//! A [`Span`] names memory, it does not own or borrow it. Resolving a span
//! against a concrete region ([`Span::resolve`]) is where bounds are checked;
//! the result is a byte range the caller can slice with.

use std::ops::Range;

use crate::element::ElementKind;
use crate::error::SpanError;

/// Exclusive upper bound of a 32-bit linear address space.
const ADDRESS_SPACE_END: u64 = 1 << 32;

/// A contiguous run of same-typed elements in a 32-bit linear memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte address of the first element.
    pub base: u32,
    /// Number of elements.
    pub len: u32,
    /// Element type.
    pub kind: ElementKind,
}

impl Span {
    /// Describe `len` elements of `kind` starting at byte address `base`.
    pub const fn new(base: u32, len: u32, kind: ElementKind) -> Self {
        Self { base, len, kind }
    }

    /// `true` if the span covers no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total size of the span in bytes.
    pub fn byte_len(&self) -> Result<usize, SpanError> {
        (self.len as usize)
            .checked_mul(self.kind.size())
            .ok_or(self.overflow())
    }

    /// Byte range `[base, base + len * size)` within the address space.
    ///
    /// Fails with [`SpanError::AddressOverflow`] if the end would lie past
    /// the last 32-bit address.
    pub fn byte_range(&self) -> Result<Range<usize>, SpanError> {
        let end = self
            .byte_len()
            .ok()
            .and_then(|n| (self.base as usize).checked_add(n))
            .filter(|&end| end as u64 <= ADDRESS_SPACE_END)
            .ok_or(self.overflow())?;
        Ok(self.base as usize..end)
    }

    /// Byte range of the span inside a region of `region_len` bytes.
    pub fn resolve(&self, region_len: usize) -> Result<Range<usize>, SpanError> {
        let range = self.byte_range()?;
        if range.end > region_len {
            return Err(SpanError::OutOfBounds {
                requested: range.end,
                available: region_len,
            });
        }
        Ok(range)
    }

    /// Check that `base` is a multiple of the element alignment.
    pub fn check_aligned(&self) -> Result<(), SpanError> {
        let align = self.kind.align();
        if self.base as usize % align != 0 {
            return Err(SpanError::Misaligned {
                base: self.base as u64,
                align,
            });
        }
        Ok(())
    }

    /// The first `len` elements of this span.
    pub fn prefix(&self, len: u32) -> Result<Span, SpanError> {
        if len > self.len {
            return Err(SpanError::OutOfBounds {
                requested: len as usize,
                available: self.len as usize,
            });
        }
        Ok(Span { len, ..*self })
    }

    /// Byte address of element `index`, or `None` if `index >= len`.
    pub fn element_addr(&self, index: u32) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        Some(self.base as usize + index as usize * self.kind.size())
    }

    fn overflow(&self) -> SpanError {
        SpanError::AddressOverflow {
            base: self.base as u64,
            len: self.len as u64,
            elem_size: self.kind.size(),
        }
    }
}
