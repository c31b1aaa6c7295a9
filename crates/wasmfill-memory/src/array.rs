//! Typed array descriptors into host memory.

use wasmfill_core::{ElementKind, FillElement, Span, SpanError};

/// A run of elements allocated in a [`HostApp`](crate::HostApp) memory.
///
/// `pointer` is the byte offset of element 0: exactly what the fill
/// exports take as their base argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypedArray {
    kind: ElementKind,
    pointer: u32,
    len: u32,
}

impl TypedArray {
    pub(crate) fn new(kind: ElementKind, pointer: u32, len: u32) -> Self {
        Self { kind, pointer, len }
    }

    /// Element type.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Byte offset of the first element.
    pub fn pointer(&self) -> u32 {
        self.pointer
    }

    /// Number of elements.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// `true` for a zero-length array.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size in bytes.
    pub fn byte_len(&self) -> usize {
        self.len as usize * self.kind.size()
    }

    /// The span this array occupies.
    pub fn span(&self) -> Span {
        Span::new(self.pointer, self.len, self.kind)
    }

    /// Fail unless this array holds `T`.
    pub(crate) fn expect_kind<T: FillElement>(&self) -> Result<(), SpanError> {
        if self.kind != T::KIND {
            return Err(SpanError::KindMismatch {
                expected: self.kind,
                found: T::KIND,
            });
        }
        Ok(())
    }
}
