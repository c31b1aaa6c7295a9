//! Element types a span can hold.
//!
//! [`ElementKind`] is the runtime tag, [`FillElement`] the compile-time one.
//! Both cover exactly the four numeric types of the export surface. Values
//! are stored little-endian, matching WebAssembly linear memory.

use std::fmt;
use std::str::FromStr;

use crate::error::SpanError;

/// Runtime tag for the element type of a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit IEEE-754 float.
    F32,
    /// 64-bit IEEE-754 float.
    F64,
}

impl ElementKind {
    /// All kinds, in export order.
    pub const ALL: [ElementKind; 4] = [Self::I32, Self::I64, Self::F32, Self::F64];

    /// Bytes per element.
    pub const fn size(self) -> usize {
        match self {
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 => 8,
        }
    }

    /// Required alignment of a span base, in bytes.
    ///
    /// Natural alignment: equal to [`size`](Self::size).
    pub const fn align(self) -> usize {
        self.size()
    }

    /// Short lowercase name (`"i32"`, `"f64"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            other => Err(SpanError::UnknownElementKind {
                name: other.to_string(),
            }),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A numeric type that can be written into a span.
///
/// Sealed: implemented for `i32`, `i64`, `f32` and `f64` only.
pub trait FillElement: Copy + PartialEq + fmt::Debug + Send + Sync + 'static + sealed::Sealed {
    /// Runtime tag for this type.
    const KIND: ElementKind;

    /// Bytes per element. Always `Self::KIND.size()`.
    const SIZE: usize;

    /// Write `self` little-endian into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != Self::SIZE`.
    fn write_le(self, out: &mut [u8]);

    /// Read a value from exactly `Self::SIZE` little-endian bytes.
    ///
    /// Returns `None` if `bytes` has the wrong length.
    fn read_le(bytes: &[u8]) -> Option<Self>;

    /// The raw bit pattern, zero-extended to 64 bits.
    ///
    /// Two floats compare equal here only if they are bit-identical, which
    /// is what NaN fidelity checks need.
    fn bit_pattern(self) -> u64;

    /// Wrap into the dynamically-typed [`FillValue`].
    fn into_value(self) -> FillValue;

    /// Unwrap from a [`FillValue`] of the same kind.
    fn from_value(value: FillValue) -> Option<Self>;
}

macro_rules! impl_fill_element {
    ($ty:ty, $kind:ident, $bits:expr) => {
        impl FillElement for $ty {
            const KIND: ElementKind = ElementKind::$kind;
            const SIZE: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn write_le(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Option<Self> {
                bytes.try_into().ok().map(<$ty>::from_le_bytes)
            }

            #[inline]
            fn bit_pattern(self) -> u64 {
                ($bits)(self)
            }

            fn into_value(self) -> FillValue {
                FillValue::$kind(self)
            }

            fn from_value(value: FillValue) -> Option<Self> {
                match value {
                    FillValue::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_fill_element!(i32, I32, |v: i32| v as u32 as u64);
impl_fill_element!(i64, I64, |v: i64| v as u64);
impl_fill_element!(f32, F32, |v: f32| v.to_bits() as u64);
impl_fill_element!(f64, F64, |v: f64| v.to_bits());

/// A fill value whose type is only known at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillValue {
    /// 32-bit signed integer value.
    I32(i32),
    /// 64-bit signed integer value.
    I64(i64),
    /// 32-bit float value.
    F32(f32),
    /// 64-bit float value.
    F64(f64),
}

impl FillValue {
    /// The element kind this value fills.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::I32(_) => ElementKind::I32,
            Self::I64(_) => ElementKind::I64,
            Self::F32(_) => ElementKind::F32,
            Self::F64(_) => ElementKind::F64,
        }
    }

    /// The zero value of the given kind.
    pub fn zero(kind: ElementKind) -> Self {
        match kind {
            ElementKind::I32 => Self::I32(0),
            ElementKind::I64 => Self::I64(0),
            ElementKind::F32 => Self::F32(0.0),
            ElementKind::F64 => Self::F64(0.0),
        }
    }
}

impl fmt::Display for FillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}i32"),
            Self::I64(v) => write!(f, "{v}i64"),
            Self::F32(v) => write!(f, "{v}f32"),
            Self::F64(v) => write!(f, "{v}f64"),
        }
    }
}
