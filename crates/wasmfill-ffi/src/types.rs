//! C-compatible element kind tag.

use wasmfill_core::ElementKind;

use crate::status::WasmfillStatus;

/// Element type of a span, as passed across the C ABI.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WasmfillElementKind {
    /// 32-bit signed integer.
    I32 = 0,
    /// 64-bit signed integer.
    I64 = 1,
    /// 32-bit float.
    F32 = 2,
    /// 64-bit float.
    F64 = 3,
}

impl TryFrom<i32> for WasmfillElementKind {
    type Error = WasmfillStatus;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::I32),
            1 => Ok(Self::I64),
            2 => Ok(Self::F32),
            3 => Ok(Self::F64),
            _ => Err(WasmfillStatus::InvalidArgument),
        }
    }
}

impl From<WasmfillElementKind> for ElementKind {
    fn from(kind: WasmfillElementKind) -> Self {
        match kind {
            WasmfillElementKind::I32 => ElementKind::I32,
            WasmfillElementKind::I64 => ElementKind::I64,
            WasmfillElementKind::F32 => ElementKind::F32,
            WasmfillElementKind::F64 => ElementKind::F64,
        }
    }
}

/// Bytes per element of `kind`, or `WASMFILL_STATUS_INVALID_ARGUMENT` for
/// an unknown kind.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn wasmfill_element_size(kind: i32) -> i32 {
    match WasmfillElementKind::try_from(kind) {
        Ok(k) => ElementKind::from(k).size() as i32,
        Err(status) => status as i32,
    }
}
