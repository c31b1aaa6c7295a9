//! Checked fill exports for C callers.
//!
//! A pointer and a length cannot prove the memory behind them exists, but
//! they can be rejected when null, misaligned, or too long to address.
//! Each function returns a [`WasmfillStatus`] code and writes nothing unless
//! the code is `Ok`.

use wasmfill_core::raw::fill_raw;
use wasmfill_core::{FillElement, SpanError};

use crate::status::WasmfillStatus;

fn validate<T: FillElement>(array: *const T, len: usize) -> Result<(), SpanError> {
    let overflow = SpanError::AddressOverflow {
        base: array as usize as u64,
        len: len as u64,
        elem_size: T::SIZE,
    };
    let bytes = len.checked_mul(T::SIZE).ok_or(overflow.clone())?;
    if bytes > isize::MAX as usize || (array as usize).checked_add(bytes).is_none() {
        return Err(overflow);
    }
    if array as usize % std::mem::align_of::<T>() != 0 {
        return Err(SpanError::Misaligned {
            base: array as usize as u64,
            align: std::mem::align_of::<T>(),
        });
    }
    Ok(())
}

#[allow(unsafe_code)]
fn fill_checked<T: FillElement>(array: *mut T, len: usize, value: T) -> i32 {
    ffi_guard!({
        if len == 0 {
            return WasmfillStatus::Ok as i32;
        }
        if array.is_null() {
            return WasmfillStatus::InvalidArgument as i32;
        }
        let status = WasmfillStatus::from(validate(array, len));
        if status != WasmfillStatus::Ok {
            return status as i32;
        }
        // SAFETY: non-null, aligned and addressable; extent is the caller's contract.
        unsafe { fill_raw(array, len, value) };
        WasmfillStatus::Ok as i32
    })
}

/// Fill `array[0..len]` with `value` (32-bit integers).
///
/// `array` must point to at least `len` writable elements. Returns
/// `WASMFILL_STATUS_OK`, or an error code with nothing written.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn wasmfill_i32_fill_checked(array: *mut i32, len: usize, value: i32) -> i32 {
    fill_checked(array, len, value)
}

/// Fill `array[0..len]` with `value` (64-bit integers).
///
/// `array` must point to at least `len` writable elements. Returns
/// `WASMFILL_STATUS_OK`, or an error code with nothing written.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn wasmfill_i64_fill_checked(array: *mut i64, len: usize, value: i64) -> i32 {
    fill_checked(array, len, value)
}

/// Fill `array[0..len]` with `value` (32-bit floats).
///
/// `array` must point to at least `len` writable elements. Returns
/// `WASMFILL_STATUS_OK`, or an error code with nothing written.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn wasmfill_f32_fill_checked(array: *mut f32, len: usize, value: f32) -> i32 {
    fill_checked(array, len, value)
}

/// Fill `array[0..len]` with `value` (64-bit floats).
///
/// `array` must point to at least `len` writable elements. Returns
/// `WASMFILL_STATUS_OK`, or an error code with nothing written.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn wasmfill_f64_fill_checked(array: *mut f64, len: usize, value: f64) -> i32 {
    fill_checked(array, len, value)
}
