//! Unchecked fill exports: the module's public function table.
//!
//! Symbol names and signatures are fixed by the hosts that load the
//! module: a base pointer into linear memory, a signed 32-bit element
//! count, and a value. A count of zero or less writes nothing. No other
//! argument is validated; debug builds assert a non-null, aligned base.

#![allow(unsafe_code)]

use wasmfill_core::raw::fill_raw;
use wasmfill_core::FillElement;

#[inline(always)]
unsafe fn fill_export<T: FillElement>(array: *mut T, length: i32, value: T) {
    let len = usize::try_from(length).unwrap_or(0);
    // SAFETY: forwarded from the export's caller contract.
    unsafe { fill_raw(array, len, value) }
}

/// Write `value` to `array[0..length]` (32-bit integers).
///
/// # Safety
///
/// `array` must be valid for writes of `length` aligned `i32`s when
/// `length > 0`.
#[export_name = "i32Fill"]
pub unsafe extern "C" fn i32_fill(array: *mut i32, length: i32, value: i32) {
    // SAFETY: same contract as this function.
    unsafe { fill_export(array, length, value) }
}

/// Write `value` to `array[0..length]` (64-bit integers).
///
/// # Safety
///
/// `array` must be valid for writes of `length` aligned `i64`s when
/// `length > 0`.
#[export_name = "i64Fill"]
pub unsafe extern "C" fn i64_fill(array: *mut i64, length: i32, value: i64) {
    // SAFETY: same contract as this function.
    unsafe { fill_export(array, length, value) }
}

/// Write `value` to `array[0..length]` (32-bit floats).
///
/// # Safety
///
/// `array` must be valid for writes of `length` aligned `f32`s when
/// `length > 0`.
#[export_name = "f32Fill"]
pub unsafe extern "C" fn f32_fill(array: *mut f32, length: i32, value: f32) {
    // SAFETY: same contract as this function.
    unsafe { fill_export(array, length, value) }
}

/// Write `value` to `array[0..length]` (64-bit floats).
///
/// # Safety
///
/// `array` must be valid for writes of `length` aligned `f64`s when
/// `length > 0`.
#[export_name = "f64Fill"]
pub unsafe extern "C" fn f64_fill(array: *mut f64, length: i32, value: f64) {
    // SAFETY: same contract as this function.
    unsafe { fill_export(array, length, value) }
}

/// `x * 1337 / 666`.
#[cfg(feature = "custom-function")]
#[export_name = "f64myCustomFunction"]
pub extern "C" fn f64_my_custom_function(x: f64) -> f64 {
    wasmfill_core::transform::custom_scale(x)
}
