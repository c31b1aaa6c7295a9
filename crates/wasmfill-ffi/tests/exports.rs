//! Export-table properties: coverage, no overrun, idempotence, type fidelity.

#![allow(unsafe_code)]

use proptest::prelude::*;
use wasmfill_core::{ElementKind, FillElement, FillValue};
use wasmfill_ffi::checked::{
    wasmfill_f32_fill_checked, wasmfill_f64_fill_checked, wasmfill_i32_fill_checked,
    wasmfill_i64_fill_checked,
};
use wasmfill_ffi::exports::{f32_fill, f64_fill, i32_fill, i64_fill};
use wasmfill_ffi::WasmfillStatus;
use wasmfill_test_utils::fixtures::{edge_values, sentinel};
use wasmfill_test_utils::GuardedBuffer;

const GUARD: usize = 8;

/// Fill `len` elements of a fresh guarded buffer through the raw export
/// and check payload and guard.
fn check_export<T: FillElement>(
    len: usize,
    value: T,
    sentinel: T,
    export: unsafe extern "C" fn(*mut T, i32, T),
) {
    let zero = unwrap_value::<T>(FillValue::zero(T::KIND));
    let mut buf = GuardedBuffer::new(len, GUARD, zero, sentinel);
    // SAFETY: buf holds len + GUARD elements.
    unsafe { export(buf.as_mut_ptr(), len as i32, value) };
    assert!(buf.payload_is(value), "{:?} not written to all {len}", value);
    assert!(buf.guard_intact(), "{:?} overran {len}", value);
}

fn unwrap_value<T: FillElement>(v: FillValue) -> T {
    T::from_value(v).expect("fixture kind matches")
}

#[test]
fn every_edge_value_through_every_export() {
    for kind in ElementKind::ALL {
        let guard = sentinel(kind);
        for value in edge_values(kind) {
            match kind {
                ElementKind::I32 => {
                    check_export(17, unwrap_value::<i32>(value), unwrap_value(guard), i32_fill)
                }
                ElementKind::I64 => {
                    check_export(17, unwrap_value::<i64>(value), unwrap_value(guard), i64_fill)
                }
                ElementKind::F32 => {
                    check_export(17, unwrap_value::<f32>(value), unwrap_value(guard), f32_fill)
                }
                ElementKind::F64 => {
                    check_export(17, unwrap_value::<f64>(value), unwrap_value(guard), f64_fill)
                }
            }
        }
    }
}

#[test]
fn minus_one_sets_every_bit() {
    let mut buf = vec![0i32; 5];
    // SAFETY: buf holds 5 elements.
    unsafe { i32_fill(buf.as_mut_ptr(), 5, -1) };
    assert!(buf.iter().all(|v| *v as u32 == u32::MAX));
}

#[test]
fn zero_length_leaves_buffer_untouched() {
    let mut buf = GuardedBuffer::new(0, GUARD, 0.0f32, -12345.5);
    // SAFETY: zero length writes nothing.
    unsafe { f32_fill(buf.as_mut_ptr(), 0, 9.0) };
    assert!(buf.guard_intact());
}

#[test]
fn checked_exports_agree_with_raw_exports() {
    let mut a = GuardedBuffer::new(9, GUARD, 0i64, 77);
    let mut b = GuardedBuffer::new(9, GUARD, 0i64, 77);
    // SAFETY: a holds 9 + GUARD elements.
    unsafe { i64_fill(a.as_mut_ptr(), 9, -3) };
    assert_eq!(
        wasmfill_i64_fill_checked(b.as_mut_ptr(), 9, -3),
        WasmfillStatus::Ok as i32
    );
    assert_eq!(a.payload(), b.payload());
    assert!(b.guard_intact());
}

#[test]
fn checked_exports_reject_null() {
    let null = WasmfillStatus::InvalidArgument as i32;
    assert_eq!(wasmfill_i32_fill_checked(std::ptr::null_mut(), 1, 0), null);
    assert_eq!(wasmfill_i64_fill_checked(std::ptr::null_mut(), 1, 0), null);
    assert_eq!(wasmfill_f32_fill_checked(std::ptr::null_mut(), 1, 0.0), null);
    assert_eq!(wasmfill_f64_fill_checked(std::ptr::null_mut(), 1, 0.0), null);
}

proptest! {
    #[test]
    fn i32_fill_covers_prefix_only(
        len in 0usize..512,
        value in any::<i32>(),
    ) {
        let mut buf = GuardedBuffer::new(len, GUARD, 0i32, 0x7eadbeef);
        // SAFETY: buf holds len + GUARD elements.
        unsafe { i32_fill(buf.as_mut_ptr(), len as i32, value) };
        prop_assert!(buf.payload_is(value));
        prop_assert!(buf.guard_intact());
    }

    #[test]
    fn f64_fill_is_idempotent(
        len in 0usize..256,
        bits in any::<u64>(),
    ) {
        let value = f64::from_bits(bits);
        let mut buf = GuardedBuffer::new(len, GUARD, 1.0f64, -1.0);
        // SAFETY: buf holds len + GUARD elements.
        unsafe { f64_fill(buf.as_mut_ptr(), len as i32, value) };
        let once: Vec<u64> = buf.payload().iter().map(|v| v.to_bits()).collect();
        // SAFETY: as above.
        unsafe { f64_fill(buf.as_mut_ptr(), len as i32, value) };
        let twice: Vec<u64> = buf.payload().iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(once, twice);
        prop_assert!(buf.guard_intact());
    }

    #[test]
    fn shorter_second_fill_keeps_tail(
        len in 1usize..128,
        cut_frac in 0.0f64..1.0,
        first in any::<i64>(),
        second in any::<i64>(),
    ) {
        let cut = (len as f64 * cut_frac) as usize;
        let mut buf = GuardedBuffer::new(len, GUARD, 0i64, 0x7eadbeef_7eadbeef);
        // SAFETY: buf holds len + GUARD elements, cut <= len.
        unsafe {
            i64_fill(buf.as_mut_ptr(), len as i32, first);
            i64_fill(buf.as_mut_ptr(), cut as i32, second);
        }
        prop_assert!(buf.payload()[..cut].iter().all(|&v| v == second));
        prop_assert!(buf.payload()[cut..].iter().all(|&v| v == first));
        prop_assert!(buf.guard_intact());
    }
}
