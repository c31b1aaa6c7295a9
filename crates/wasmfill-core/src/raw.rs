//! Unchecked fill over a raw pointer and element count.
//!
//! This is the contract of the export surface: the host vouches for the
//! span, nothing is validated in release builds. Debug builds assert the
//! pointer is non-null and aligned.

#![allow(unsafe_code)]

use crate::element::FillElement;

/// Write `value` to `len` consecutive elements starting at `base`.
///
/// A zero `len` performs no writes and never dereferences `base`.
///
/// # Safety
///
/// For `len > 0` the caller must guarantee that `base` is non-null, aligned
/// for `T`, and valid for writes of `len` elements, and that no other
/// reference to that memory is live for the duration of the call.
#[inline]
pub unsafe fn fill_raw<T: FillElement>(base: *mut T, len: usize, value: T) {
    if len == 0 {
        return;
    }
    debug_assert!(!base.is_null(), "fill_raw: null base with len {len}");
    debug_assert!(
        base as usize % std::mem::align_of::<T>() == 0,
        "fill_raw: misaligned base for {}",
        T::KIND
    );
    // SAFETY: caller guarantees `base..base + len` is valid, aligned and unaliased.
    let dst = unsafe { std::slice::from_raw_parts_mut(base, len) };
    dst.fill(value);
}
