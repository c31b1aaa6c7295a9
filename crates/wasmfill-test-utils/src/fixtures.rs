//! Edge-case fill values per element kind.

use wasmfill_core::{ElementKind, FillValue};

/// Values that tend to expose width, sign, or NaN handling bugs.
pub fn edge_values(kind: ElementKind) -> Vec<FillValue> {
    match kind {
        ElementKind::I32 => [0, -1, 1, i32::MIN, i32::MAX, 0x5555_5555]
            .into_iter()
            .map(FillValue::I32)
            .collect(),
        ElementKind::I64 => [0, -1, 1, i64::MIN, i64::MAX, 0x0123_4567_89ab_cdef]
            .into_iter()
            .map(FillValue::I64)
            .collect(),
        ElementKind::F32 => [
            0.0,
            -0.0,
            1.0,
            f32::MIN_POSITIVE,
            f32::MAX,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::from_bits(0x7fc0_1234),
        ]
        .into_iter()
        .map(FillValue::F32)
        .collect(),
        ElementKind::F64 => [
            0.0,
            -0.0,
            1.0,
            f64::MIN_POSITIVE,
            f64::MAX,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::from_bits(0x7ff8_0000_dead_beef),
        ]
        .into_iter()
        .map(FillValue::F64)
        .collect(),
    }
}

/// A value unlikely to be written by accident, for guard regions.
pub fn sentinel(kind: ElementKind) -> FillValue {
    match kind {
        ElementKind::I32 => FillValue::I32(0x7eadbeef),
        ElementKind::I64 => FillValue::I64(0x7eadbeef_7eadbeef),
        ElementKind::F32 => FillValue::F32(-12345.5),
        ElementKind::F64 => FillValue::F64(-12345.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_values_match_kind() {
        for kind in ElementKind::ALL {
            let values = edge_values(kind);
            assert!(!values.is_empty());
            assert!(values.iter().all(|v| v.kind() == kind));
            assert_eq!(sentinel(kind).kind(), kind);
        }
    }
}
