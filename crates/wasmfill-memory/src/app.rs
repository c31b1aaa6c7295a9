//! The host: owns a linear memory, allocates typed arrays in it, and calls
//! the fill primitives against it.
//!
//! Every call that takes an address is bounds-checked against the current
//! memory size. The raw exports trust their caller; this is the caller.

use indexmap::IndexMap;
use wasmfill_core::{
    fill_le_bytes, fill_value_le_bytes, ElementKind, FillElement, FillValue, Span, SpanError,
};

use crate::array::TypedArray;
use crate::config::MemoryConfig;
use crate::error::MemoryError;
use crate::linear::LinearMemory;
use crate::units::{Bytes, Pages};

/// Host-side owner of a module memory and the arrays allocated in it.
///
/// Arrays are bump-allocated from address 0 and never freed. Each
/// allocation starts at the next multiple of its element size. When the
/// memory is imported and the allocation does not fit, the memory grows
/// one page at a time until it does.
///
/// ```
/// use wasmfill_core::ElementKind;
/// use wasmfill_memory::{HostApp, MemoryConfig};
///
/// let mut app = HostApp::new(MemoryConfig::default()).unwrap();
/// let arr = app.insert_array("my_array", 100, ElementKind::I32).unwrap();
/// app.i32_fill(arr.pointer(), arr.len() as i32, 1337).unwrap();
/// assert_eq!(app.get::<i32>(&arr, 99).unwrap(), 1337);
/// ```
pub struct HostApp {
    config: MemoryConfig,
    memory: LinearMemory,
    /// Bump cursor: bytes handed out so far, from address 0.
    used: usize,
    arrays: IndexMap<String, TypedArray>,
}

impl HostApp {
    /// Create a host with a fresh memory described by `config`.
    pub fn new(config: MemoryConfig) -> Result<Self, MemoryError> {
        let memory = LinearMemory::new(&config)?;
        Ok(Self {
            config,
            memory,
            used: 0,
            arrays: IndexMap::new(),
        })
    }

    /// The configuration this host was created with.
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// The underlying memory.
    pub fn memory(&self) -> &LinearMemory {
        &self.memory
    }

    /// Bytes allocated so far, including alignment padding.
    pub fn used_bytes(&self) -> Bytes {
        Bytes(self.used)
    }

    /// Current size of the memory.
    pub fn available_bytes(&self) -> Bytes {
        self.memory.data_size()
    }

    // ── Allocation ──────────────────────────────────────────────

    /// Allocate an unnamed array of `len` zeroed elements.
    pub fn new_array(&mut self, len: u32, kind: ElementKind) -> Result<TypedArray, MemoryError> {
        let start = self.used.next_multiple_of(kind.align());
        let span_err = || SpanError::AddressOverflow {
            base: start as u64,
            len: len as u64,
            elem_size: kind.size(),
        };
        let end = (len as usize)
            .checked_mul(kind.size())
            .and_then(|n| start.checked_add(n))
            .ok_or_else(span_err)?;
        let pointer = u32::try_from(start).map_err(|_| span_err())?;

        self.reserve(end)?;
        self.used = end;

        let array = TypedArray::new(kind, pointer, len);
        tracing::debug!(%kind, pointer, len, "array allocated");
        Ok(array)
    }

    /// [`new_array`](Self::new_array) with the kind given by name
    /// (`"i32"`, `"i64"`, `"f32"`, `"f64"`).
    pub fn new_array_named(&mut self, len: u32, kind: &str) -> Result<TypedArray, MemoryError> {
        let kind: ElementKind = kind.parse()?;
        self.new_array(len, kind)
    }

    /// Allocate an array and register it under `name`.
    ///
    /// Re-using a name replaces the registry entry; the old array's memory
    /// stays allocated.
    pub fn insert_array(
        &mut self,
        name: impl Into<String>,
        len: u32,
        kind: ElementKind,
    ) -> Result<TypedArray, MemoryError> {
        let array = self.new_array(len, kind)?;
        self.arrays.insert(name.into(), array);
        Ok(array)
    }

    /// Look up a registered array.
    pub fn array(&self, name: &str) -> Result<TypedArray, MemoryError> {
        self.arrays
            .get(name)
            .copied()
            .ok_or_else(|| MemoryError::UnknownArray { name: name.into() })
    }

    /// Registered arrays, in registration order.
    pub fn arrays(&self) -> impl Iterator<Item = (&str, TypedArray)> + '_ {
        self.arrays.iter().map(|(name, array)| (name.as_str(), *array))
    }

    /// Make sure bytes `[0, end)` exist, growing an imported memory if needed.
    fn reserve(&mut self, end: usize) -> Result<(), MemoryError> {
        if end <= self.memory.data_size().0 {
            return Ok(());
        }
        let current = self.memory.size();
        if !self.config.is_growable() {
            return Err(MemoryError::OutOfMemory {
                requested: Bytes(end),
                available: self.memory.data_size(),
            });
        }
        // Refuse up front rather than grow partway and then fail.
        let needed = Bytes(end).pages_to_fit().unwrap_or(Pages(u32::MAX));
        if needed > self.memory.maximum() {
            return Err(MemoryError::CouldNotGrow {
                current,
                delta: Pages(needed.0 - current.0),
                maximum: self.memory.maximum(),
            });
        }
        while end > self.memory.data_size().0 {
            tracing::warn!(
                needed = end,
                available = self.memory.data_size().0,
                "need more memory than is available, growing by one page"
            );
            self.memory.grow(Pages(1))?;
        }
        Ok(())
    }

    // ── Element access ──────────────────────────────────────────

    /// Read element `index` of `array`.
    pub fn get<T: FillElement>(&self, array: &TypedArray, index: u32) -> Result<T, MemoryError> {
        array.expect_kind::<T>()?;
        let addr = array
            .span()
            .element_addr(index)
            .ok_or(MemoryError::IndexOutOfBounds {
                index,
                len: array.len(),
            })?;
        decode(self.memory.bytes(addr..addr + T::SIZE)?)
    }

    /// Write element `index` of `array`.
    pub fn set<T: FillElement>(
        &mut self,
        array: &TypedArray,
        index: u32,
        value: T,
    ) -> Result<(), MemoryError> {
        array.expect_kind::<T>()?;
        let addr = array
            .span()
            .element_addr(index)
            .ok_or(MemoryError::IndexOutOfBounds {
                index,
                len: array.len(),
            })?;
        value.write_le(self.memory.bytes_mut(addr..addr + T::SIZE)?);
        Ok(())
    }

    /// Copy every element of `array` out of memory.
    pub fn to_vec<T: FillElement>(&self, array: &TypedArray) -> Result<Vec<T>, MemoryError> {
        array.expect_kind::<T>()?;
        let range = array.span().resolve(self.memory.data_size().0)?;
        self.memory
            .bytes(range)?
            .chunks_exact(T::SIZE)
            .map(decode::<T>)
            .collect()
    }

    // ── Fills ───────────────────────────────────────────────────

    /// Overwrite every element of `array` with `value`.
    pub fn fill<T: FillElement>(&mut self, array: &TypedArray, value: T) -> Result<(), MemoryError> {
        array.expect_kind::<T>()?;
        self.fill_span(array.span(), value.into_value())
    }

    /// Overwrite the first `len` elements of `array` with `value`.
    pub fn fill_prefix<T: FillElement>(
        &mut self,
        array: &TypedArray,
        len: u32,
        value: T,
    ) -> Result<(), MemoryError> {
        array.expect_kind::<T>()?;
        self.fill_span(array.span().prefix(len)?, value.into_value())
    }

    /// Overwrite every element of `span` with `value`.
    ///
    /// The span and value kinds must agree, and the span must lie inside
    /// the current memory. Nothing is written on error.
    pub fn fill_span(&mut self, span: Span, value: FillValue) -> Result<(), MemoryError> {
        if span.kind != value.kind() {
            return Err(SpanError::KindMismatch {
                expected: span.kind,
                found: value.kind(),
            }
            .into());
        }
        let range = span.resolve(self.memory.data_size().0)?;
        fill_value_le_bytes(self.memory.bytes_mut(range)?, value)?;
        Ok(())
    }

    // ── Export-shaped calls ─────────────────────────────────────
    //
    // Same arguments as the module exports: a byte pointer, a signed
    // element count, a value. A count of zero or less writes nothing.

    /// `i32Fill(pointer, length, value)`.
    pub fn i32_fill(&mut self, pointer: u32, length: i32, value: i32) -> Result<(), MemoryError> {
        self.fill_at(pointer, length, value)
    }

    /// `i64Fill(pointer, length, value)`.
    pub fn i64_fill(&mut self, pointer: u32, length: i32, value: i64) -> Result<(), MemoryError> {
        self.fill_at(pointer, length, value)
    }

    /// `f32Fill(pointer, length, value)`.
    pub fn f32_fill(&mut self, pointer: u32, length: i32, value: f32) -> Result<(), MemoryError> {
        self.fill_at(pointer, length, value)
    }

    /// `f64Fill(pointer, length, value)`.
    pub fn f64_fill(&mut self, pointer: u32, length: i32, value: f64) -> Result<(), MemoryError> {
        self.fill_at(pointer, length, value)
    }

    /// `f64myCustomFunction(x)`.
    #[cfg(feature = "custom-function")]
    pub fn f64_my_custom_function(&self, x: f64) -> f64 {
        wasmfill_core::transform::custom_scale(x)
    }

    fn fill_at<T: FillElement>(
        &mut self,
        pointer: u32,
        length: i32,
        value: T,
    ) -> Result<(), MemoryError> {
        if length <= 0 {
            return Ok(());
        }
        let span = Span::new(pointer, length as u32, T::KIND);
        let range = span.resolve(self.memory.data_size().0)?;
        fill_le_bytes(self.memory.bytes_mut(range)?, value)?;
        Ok(())
    }
}

fn decode<T: FillElement>(bytes: &[u8]) -> Result<T, MemoryError> {
    T::read_le(bytes).ok_or(MemoryError::Span(SpanError::RaggedBytes {
        len: bytes.len(),
        elem_size: T::SIZE,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::PAGE_SIZE;

    fn app() -> HostApp {
        HostApp::new(MemoryConfig::default()).unwrap()
    }

    #[test]
    fn arrays_are_bump_allocated_from_zero() {
        let mut app = app();
        let a = app.new_array(3, ElementKind::I32).unwrap();
        let b = app.new_array(2, ElementKind::F32).unwrap();
        assert_eq!(a.pointer(), 0);
        assert_eq!(b.pointer(), 12);
        assert_eq!(app.used_bytes(), Bytes(20));
    }

    #[test]
    fn allocation_aligns_to_element_size() {
        let mut app = app();
        app.new_array(3, ElementKind::I32).unwrap();
        let f = app.new_array(1, ElementKind::F64).unwrap();
        assert_eq!(f.pointer(), 16);
        assert_eq!(f.span().check_aligned(), Ok(()));
    }

    #[test]
    fn new_arrays_read_as_zero() {
        let mut app = app();
        let a = app.new_array(5, ElementKind::F64).unwrap();
        assert_eq!(app.to_vec::<f64>(&a).unwrap(), vec![0.0; 5]);
    }

    #[test]
    fn named_kind_parsing() {
        let mut app = app();
        let a = app.new_array_named(4, "i64").unwrap();
        assert_eq!(a.kind(), ElementKind::I64);
        assert_eq!(
            app.new_array_named(4, "u8"),
            Err(MemoryError::Span(SpanError::UnknownElementKind {
                name: "u8".into()
            }))
        );
    }

    #[test]
    fn imported_memory_grows_page_by_page() {
        let mut app = app();
        assert_eq!(app.memory().size(), Pages(1));
        // 16_385 i32s = 65_540 bytes, four past the first page.
        app.new_array(16_385, ElementKind::I32).unwrap();
        assert_eq!(app.memory().size(), Pages(2));
        assert_eq!(app.available_bytes(), Bytes(2 * PAGE_SIZE));
    }

    #[test]
    #[tracing_test::traced_test]
    fn every_page_grown_logs_a_warning() {
        let mut app = HostApp::new(MemoryConfig::imported(1, 4)).unwrap();
        // One i32 past three full pages needs four pages: three grows.
        app.new_array(3 * 16_384 + 1, ElementKind::I32).unwrap();
        assert_eq!(app.memory().size(), Pages(4));
        logs_assert(|lines: &[&str]| {
            let grows = lines
                .iter()
                .filter(|line| line.contains("WARN") && line.contains("growing by one page"))
                .count();
            match grows {
                3 => Ok(()),
                n => Err(format!("expected 3 growth warnings, got {n}")),
            }
        });

        // Fits in the grown memory: no further warning.
        app.new_array(4, ElementKind::I32).unwrap();
        assert!(!logs_contain("available=262144"));
    }

    #[test]
    fn growth_beyond_maximum_fails_without_growing() {
        let mut app = app();
        let err = app.new_array(40_000, ElementKind::I32).unwrap_err();
        assert_eq!(
            err,
            MemoryError::CouldNotGrow {
                current: Pages(1),
                delta: Pages(2),
                maximum: Pages(2),
            }
        );
        assert_eq!(app.memory().size(), Pages(1));
        assert_eq!(app.used_bytes(), Bytes(0));
    }

    #[test]
    fn exported_memory_reports_out_of_memory() {
        let mut app = HostApp::new(MemoryConfig::exported(1)).unwrap();
        app.new_array(16_384, ElementKind::F32).unwrap();
        let err = app.new_array(1, ElementKind::F32).unwrap_err();
        assert_eq!(
            err,
            MemoryError::OutOfMemory {
                requested: Bytes(PAGE_SIZE + 4),
                available: Bytes(PAGE_SIZE),
            }
        );
    }

    #[test]
    fn registry_keeps_insertion_order_and_replaces() {
        let mut app = app();
        app.insert_array("b", 1, ElementKind::I32).unwrap();
        app.insert_array("a", 1, ElementKind::I32).unwrap();
        let replaced = app.insert_array("b", 2, ElementKind::F64).unwrap();
        let names: Vec<&str> = app.arrays().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(app.array("b").unwrap(), replaced);
        assert_eq!(
            app.array("missing"),
            Err(MemoryError::UnknownArray {
                name: "missing".into()
            })
        );
    }

    #[test]
    fn get_and_set_check_index_and_kind() {
        let mut app = app();
        let a = app.new_array(100, ElementKind::I32).unwrap();
        app.set(&a, 12, 34i32).unwrap();
        assert_eq!(app.get::<i32>(&a, 12).unwrap(), 34);
        assert_eq!(
            app.get::<i32>(&a, 100),
            Err(MemoryError::IndexOutOfBounds { index: 100, len: 100 })
        );
        assert!(matches!(
            app.set(&a, 0, 1.0f32),
            Err(MemoryError::Span(SpanError::KindMismatch { .. }))
        ));
    }

    #[test]
    fn fill_prefix_of_array() {
        let mut app = app();
        let a = app.new_array(6, ElementKind::F32).unwrap();
        app.fill(&a, 2.5f32).unwrap();
        app.fill_prefix(&a, 2, -1.0f32).unwrap();
        assert_eq!(
            app.to_vec::<f32>(&a).unwrap(),
            vec![-1.0, -1.0, 2.5, 2.5, 2.5, 2.5]
        );
        assert!(app.fill_prefix(&a, 7, 0.0f32).is_err());
    }

    #[test]
    fn fill_does_not_touch_neighbours() {
        let mut app = app();
        let left = app.new_array(4, ElementKind::I64).unwrap();
        let mid = app.new_array(4, ElementKind::I64).unwrap();
        let right = app.new_array(4, ElementKind::I64).unwrap();
        app.fill(&mid, i64::MAX).unwrap();
        assert_eq!(app.to_vec::<i64>(&left).unwrap(), vec![0; 4]);
        assert_eq!(app.to_vec::<i64>(&mid).unwrap(), vec![i64::MAX; 4]);
        assert_eq!(app.to_vec::<i64>(&right).unwrap(), vec![0; 4]);
    }

    #[test]
    fn fill_span_rejects_mismatched_value() {
        let mut app = app();
        let a = app.new_array(2, ElementKind::I32).unwrap();
        assert!(matches!(
            app.fill_span(a.span(), FillValue::I64(1)),
            Err(MemoryError::Span(SpanError::KindMismatch { .. }))
        ));
    }

    #[test]
    fn export_call_past_memory_end_is_rejected() {
        let mut app = app();
        let err = app.f64_fill(PAGE_SIZE as u32 - 8, 2, 1.0).unwrap_err();
        assert_eq!(
            err,
            MemoryError::Span(SpanError::OutOfBounds {
                requested: PAGE_SIZE + 8,
                available: PAGE_SIZE,
            })
        );
        assert!(app.memory().as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn non_positive_length_is_a_noop() {
        let mut app = app();
        let a = app.new_array(4, ElementKind::I32).unwrap();
        app.i32_fill(a.pointer(), 0, 9).unwrap();
        app.i32_fill(a.pointer(), -5, 9).unwrap();
        assert_eq!(app.to_vec::<i32>(&a).unwrap(), vec![0; 4]);
    }

    #[cfg(feature = "custom-function")]
    #[test]
    fn custom_function_is_exposed() {
        assert_eq!(app().f64_my_custom_function(666.0), 1337.0);
    }
}
