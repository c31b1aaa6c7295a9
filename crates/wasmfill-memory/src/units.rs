//! Page and byte units of a linear memory.

use std::fmt;

/// Bytes per page (64 KiB).
pub const PAGE_SIZE: usize = 65_536;

/// Pages needed to cover the full 32-bit address space.
pub const MAX_PAGES: u32 = 65_536;

/// A size or offset counted in pages.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pages(pub u32);

impl Pages {
    /// The largest addressable memory.
    pub const MAX: Pages = Pages(MAX_PAGES);

    /// `self + rhs`, or `None` if the sum exceeds [`MAX_PAGES`].
    pub fn checked_add(self, rhs: Pages) -> Option<Pages> {
        let sum = self.0.checked_add(rhs.0)?;
        (sum <= MAX_PAGES).then_some(Pages(sum))
    }

    /// Size in bytes.
    pub fn bytes(self) -> Bytes {
        self.into()
    }
}

impl fmt::Debug for Pages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pages", self.0)
    }
}

impl fmt::Display for Pages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pages", self.0)
    }
}

impl From<u32> for Pages {
    fn from(n: u32) -> Self {
        Pages(n)
    }
}

/// A size counted in bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bytes(pub usize);

impl Bytes {
    /// Whole pages contained in this many bytes, rounding down.
    ///
    /// Returns `None` if the page count does not fit in `u32`.
    pub fn whole_pages(self) -> Option<Pages> {
        u32::try_from(self.0 / PAGE_SIZE).ok().map(Pages)
    }

    /// Pages needed to hold this many bytes, rounding up.
    pub fn pages_to_fit(self) -> Option<Pages> {
        u32::try_from(self.0.div_ceil(PAGE_SIZE)).ok().map(Pages)
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

impl From<Pages> for Bytes {
    fn from(pages: Pages) -> Self {
        Bytes(pages.0 as usize * PAGE_SIZE)
    }
}

impl From<usize> for Bytes {
    fn from(n: usize) -> Self {
        Bytes(n)
    }
}
