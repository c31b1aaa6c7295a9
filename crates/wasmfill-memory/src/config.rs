//! Memory configuration.

use crate::error::MemoryError;
use crate::units::{Pages, MAX_PAGES};

/// Who owns the memory, which decides whether it can grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOrigin {
    /// The module defines its own fixed-size memory. Never grows.
    Exported,
    /// The host creates the memory and grows it on demand, one page at a
    /// time, up to the maximum.
    Imported,
}

/// Size and growth policy of a host memory.
///
/// Validated by [`validate`](Self::validate), which [`HostApp::new`] calls
/// before anything is allocated.
///
/// [`HostApp::new`]: crate::HostApp::new
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Pages present at creation.
    pub initial: Pages,

    /// Upper bound on growth. Equal to `initial` for exported memories.
    pub maximum: Pages,

    /// Exported (fixed) or imported (growable).
    pub origin: MemoryOrigin,
}

impl MemoryConfig {
    /// Default initial size for an imported memory: one page (64 KiB).
    pub const DEFAULT_INITIAL_PAGES: u32 = 1;

    /// Default maximum size: two pages (128 KiB).
    pub const DEFAULT_MAXIMUM_PAGES: u32 = 2;

    /// Host-created memory growable from `initial` to `maximum` pages.
    pub fn imported(initial: u32, maximum: u32) -> Self {
        Self {
            initial: Pages(initial),
            maximum: Pages(maximum),
            origin: MemoryOrigin::Imported,
        }
    }

    /// Module-owned memory fixed at `pages`.
    pub fn exported(pages: u32) -> Self {
        Self {
            initial: Pages(pages),
            maximum: Pages(pages),
            origin: MemoryOrigin::Exported,
        }
    }

    /// Whether the memory may grow past `initial`.
    pub fn is_growable(&self) -> bool {
        self.origin == MemoryOrigin::Imported && self.maximum > self.initial
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), MemoryError> {
        if self.initial.0 == 0 {
            return Err(MemoryError::InvalidConfig {
                reason: "initial size must be at least one page".into(),
            });
        }
        if self.maximum.0 > MAX_PAGES {
            return Err(MemoryError::InvalidConfig {
                reason: format!(
                    "maximum {} exceeds the {MAX_PAGES}-page address space",
                    self.maximum
                ),
            });
        }
        if self.initial > self.maximum {
            return Err(MemoryError::InvalidConfig {
                reason: format!(
                    "initial {} is greater than maximum {}",
                    self.initial, self.maximum
                ),
            });
        }
        if self.origin == MemoryOrigin::Exported && self.initial != self.maximum {
            return Err(MemoryError::InvalidConfig {
                reason: "exported memories cannot grow: initial must equal maximum".into(),
            });
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::imported(Self::DEFAULT_INITIAL_PAGES, Self::DEFAULT_MAXIMUM_PAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_page_growable_to_two() {
        let config = MemoryConfig::default();
        assert_eq!(config.initial, Pages(1));
        assert_eq!(config.maximum, Pages(2));
        assert!(config.is_growable());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn exported_is_fixed() {
        let config = MemoryConfig::exported(2);
        assert!(!config.is_growable());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_initial_rejected() {
        assert!(matches!(
            MemoryConfig::imported(0, 2).validate(),
            Err(MemoryError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn initial_above_maximum_rejected() {
        assert!(MemoryConfig::imported(3, 2).validate().is_err());
    }

    #[test]
    fn maximum_beyond_address_space_rejected() {
        assert!(MemoryConfig::imported(1, MAX_PAGES + 1).validate().is_err());
        assert!(MemoryConfig::imported(1, MAX_PAGES).validate().is_ok());
    }

    #[test]
    fn growable_exported_rejected() {
        let config = MemoryConfig {
            origin: MemoryOrigin::Exported,
            ..MemoryConfig::imported(1, 2)
        };
        assert!(config.validate().is_err());
    }
}
