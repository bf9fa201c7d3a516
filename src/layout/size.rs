//! Size: Width and height in character cells.

/// Width and height of a region in character cells.
///
/// Dimensions are signed: an over-constrained layout can hand a region a
/// negative size, and that has to be representable to be detected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in columns.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Zero-sized.
    pub const ZERO: Self = Self::new(0, 0);

    /// Size of a terminal reporting `width` columns and `height` rows.
    #[inline]
    pub fn from_terminal(width: u16, height: u16) -> Self {
        Self::new(i32::from(width), i32::from(height))
    }

    /// Check if either dimension is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.width < 0 || self.height < 0
    }

    /// Check if the size covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Saturate both dimensions at zero.
    #[inline]
    #[must_use]
    pub const fn clamped(&self) -> Self {
        Self::new(
            if self.width < 0 { 0 } else { self.width },
            if self.height < 0 { 0 } else { self.height },
        )
    }

    /// Reduce both dimensions. The result may be negative.
    #[inline]
    #[must_use]
    pub const fn shrink(&self, width: i32, height: i32) -> Self {
        Self::new(self.width - width, self.height - height)
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Something that can be given a new size.
pub trait Resizable {
    /// Resize to `size`.
    fn resize(&mut self, size: Size);
}

/// Resizing an absent value does nothing.
impl<R: Resizable> Resizable for Option<R> {
    fn resize(&mut self, size: Size) {
        if let Some(inner) = self {
            inner.resize(size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_clamped() {
        assert_eq!(Size::new(-3, 5).clamped(), Size::new(0, 5));
        assert_eq!(Size::new(4, -1).clamped(), Size::new(4, 0));
        assert_eq!(Size::new(4, 1).clamped(), Size::new(4, 1));
    }

    #[test]
    fn test_size_negative_and_empty() {
        assert!(Size::new(-1, 3).is_negative());
        assert!(!Size::ZERO.is_negative());
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0, 10).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn test_size_display() {
        assert_eq!(Size::new(80, 24).to_string(), "80 x 24");
        assert_eq!(format!("{:?}", Size::new(32, -2)), "32x-2");
    }

    #[test]
    fn test_resize_absent_is_noop() {
        struct Probe(Size);
        impl Resizable for Probe {
            fn resize(&mut self, size: Size) {
                self.0 = size;
            }
        }

        let mut absent: Option<Probe> = None;
        absent.resize(Size::new(10, 10));
        assert!(absent.is_none());

        let mut present = Some(Probe(Size::ZERO));
        present.resize(Size::new(10, 10));
        assert_eq!(present.map(|p| p.0), Some(Size::new(10, 10)));
    }
}
