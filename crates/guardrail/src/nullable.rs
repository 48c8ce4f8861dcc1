//! Absence detection for sequence elements.

/// A value that may be absent.
///
/// Lets element checks accept both owned (`Option<T>`) and borrowed
/// (`&Option<T>`) sequence items.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}
