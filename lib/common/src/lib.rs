use num_traits::{AsPrimitive, PrimInt};

/// Trait for types which can act as indices within an array (or an array-like structure).
///
/// Used as the element type of welded index buffers; `u32` is the usual choice for GPU upload.
pub trait ArrayIndex: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static {
    /// Convert a `usize` position into this index type, if it fits.
    #[inline]
    fn try_from_usize(value: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(value)
    }
}
impl<P> ArrayIndex for P where P: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::ArrayIndex;

    #[test]
    fn try_from_usize_checks_width() {
        assert_eq!(u8::try_from_usize(255), Some(255u8));
        assert_eq!(u8::try_from_usize(256), None);
        assert_eq!(u32::try_from_usize(70_000), Some(70_000u32));
    }

    #[test]
    fn signed_indices() {
        assert_eq!(i16::try_from_usize(32_767), Some(32_767i16));
        assert_eq!(i16::try_from_usize(32_768), None);
    }
}
