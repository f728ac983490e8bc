//! Abstractions for pagination.

/// Offset/limit slice of a list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slice {
    /// Number of items to skip.
    pub offset: i64,

    /// Maximum number of items to return.
    pub limit: i64,
}

impl Slice {
    /// Maximum allowed [`Slice::limit`].
    pub const MAX_LIMIT: i64 = 100;

    /// Creates a new [`Slice`], clamping the provided values into their
    /// allowed ranges.
    #[must_use]
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit
                .unwrap_or(Self::MAX_LIMIT)
                .clamp(0, Self::MAX_LIMIT),
        }
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod spec {
    use super::Slice;

    #[test]
    fn clamps_arguments() {
        let slice = Slice::new(Some(-5), Some(1000));
        assert_eq!(slice.offset, 0);
        assert_eq!(slice.limit, Slice::MAX_LIMIT);

        let slice = Slice::new(Some(20), Some(10));
        assert_eq!(slice.offset, 20);
        assert_eq!(slice.limit, 10);

        assert_eq!(Slice::default().limit, Slice::MAX_LIMIT);
    }
}
