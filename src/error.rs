/// Errors reported by the union-find structure
///
/// All variants are reported before the forest is touched, so a failed call
/// leaves the structure usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnionFindError {
    #[error("invalid universe size {size}: must be non-negative")]
    InvalidArgument { size: i64 },

    #[error("universe of {size} sites is too large to allocate")]
    TooLarge { size: i64 },

    // Wide enough to hold both a negative i64 and any usize exactly.
    #[error("index {index} out of range for {len} sites")]
    IndexOutOfRange { index: i128, len: usize },
}

pub type Result<T> = std::result::Result<T, UnionFindError>;
