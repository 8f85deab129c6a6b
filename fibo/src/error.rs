#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index must be non-negative, got {0}")]
    NegativeIndex(i64),
    #[error("invalid index {0:?}: expected a non-negative integer")]
    InvalidIndex(String),
    #[error("F({n}) does not fit in 64 bits (largest supported index is {max})", max = crate::MAX_INDEX)]
    Overflow { n: u64 },
}
