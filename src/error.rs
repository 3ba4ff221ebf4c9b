use crate::isa::Isa;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read entropy from the operating system: {0}")]
    Entropy(#[from] rand_core::Error),

    #[error("generator state is all zero, xoshiro256+ would never leave it")]
    ZeroState,

    #[error("sample range [1, 0] is empty")]
    EmptyRange,

    #[error("instruction set `{0}` is not available on this CPU")]
    UnsupportedIsa(Isa),

    #[error("state must be {expected} bytes for this width, got {actual}")]
    StateLength { expected: usize, actual: usize },
}
