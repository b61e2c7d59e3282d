use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by the engine.
///
/// Every variant reflects a configuration or usage defect, so none of them is
/// worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("sample probability must lie within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("chunk length must be at least 1, got {0}")]
    InvalidChunkLength(usize),

    #[error("interval must be at least 1, got {0}")]
    InvalidInterval(usize),

    #[error("parallelism must be at least 1, got {0}")]
    InvalidParallelism(usize),

    #[error("outlet is closed")]
    OutletClosed,

    #[error("outlet receiver disconnected")]
    OutletDisconnected,
}
