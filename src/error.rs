use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown scale kind: {0:?}")]
    UnknownScaleKind(String),

    #[error("unknown range mode: {0:?}")]
    UnknownRangeMode(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
