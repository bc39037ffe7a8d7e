use thiserror::Error;

pub type PcpResult<T> = Result<T, PcpError>;

#[derive(Debug, Error)]
pub enum PcpError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load data: {0}")]
    Load(String),

    #[error("unknown axis: {0}")]
    UnknownAxis(String),
}
