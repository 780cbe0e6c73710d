use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    /// The envelope's type tag names no known message. Always reported,
    /// never silently dropped.
    #[error("unknown message type: {0}")]
    UnknownType(String),

    #[error("malformed message: {0}")]
    Malformed(String),
}
