use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A read request came back with a non-success status.
    #[error("{0}")]
    Fetch(String),

    /// The backend refused to create a lead; carries its `detail` message.
    #[error("{0}")]
    Creation(String),

    /// The request never produced a usable response (connection, decoding).
    #[error("Transport error: {0}")]
    Transport(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
