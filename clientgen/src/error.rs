use thiserror::Error;

use crate::model::Format;
use crate::runtime::TransportError;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing generator configuration or endpoint description.
    #[error("config error: {0}")]
    Config(String),

    /// Text handed to a structural parser was not well-formed.
    #[error("malformed {format} input: {message}")]
    MalformedInput { format: Format, message: String },

    /// A call argument matched neither a path placeholder nor a declared parameter.
    #[error("unknown parameter '{param}' for endpoint '{endpoint}'")]
    UnknownParameter { endpoint: String, param: String },

    /// A path placeholder had no matching call argument.
    #[error("missing path parameter '{param}' for endpoint '{endpoint}'")]
    MissingParameter { endpoint: String, param: String },

    /// Propagated unchanged from the [crate::runtime::HttpClient].
    #[error("transport error: {0}")]
    Transport(TransportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn config(message: impl ToString) -> Self {
        Self::Config(message.to_string())
    }

    pub(crate) fn malformed(format: Format, message: impl ToString) -> Self {
        Self::MalformedInput {
            format,
            message: message.to_string(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
