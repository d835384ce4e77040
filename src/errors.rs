// errors.rs
use astra::Response;

/// Errors originating from either the server logic
/// (routing, request bodies, exports) or configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Payload Too Large: limit is {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    /// HTTP status code reported for this error.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::XlsxError(_) | ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("invalid JSON body: {err}"))
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
