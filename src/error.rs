use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CORS blocked: {origin}")]
    CorsRejected { origin: String },

    #[error("Invalid params: 1<=count<=20, 2<=sides<=100")]
    InvalidParameter,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn cors_rejected(origin: impl Into<String>) -> Self {
        Self::CorsRejected {
            origin: origin.into(),
        }
    }

    /// HTTP status a client sees when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::CorsRejected { .. } => StatusCode::FORBIDDEN,
            Self::InvalidParameter => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
