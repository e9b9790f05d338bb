use actix_web::http::StatusCode;
use actix_web::ResponseError;

use thiserror::Error;

use crate::error::Error;

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Parse Error: {0}")]
    ParseError(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl From<Error> for RestError {
    fn from(e: Error) -> Self {
        match e {
            Error::NewsletterNotFound(_) | Error::SectionNotFound(_) => {
                Self::NotFound(e.to_string())
            }
            Error::UnknownLayout(_) | Error::LastSection | Error::PositionOutOfRange { .. } => {
                Self::InvalidRequest(e.to_string())
            }
            Error::ScheduleOutOfRange => {
                tracing::error!(error.cause_chain = ?e, "Failed to compute schedule time");
                Self::InternalError(e.to_string())
            }
            Error::SerializationError(_) | Error::StorageError(_) => {
                tracing::error!(error.cause_chain = ?e, "Failed to save newsletters");
                Self::InternalError("Storage error".into())
            }
        }
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ParseError(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
