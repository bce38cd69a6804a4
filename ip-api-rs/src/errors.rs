use crate::catalog::ServiceFailure;
use crate::transport::BoxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpApiError {
    #[error("invalid ip address: {0:?}")]
    InvalidIpAddress(String),

    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    #[error("ip-api returned error ({status}): {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode ip-api response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Service(#[from] ServiceFailure),

    #[error("ip-api query failed: {0}")]
    UnrecognizedServiceFailure(String),
}
