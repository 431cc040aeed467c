use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorApiError {
    #[error("invalid vendor service base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("vendor service transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vendor service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed vendor service response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Create,
    Update,
    Delete,
}

impl WriteOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("failed to load vendor list: {0}")]
    Load(#[source] VendorApiError),
    #[error("vendor {} failed: {source}", .operation.as_str())]
    Write {
        operation: WriteOperation,
        #[source]
        source: VendorApiError,
    },
    #[error("no vendor selected for update")]
    NoSelection,
}
