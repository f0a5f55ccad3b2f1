use nexus::NexusError;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Request failed: {0}")]
    Http(String),
    #[error("Unreadable feed: {0}")]
    Feed(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Content error: {0}")]
    Content(#[from] NexusError),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("An internal error occurred: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for EngineError {
    fn from(value: reqwest::Error) -> Self {
        warn!("{}", value);
        EngineError::Http(format!("{}", value))
    }
}

impl From<quick_xml::Error> for EngineError {
    fn from(value: quick_xml::Error) -> Self {
        warn!("{}", value);
        EngineError::Feed(format!("{}", value))
    }
}

impl From<quick_xml::events::attributes::AttrError> for EngineError {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        warn!("{}", value);
        EngineError::Feed(format!("{}", value))
    }
}

impl From<url::ParseError> for EngineError {
    fn from(value: url::ParseError) -> Self {
        EngineError::InvalidConfiguration(format!("{}", value))
    }
}

impl From<std::io::Error> for EngineError {
    fn from(value: std::io::Error) -> Self {
        error!("{}", value);
        EngineError::Io(format!("{}", value))
    }
}

impl From<tempfile::PersistError> for EngineError {
    fn from(value: tempfile::PersistError) -> Self {
        error!("{}", value);
        EngineError::Io(format!("{}", value.error))
    }
}

impl From<JoinError> for EngineError {
    fn from(value: JoinError) -> Self {
        error!("{}", value);
        EngineError::Internal(format!("{}", value))
    }
}

impl From<SetGlobalDefaultError> for EngineError {
    fn from(value: SetGlobalDefaultError) -> Self {
        error!("{}", value);
        EngineError::Internal(format!("{}", value))
    }
}
