use thiserror::Error;

#[derive(Debug, Error)]
pub enum NexusError {
    #[error("Malformed data: {0}")]
    MalformedData(String),
    #[error("Could not read data: {0}")]
    Io(String),
}

impl From<serde_json::Error> for NexusError {
    fn from(value: serde_json::Error) -> Self {
        warn!("{}", value);
        NexusError::MalformedData(format!("{}", value))
    }
}

impl From<std::io::Error> for NexusError {
    fn from(value: std::io::Error) -> Self {
        error!("{}", value);
        NexusError::Io(format!("{}", value))
    }
}
