use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketDeskError {
    #[error("ticket source failed: {0}")]
    SourceFailure(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid accordion mode '{0}'")]
    InvalidMode(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("duplicate ticket id '{0}'")]
    DuplicateId(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TicketDeskError>;
