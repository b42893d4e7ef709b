use thiserror::Error;

#[derive(Error, Debug)]
pub enum KingdomError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Simulation has not been generated yet")]
    NotGenerated,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KingdomError>;
