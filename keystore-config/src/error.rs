use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeyStoreConfigError>;

/// Failures while loading the inputs of the workflow.
///
/// Gating conditions of the workflow itself (an incomplete form, a confirm
/// while closed) are reported as outcomes, not as errors.
#[derive(Debug, Error)]
pub enum KeyStoreConfigError {
    #[error("Archive format {0} is not offered")]
    FormatNotOffered(String),

    // Wrapped errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
