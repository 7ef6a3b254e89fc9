use crate::types::Vocabulary;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unknown color token: {0}")]
    UnknownColor(String),

    #[error("unknown vocabulary: {0}")]
    UnknownVocabulary(String),

    #[error("override for unknown status {key:?} in vocabulary {vocabulary}")]
    InvalidOverride { vocabulary: Vocabulary, key: String },

    #[error("failed to parse registry overrides: {0}")]
    OverridesParseFailed(#[from] serde_json::Error)
}

pub type Result<T> = std::result::Result<T, Error>;
