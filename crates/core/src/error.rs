#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("duplicate item id: {0}")]
    DuplicateItemId(String),
    #[error("duplicate group key: {0}")]
    DuplicateGroupKey(String),
    #[error("unknown tier: {0}")]
    UnknownTier(String),
    #[error("failed to read catalog file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
