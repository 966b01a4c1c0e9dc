use std::path::PathBuf;

/// Capability surface of a trained word-embedding model.
///
/// For a fixed model snapshot the answers are deterministic; callers treat
/// the model as a read-only shared resource.
pub trait EmbeddingModel: Send + Sync {
    /// Distinct words the model has representations for.
    fn vocabulary(&self) -> &[String];

    /// Up to `n` neighbors of `word`, most similar first. The word itself
    /// is never part of its own neighbor list.
    fn nearest(&self, word: &str, n: usize) -> Result<Vec<String>, EmbeddingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("word {0} is not in the model vocabulary")]
    UnknownWord(String),

    #[error("invalid vector file {file}: {message}")]
    InvalidFormat { file: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
