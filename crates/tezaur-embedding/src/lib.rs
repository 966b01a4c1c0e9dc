pub mod model;
pub mod vectors;

pub use model::{EmbeddingError, EmbeddingModel};
pub use vectors::WordVectors;
