use std::collections::HashMap;

use tezaur_embedding::{EmbeddingError, EmbeddingModel};

/// In-memory stand-in for a trained model with scripted neighbor lists.
#[derive(Debug, Default)]
pub(crate) struct FakeModel {
    vocabulary: Vec<String>,
    neighbors: HashMap<String, Vec<String>>,
}

impl FakeModel {
    pub(crate) fn add(&mut self, word: &str, neighbors: &[&str]) {
        self.vocabulary.push(word.to_string());
        self.neighbors.insert(
            word.to_string(),
            neighbors.iter().map(|n| n.to_string()).collect(),
        );
    }
}

impl EmbeddingModel for FakeModel {
    fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    fn nearest(&self, word: &str, n: usize) -> Result<Vec<String>, EmbeddingError> {
        let neighbors = self
            .neighbors
            .get(word)
            .ok_or_else(|| EmbeddingError::UnknownWord(word.to_string()))?;
        Ok(neighbors.iter().take(n).cloned().collect())
    }
}
