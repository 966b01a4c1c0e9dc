use std::sync::Arc;

use tezaur_dict::Dictionary;
use tezaur_embedding::{EmbeddingError, EmbeddingModel};
use tezaur_speech::{SpeechPart, format};
use tokio::task::JoinSet;

/// One finished thesaurus line: the word and its rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThesaurusEntry {
    pub word: String,
    pub content: String,
}

/// Ordered build output plus loss accounting. `loss` counts vocabulary
/// words that had no dictionary entry and were excluded from output.
#[derive(Debug)]
pub struct Thesaurus {
    pub entries: Vec<ThesaurusEntry>,
    pub loss: usize,
}

impl Thesaurus {
    /// Loss as a percentage of the model vocabulary.
    pub fn loss_percent(&self) -> f64 {
        let vocabulary = self.entries.len() + self.loss;
        if vocabulary == 0 {
            return 0.0;
        }
        self.loss as f64 / vocabulary as f64 * 100.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("chunk size should be greater than zero")]
    InvalidChunkSize,

    #[error("top N should be greater than zero")]
    InvalidTopN,

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("a build worker panicked: {0}")]
    Worker(String),
}

/// Builds the thesaurus by joining `vocabulary` against `dictionary` in
/// parallel chunks of `chunk_size` words.
///
/// Vocabulary words missing from the dictionary are dropped and counted as
/// loss; neighbors missing from the dictionary are silently excluded from
/// the rendered list. Entries come back sorted by word in descending
/// lexicographic order, independent of chunking and completion order. Any
/// failing chunk aborts the whole build; no partial result is returned.
pub async fn build<M>(
    dictionary: Arc<Dictionary>,
    model: Arc<M>,
    vocabulary: Vec<String>,
    chunk_size: usize,
    top_n: usize,
) -> Result<Thesaurus, BuildError>
where
    M: EmbeddingModel + 'static,
{
    if chunk_size == 0 {
        return Err(BuildError::InvalidChunkSize);
    }
    if top_n == 0 {
        return Err(BuildError::InvalidTopN);
    }

    let vocabulary_len = vocabulary.len();
    tracing::info!(
        "Building thesaurus from {} POS definitions and {vocabulary_len} embedding words",
        dictionary.len()
    );

    let mut workers = JoinSet::new();
    for chunk in vocabulary.chunks(chunk_size) {
        let chunk = chunk.to_vec();
        let dictionary = Arc::clone(&dictionary);
        let model = Arc::clone(&model);
        workers
            .spawn_blocking(move || enrich_chunk(&chunk, &dictionary, model.as_ref(), top_n));
    }

    // Single join barrier: every chunk must finish before any output
    // exists. An early error drops the set and abandons the rest.
    let mut entries = Vec::with_capacity(vocabulary_len);
    while let Some(joined) = workers.join_next().await {
        let chunk_entries = joined.map_err(|e| BuildError::Worker(e.to_string()))??;
        entries.extend(chunk_entries);
    }

    entries.sort_unstable_by(|a, b| b.word.cmp(&a.word));

    let loss = vocabulary_len - entries.len();
    let thesaurus = Thesaurus { entries, loss };
    tracing::info!(
        "{loss} entries left unprocessed ({:.1}% loss)",
        thesaurus.loss_percent()
    );

    Ok(thesaurus)
}

fn enrich_chunk<M>(
    chunk: &[String],
    dictionary: &Dictionary,
    model: &M,
    top_n: usize,
) -> Result<Vec<ThesaurusEntry>, BuildError>
where
    M: EmbeddingModel + ?Sized,
{
    let mut entries = Vec::with_capacity(chunk.len());

    for word in chunk {
        let Some(subject) = dictionary.get(word) else {
            continue;
        };

        let neighbors = model.nearest(word, top_n)?;
        let neighbor_parts: Vec<&SpeechPart> = neighbors
            .iter()
            .filter_map(|neighbor| dictionary.get(neighbor))
            .collect();

        entries.push(ThesaurusEntry {
            word: subject.word().to_string(),
            content: format::entry(subject, neighbor_parts),
        });
    }

    Ok(entries)
}
