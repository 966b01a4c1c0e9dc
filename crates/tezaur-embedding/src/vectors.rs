use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::model::{EmbeddingError, EmbeddingModel};

/// Word embeddings loaded from the word2vec/GloVe text format: an optional
/// `count dim` header line followed by `word v1 .. vd` rows.
///
/// Vectors are unit-normalized at load time, so cosine similarity reduces
/// to a dot product when answering neighbor queries.
#[derive(Debug)]
pub struct WordVectors {
    words: Vec<String>,
    index: HashMap<String, usize>,
    values: Vec<f32>,
    dim: usize,
}

impl WordVectors {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(reader, path)
    }

    /// Parses the text format from an open reader; `source` only identifies
    /// the input in errors.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self, EmbeddingError> {
        let invalid = |message: String| EmbeddingError::InvalidFormat {
            file: source.to_path_buf(),
            message,
        };

        let mut words = Vec::new();
        let mut index = HashMap::new();
        let mut values = Vec::new();
        let mut dim = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let word = match fields.next() {
                Some(word) => word,
                None => continue,
            };
            let rest: Vec<&str> = fields.collect();

            // A leading `count dim` header is allowed but not required.
            if line_no == 0
                && rest.len() == 1
                && word.parse::<usize>().is_ok()
                && rest[0].parse::<usize>().is_ok()
            {
                continue;
            }

            let mut vector = Vec::with_capacity(rest.len());
            for field in &rest {
                let value: f32 = field
                    .parse()
                    .map_err(|_| invalid(format!("bad vector value {field:?} for word {word:?}")))?;
                vector.push(value);
            }

            if words.is_empty() {
                if vector.is_empty() {
                    return Err(invalid(format!("no vector values for word {word:?}")));
                }
                dim = vector.len();
            } else if vector.len() != dim {
                return Err(invalid(format!(
                    "word {word:?} has {} values, expected {dim}",
                    vector.len()
                )));
            }

            if index.contains_key(word) {
                tracing::warn!("Skipping duplicate vector for word {word:?}");
                continue;
            }

            normalize(&mut vector);
            index.insert(word.to_string(), words.len());
            words.push(word.to_string());
            values.extend_from_slice(&vector);
        }

        if words.is_empty() {
            return Err(invalid("no word vectors found".to_string()));
        }

        tracing::debug!(
            "Loaded {} word vectors of dimension {dim} from {}",
            words.len(),
            source.display()
        );

        Ok(Self {
            words,
            index,
            values,
            dim,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn vector(&self, i: usize) -> &[f32] {
        &self.values[i * self.dim..(i + 1) * self.dim]
    }
}

impl EmbeddingModel for WordVectors {
    fn vocabulary(&self) -> &[String] {
        &self.words
    }

    fn nearest(&self, word: &str, n: usize) -> Result<Vec<String>, EmbeddingError> {
        let &query_idx = self
            .index
            .get(word)
            .ok_or_else(|| EmbeddingError::UnknownWord(word.to_string()))?;
        let query = self.vector(query_idx);

        let mut best = TopN::new(n);
        for candidate in 0..self.words.len() {
            if candidate == query_idx {
                continue;
            }
            best.push(candidate, dot(query, self.vector(candidate)));
        }

        Ok(best
            .into_indices()
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect())
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// Bounded accumulator keeping the `limit` best-scoring indices in order.
/// Equal scores resolve to the lower index, which keeps neighbor lists
/// deterministic for a fixed model snapshot.
struct TopN {
    limit: usize,
    items: Vec<(usize, f32)>,
}

impl TopN {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            items: Vec::with_capacity(limit.min(1024)),
        }
    }

    fn push(&mut self, idx: usize, score: f32) {
        if self.limit == 0 {
            return;
        }
        if self.items.len() == self.limit {
            let (last_idx, last_score) = self.items[self.limit - 1];
            if !(score > last_score || (score == last_score && idx < last_idx)) {
                return;
            }
        }

        let at = self
            .items
            .partition_point(|&(i, s)| s > score || (s == score && i < idx));
        self.items.insert(at, (idx, score));
        self.items.truncate(self.limit);
    }

    fn into_indices(self) -> Vec<usize> {
        self.items.into_iter().map(|(i, _)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(text: &str) -> WordVectors {
        WordVectors::from_reader(text.as_bytes(), Path::new("test.vec")).unwrap()
    }

    #[test]
    fn parses_rows_with_and_without_a_header() {
        let with_header = model("3 2\nкіт 1.0 0.0\nпес 0.9 0.1\nстіл 0.0 1.0\n");
        let without_header = model("кіт 1.0 0.0\nпес 0.9 0.1\nстіл 0.0 1.0\n");

        assert_eq!(with_header.len(), 3);
        assert_eq!(without_header.len(), 3);
        assert_eq!(
            with_header.vocabulary(),
            &["кіт".to_string(), "пес".to_string(), "стіл".to_string()]
        );
    }

    #[test]
    fn nearest_ranks_by_cosine_similarity() {
        let model = model("кіт 1.0 0.0\nстіл 0.0 1.0\nпес 0.9 0.1\n");
        let neighbors = model.nearest("кіт", 2).unwrap();
        assert_eq!(neighbors, vec!["пес".to_string(), "стіл".to_string()]);
    }

    #[test]
    fn nearest_excludes_the_query_word() {
        let model = model("кіт 1.0 0.0\nпес 0.9 0.1\n");
        let neighbors = model.nearest("кіт", 10).unwrap();
        assert_eq!(neighbors, vec!["пес".to_string()]);
    }

    #[test]
    fn equal_scores_resolve_to_the_earlier_word() {
        let model = model("a 1.0 0.0\nb 0.0 1.0\nc 0.0 1.0\n");
        let neighbors = model.nearest("a", 2).unwrap();
        assert_eq!(neighbors, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn unknown_word_is_a_typed_error() {
        let model = model("кіт 1.0 0.0\nпес 0.9 0.1\n");
        let err = model.nearest("дракон", 3).unwrap_err();
        assert!(matches!(err, EmbeddingError::UnknownWord(word) if word == "дракон"));
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let err = WordVectors::from_reader(
            "кіт 1.0 0.0\nпес 0.9\n".as_bytes(),
            Path::new("test.vec"),
        )
        .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidFormat { .. }));
    }

    #[test]
    fn bad_values_and_empty_inputs_are_rejected() {
        let err = WordVectors::from_reader("кіт one two\n".as_bytes(), Path::new("test.vec"))
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidFormat { .. }));

        let err =
            WordVectors::from_reader("\n\n".as_bytes(), Path::new("test.vec")).unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidFormat { .. }));
    }
}
