use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tezaur_embedding::{EmbeddingError, EmbeddingModel};

/// One evaluation question: a query word plus the related words at least
/// one of which should appear among the query's neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub word: String,
    pub expected: Vec<String>,
}

/// Outcome of scoring a questions file against a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
}

impl Evaluation {
    /// Score rounded to a whole percent.
    pub fn score_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 / self.total as f64 * 100.0).round() as u32
    }
}

/// Reads a questions file: per line a query word followed by the expected
/// related words, whitespace separated. Blank lines are skipped.
pub fn load_questions(path: impl AsRef<Path>) -> std::io::Result<Vec<Question>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut questions = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            continue;
        };
        questions.push(Question {
            word: word.to_string(),
            expected: tokens.map(str::to_string).collect(),
        });
    }

    Ok(questions)
}

/// Scores each question by asking the model for the `top_n` neighbors of
/// the query word; a question counts as correct when at least one expected
/// word is among them. Query words unknown to the model score as incorrect
/// rather than failing the run.
pub fn evaluate<M>(
    model: &M,
    questions: &[Question],
    top_n: usize,
) -> Result<Evaluation, EmbeddingError>
where
    M: EmbeddingModel + ?Sized,
{
    let mut correct = 0;

    for question in questions {
        let neighbors = match model.nearest(&question.word, top_n) {
            Ok(neighbors) => neighbors,
            Err(EmbeddingError::UnknownWord(word)) => {
                tracing::debug!("Question word {word:?} is unknown to the model");
                continue;
            }
            Err(other) => return Err(other),
        };

        if question.expected.iter().any(|e| neighbors.contains(e)) {
            correct += 1;
        }
    }

    Ok(Evaluation {
        correct,
        total: questions.len(),
    })
}
