pub mod evaluate;
pub mod thesaurus;

pub use evaluate::{Evaluation, Question, evaluate, load_questions};
pub use thesaurus::{BuildError, Thesaurus, ThesaurusEntry, build};

#[cfg(test)]
pub(crate) mod test_model;
