pub mod declension;
pub mod format;
pub mod lemma;
pub mod speech_part;

pub use declension::Declension;
pub use lemma::Lemma;
pub use speech_part::{ParseError, SpeechPart, parse_line};
