use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tezaur_speech::{ParseError, SpeechPart, parse_line};

/// Immutable word to speech-part mapping built from a tagged dictionary
/// file. Constructed once per run and shared read-only afterwards.
#[derive(Debug)]
pub struct Dictionary {
    entries: HashMap<String, SpeechPart>,
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// A surviving line failed to parse. `position` is 1-based and counts
    /// non-blank lines only, so it can diverge from raw file line numbers
    /// when blank lines are interspersed.
    #[error("failed to parse file {file}, line: {line}, position: {position}")]
    Parse {
        file: PathBuf,
        line: String,
        position: usize,
        source: ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Dictionary {
    /// Loads a dictionary file, failing fast on the first malformed line.
    ///
    /// Blank lines are skipped and do not consume a position. When a word
    /// appears on several lines the later line wins; duplicates never
    /// raise an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(reader, path)
    }

    /// Same as [`Dictionary::load`] but over an already opened reader;
    /// `source` only identifies the input in parse errors.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self, DictError> {
        let mut entries = HashMap::new();
        let mut position = 0;

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            position += 1;

            let part = parse_line(&line).map_err(|cause| DictError::Parse {
                file: source.to_path_buf(),
                line: line.clone(),
                position,
                source: cause,
            })?;

            entries.insert(part.word().to_string(), part);
        }

        tracing::debug!(
            "Parsed {} definitions out of {} lines from {}",
            entries.len(),
            position,
            source.display()
        );

        Ok(Self { entries })
    }

    pub fn get(&self, word: &str) -> Option<&SpeechPart> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tezaur_speech::Declension;

    use super::*;

    fn dict_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_well_formed_file() {
        let file = dict_file("кіт noun:anim:v_naz\nбігти verb\nгарний adj:v_rod\n");
        let dict = Dictionary::load(file.path()).unwrap();

        assert_eq!(dict.len(), 3);
        assert_eq!(
            dict.get("кіт"),
            Some(&SpeechPart::Noun {
                word: "кіт".to_string(),
                declension: Declension::Nominative,
            })
        );
        assert_eq!(
            dict.get("гарний"),
            Some(&SpeechPart::Adjective {
                word: "гарний".to_string(),
                declension: Declension::Genetive,
            })
        );
        assert_eq!(dict.get("пес"), None);
    }

    #[test]
    fn blank_lines_are_skipped_and_do_not_consume_positions() {
        let file = dict_file("кіт noun\n\n   \nбігти verb\n");
        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn fails_fast_with_the_position_among_surviving_lines() {
        // The malformed line is the 5th surviving line; blank lines in
        // between must not shift the reported position.
        let file = dict_file(
            "а noun\n\nб verb\nв adv\n\nг adj\nд pron\nе conj\n",
        );
        let err = Dictionary::load(file.path()).unwrap_err();

        match err {
            DictError::Parse {
                line, position, ..
            } => {
                assert_eq!(line, "д pron");
                assert_eq!(position, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_error_message_names_file_line_and_position() {
        let file = dict_file("кіт noun\nзле ???\n");
        let err = Dictionary::load(file.path()).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("failed to parse file"), "{message}");
        assert!(message.contains("line: зле ???"), "{message}");
        assert!(message.contains("position: 2"), "{message}");
    }

    #[test]
    fn later_lines_overwrite_earlier_ones_for_the_same_word() {
        let file = dict_file("кіт noun:v_rod\nкіт verb\n");
        let dict = Dictionary::load(file.path()).unwrap();

        assert_eq!(dict.len(), 1);
        assert_eq!(
            dict.get("кіт"),
            Some(&SpeechPart::Verb {
                word: "кіт".to_string(),
            })
        );
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let err = Dictionary::load("/nonexistent/dict.txt").unwrap_err();
        assert!(matches!(err, DictError::Io(_)));
    }
}
