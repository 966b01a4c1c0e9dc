use crate::declension::Declension;
use crate::lemma::Lemma;

/// Parsed grammatical classification of one dictionary word.
///
/// Variant and declension are fixed at construction; nouns, adjectives and
/// numerals are the only declinable categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechPart {
    Noun { word: String, declension: Declension },
    Adjective { word: String, declension: Declension },
    Numeral { word: String, declension: Declension },
    Verb { word: String },
    Adverb { word: String },
    Conjunction { word: String },
    VerbalParticiple { word: String },
    Participle { word: String },
    Interjection { word: String },
    Preposition { word: String },
}

impl SpeechPart {
    /// The dictionary word this classification belongs to.
    pub fn word(&self) -> &str {
        match self {
            SpeechPart::Noun { word, .. }
            | SpeechPart::Adjective { word, .. }
            | SpeechPart::Numeral { word, .. }
            | SpeechPart::Verb { word }
            | SpeechPart::Adverb { word }
            | SpeechPart::Conjunction { word }
            | SpeechPart::VerbalParticiple { word }
            | SpeechPart::Participle { word }
            | SpeechPart::Interjection { word }
            | SpeechPart::Preposition { word } => word,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("the input was empty")]
    Empty,

    #[error("missing word in input string={0}")]
    MissingWord(String),

    #[error("blank tag in input string={0}")]
    BlankTag(String),

    #[error("could not parse input string={0}")]
    Unrecognized(String),
}

type Constructor = fn(String, &[Lemma]) -> SpeechPart;

/// Recognizers in fixed priority order. Each one tests a distinct literal
/// tag, so the order never changes the outcome.
const RECOGNIZERS: [(&str, Constructor); 10] = [
    ("noun", |word, rest| SpeechPart::Noun {
        word,
        declension: find_declension(rest),
    }),
    ("adj", |word, rest| SpeechPart::Adjective {
        word,
        declension: find_declension(rest),
    }),
    ("num", |word, rest| SpeechPart::Numeral {
        word,
        declension: find_declension(rest),
    }),
    ("verb", |word, _| SpeechPart::Verb { word }),
    ("adv", |word, _| SpeechPart::Adverb { word }),
    ("conj", |word, _| SpeechPart::Conjunction { word }),
    ("advp", |word, _| SpeechPart::VerbalParticiple { word }),
    ("part", |word, _| SpeechPart::Participle { word }),
    ("intj", |word, _| SpeechPart::Interjection { word }),
    ("prep", |word, _| SpeechPart::Preposition { word }),
];

/// First recognizable declension code among the remaining tags; unknown
/// codes are skipped, and a line without any known code falls back to the
/// nominative case.
fn find_declension(lemmas: &[Lemma]) -> Declension {
    lemmas
        .iter()
        .find_map(|lemma| Declension::from_code(lemma.value()))
        .unwrap_or_default()
}

/// Parses one dictionary line of the form `<word> <tag1>[:<tag2>...]`.
///
/// Only the first tag selects the variant; the remaining tags are scanned
/// for a declension code where the variant carries one. A line without a
/// space keeps the lenient behavior of the source format: the whole line
/// doubles as word and sole tag, so it fails as unrecognized unless the
/// line is itself a known tag.
pub fn parse_line(line: &str) -> Result<SpeechPart, ParseError> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, tags) = line.split_once(' ').unwrap_or((line, line));
    if word.is_empty() {
        return Err(ParseError::MissingWord(line.to_string()));
    }

    // `split` on a non-empty separator always yields at least one token,
    // and a blank token is rejected here, so `lemmas` is non-empty below.
    let lemmas = tags
        .split(':')
        .map(Lemma::of)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ParseError::BlankTag(line.to_string()))?;

    let first = &lemmas[0];
    let rest = &lemmas[1..];

    for (tag, construct) in RECOGNIZERS {
        if first.value() == tag {
            return Ok(construct(word.to_string(), rest));
        }
    }

    Err(ParseError::Unrecognized(line.to_string()))
}
