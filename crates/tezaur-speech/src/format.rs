use crate::speech_part::SpeechPart;

/// Ukrainian category label for a speech part.
fn category(part: &SpeechPart) -> &'static str {
    match part {
        SpeechPart::Noun { .. } => "іменник",
        SpeechPart::Adjective { .. } => "прикметник",
        SpeechPart::Numeral { .. } => "числівник",
        SpeechPart::Verb { .. } => "дієслово",
        SpeechPart::Adverb { .. } => "прислівник",
        SpeechPart::Conjunction { .. } => "сполучник",
        SpeechPart::VerbalParticiple { .. } => "дієприслівник",
        SpeechPart::Participle { .. } => "дієприкметник",
        SpeechPart::Interjection { .. } => "вигук",
        SpeechPart::Preposition { .. } => "прийменник",
    }
}

/// Renders one speech part, e.g. `кіт (іменник, називний відмінок)`.
/// Declinable categories include the case label; the rest render as word
/// and category only.
pub fn speech_part(part: &SpeechPart) -> String {
    match part {
        SpeechPart::Noun { word, declension }
        | SpeechPart::Adjective { word, declension }
        | SpeechPart::Numeral { word, declension } => {
            format!("{word} ({}, {} відмінок)", category(part), declension.label())
        }
        other => format!("{} ({})", other.word(), category(other)),
    }
}

/// Renders a full thesaurus entry: the subject followed by its neighbor
/// words in the given order. An empty neighbor list renders as an empty
/// trailing list.
pub fn entry<'a, I>(subject: &SpeechPart, neighbors: I) -> String
where
    I: IntoIterator<Item = &'a SpeechPart>,
{
    let words: Vec<&str> = neighbors.into_iter().map(SpeechPart::word).collect();
    format!("{}, схожі слова: {}", speech_part(subject), words.join(", "))
}
