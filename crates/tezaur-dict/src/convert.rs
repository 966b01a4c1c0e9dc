use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Errors from the raw dict_uk conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid line was found={0}")]
    InvalidLine(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts a raw dict_uk export into the compact `word tags` format the
/// dictionary loader consumes.
///
/// The first line of the export is a header and is dropped. Each data line
/// must hold exactly three space-separated fields (`word lemma tags`); the
/// middle field is discarded. Blank lines are skipped.
pub fn convert_dict_uk(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), ConvertError> {
    let reader = BufReader::new(File::open(input.as_ref())?);
    let mut writer = BufWriter::new(File::create(output.as_ref())?);

    let mut converted = 0usize;

    for line in reader.lines().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(' ').collect();
        let &[word, _, tags] = fields.as_slice() else {
            return Err(ConvertError::InvalidLine(line));
        };

        writeln!(writer, "{word} {tags}")?;
        converted += 1;
    }

    writer.flush()?;
    tracing::debug!("Converted {converted} dict_uk lines");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn convert(content: &str) -> Result<String, ConvertError> {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(content.as_bytes()).unwrap();
        let output = tempfile::NamedTempFile::new().unwrap();

        convert_dict_uk(input.path(), output.path())?;
        Ok(std::fs::read_to_string(output.path()).unwrap())
    }

    #[test]
    fn drops_the_header_and_the_lemma_field() {
        let out = convert("# header\nкота кіт noun:anim:v_rod\nбіг бігти verb\n").unwrap();
        assert_eq!(out, "кота noun:anim:v_rod\nбіг verb\n");
    }

    #[test]
    fn skips_blank_lines() {
        let out = convert("# header\n\nкота кіт noun\n   \n").unwrap();
        assert_eq!(out, "кота noun\n");
    }

    #[test]
    fn rejects_lines_without_exactly_three_fields() {
        let err = convert("# header\nкота кіт\n").unwrap_err();
        match err {
            ConvertError::InvalidLine(line) => assert_eq!(line, "кота кіт"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = convert("# header\nа б в г\n").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidLine(_)));
    }
}
