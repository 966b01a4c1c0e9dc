use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tezaur_builder::Thesaurus;

/// File name pattern the original tool used for generated outputs.
const TIMESTAMP_PATTERN: &str = "%I:%M:%S:%3f_on_%d-%b-%Y";

/// Default output path `<prefix>_<timestamp>.txt` in the working directory.
pub fn default_destination(prefix: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format(TIMESTAMP_PATTERN);
    PathBuf::from(format!("{prefix}_{timestamp}.txt"))
}

/// Writes every finished entry as one line. The file is created only after
/// the whole build succeeded, so a failed build never leaves a truncated
/// thesaurus behind.
pub fn store(thesaurus: &Thesaurus, destination: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(destination)?);

    for entry in &thesaurus.entries {
        writeln!(writer, "{}", entry.content)?;
    }

    writer.flush()
}
