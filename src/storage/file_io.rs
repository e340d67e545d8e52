//! Line-oriented file I/O
//!
//! The persistence boundary for the expense file. Writes go straight to the
//! target path: a failed write can leave a truncated file behind.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::TrackerError;

/// Read every line of a text file
pub fn read_all_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TrackerError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| TrackerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TrackerError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write lines to a text file, each newline-terminated, replacing its contents
pub fn write_all_lines<P, I, S>(path: P, lines: I) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| TrackerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| TrackerError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}
