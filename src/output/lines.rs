//! Line-oriented report files
//!
//! Each report is a flat text file with one record per line, in the record's
//! `Display` form.

use crate::output::OutputResult;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes records to a file, one per line, replacing any previous content
///
/// # Arguments
///
/// * `path` - Destination file
/// * `records` - Records to write, in order
///
/// # Returns
///
/// * `Ok(usize)` - Number of lines written
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_lines<I, T>(path: &Path, records: I) -> OutputResult<usize>
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let count = write_records(&mut writer, records)?;
    writer.flush()?;

    tracing::debug!("Wrote {} lines to {}", count, path.display());
    Ok(count)
}

/// Writes records to any writer, one per line
pub fn write_records<W, I, T>(writer: &mut W, records: I) -> OutputResult<usize>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut count = 0;
    for record in records {
        writeln!(writer, "{}", record)?;
        count += 1;
    }
    Ok(count)
}
