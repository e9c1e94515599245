//! Wordlist file output.
//!
//! Words are written one per line, UTF-8, newline terminated. Batch output
//! goes through [`FileSink`], which flushes after every entry so partial
//! progress survives an interruption.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use wordbender_batch::ResultSink;
use wordbender_domain::BatchEntry;

/// Open a file for wordlist output, creating parent directories.
fn open_output(path: &Path, append: bool) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
}

/// Write words to a file, one per line.
pub fn save_words(words: &[String], path: &Path, append: bool) -> std::io::Result<()> {
    let file = open_output(path, append)?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()
}

/// Sink that appends each entry's words to a single file, flushing per entry.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open the sink, creating parent directories as needed.
    pub fn create(path: &Path, append: bool) -> std::io::Result<Self> {
        let file = open_output(path, append)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl ResultSink for FileSink {
    fn write(&mut self, entry: &BatchEntry) -> std::io::Result<()> {
        if let Ok(result) = &entry.outcome {
            for word in &result.words {
                writeln!(self.writer, "{}", word)?;
            }
        }
        // Flush per seed set so an interruption loses nothing already done
        self.writer.flush()
    }
}
