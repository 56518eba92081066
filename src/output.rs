//! Output management module
//!
//! Buffered writer for the generated wordlist file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for file writing (64MB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024 * 1024;

/// Default output filename when none is given
pub const DEFAULT_OUTPUT_NAME: &str = "wordlist.txt";

/// Output file writer with buffering
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u128,
    bytes_written: u128,
}

impl OutputWriter {
    /// Create (or truncate) the output file
    pub fn new(path: PathBuf, buffer_size: usize) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        let writer = BufWriter::with_capacity(buffer_size, file);

        Ok(Self {
            writer,
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write a word followed by a newline
    #[inline]
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u128 + 1;
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> u128 {
        self.lines_written
    }

    pub fn bytes_written(&self) -> u128 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
