//! Merged source rendering
//!
//! Output layout:
//!
//! ```text
//! // Merged Swift Files
//! <blank>
//! <blank>
//! // MARK: - App/App.swift
//! <blank>
//! <contents of App/App.swift>
//! <newline>
//! ...
//! ```

use crate::domain::{MARKER_PREFIX, PREAMBLE};
use std::io::{self, Write};

/// Writes the merged-file framing around each source's contents.
///
/// Tracks how many bytes went through it so callers can report them
/// without re-reading the output.
pub struct MergedWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> MergedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, bytes_written: 0 }
    }

    /// Write the preamble line and the blank line after it.
    pub fn write_preamble(&mut self) -> io::Result<()> {
        self.write_str(PREAMBLE)?;
        self.write_str("\n\n")
    }

    /// Write one source: blank line, marker, blank line, contents, newline.
    ///
    /// `contents` is written verbatim, including any trailing newline it
    /// already has.
    pub fn write_source(&mut self, relative_path: &str, contents: &str) -> io::Result<()> {
        self.write_str("\n")?;
        self.write_str(&marker_line(relative_path))?;
        self.write_str("\n\n")?;
        self.write_str(contents)?;
        self.write_str("\n")
    }

    /// Flush and hand back the underlying writer with the byte count.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        self.inner.flush()?;
        Ok((self.inner, self.bytes_written))
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())?;
        self.bytes_written += s.len() as u64;
        Ok(())
    }
}

/// The separator line for a source, without its newline.
pub fn marker_line(relative_path: &str) -> String {
    format!("{MARKER_PREFIX}{relative_path}")
}
