//! Sinks that receive each complete anagram as it is found.

use std::io::{self, Write};

/// Receives every complete anagram, in discovery order.
///
/// Returning an error aborts the search.
pub trait ResultEmitter {
    fn emit(&mut self, words: &[&str]) -> io::Result<()>;
}

/// Writes one anagram per line, words separated by a single space.
pub struct LineEmitter<W: Write> {
    writer: W,
    lines: usize,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    #[must_use]
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ResultEmitter for LineEmitter<W> {
    fn emit(&mut self, words: &[&str]) -> io::Result<()> {
        writeln!(self.writer, "{}", words.join(" "))?;
        self.lines += 1;
        Ok(())
    }
}

/// Keeps every anagram in memory.
#[derive(Debug, Default)]
pub struct CollectEmitter {
    pub results: Vec<Vec<String>>,
}

impl CollectEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_results(self) -> Vec<Vec<String>> {
        self.results
    }
}

impl ResultEmitter for CollectEmitter {
    fn emit(&mut self, words: &[&str]) -> io::Result<()> {
        self.results
            .push(words.iter().map(|w| (*w).to_string()).collect());
        Ok(())
    }
}
