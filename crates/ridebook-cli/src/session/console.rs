//! Line-oriented console over any `BufRead`/`Write` pair.

use std::io::{self, BufRead, Write};

/// Prompts and reads answers one line at a time.
///
/// Answers keep their inner and leading/trailing spaces; only the line
/// terminator is stripped. Callers decide what to trim.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one full line.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Show `prompt` and read one answer. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 (e.g. Latin-1 from a legacy terminal) become
    /// U+FFFD instead of failing the read.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like [`Console::ask`], reading end of input as an empty answer.
    pub fn ask_or_empty(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }
}
