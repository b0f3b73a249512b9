//! Line-based terminal I/O.

use std::io::{self, BufRead, Write};

/// Line-oriented text channel between the game and a person.
pub trait Terminal {
    /// Writes one line and flushes.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// [`Terminal`] over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The underlying writer.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead> Console<R, Vec<u8>> {
    /// Everything written so far, for in-memory consoles.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
