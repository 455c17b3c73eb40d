//! Line-oriented interactive console.
//!
//! Generic over reader and writer so the interactive flow can be driven
//! from tests with in-memory buffers.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print a line
    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.writer, "{}", message.as_ref())
    }

    /// Print `label` without a newline and read one line of input.
    ///
    /// The trailing newline is removed. End of input yields an empty string.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Consume the console and return the writer
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}
