use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// Receives everything a program prints.
pub trait OutputSink {
    /// Writes `text` with no line break.
    fn append(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a line break.
    fn append_line(&mut self, text: &str) -> io::Result<()> {
        self.append(text)?;
        self.append("\n")
    }
}

/// Supplies a line of text whenever a program asks for input.
pub trait InputSource {
    /// Blocks until a line is available for `variable`.
    ///
    /// An exhausted or cancelled source returns an empty string.
    fn prompt(&mut self, variable: &str) -> io::Result<String>;
}

impl OutputSink for String {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapts any [`Write`] into an [`OutputSink`], flushing after every write so
/// that partial lines show up before the next prompt.
///
/// # Example
/// ```
/// use lolterpreter::interpreter::io::{OutputSink, WriteSink};
///
/// let mut sink = WriteSink::new(Vec::new());
/// sink.append("O HAI ").unwrap();
/// sink.append_line("WORLD").unwrap();
///
/// assert_eq!(sink.into_inner(), b"O HAI WORLD\n");
/// ```
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriteSink<W> {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

/// Reads input lines from any [`BufRead`], such as locked stdin.
#[derive(Debug)]
pub struct ReadSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReadSource<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ReadSource<R> {
    fn prompt(&mut self, variable: &str) -> io::Result<String> {
        log::debug!("waiting for input into {variable}");
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line)
    }
}

/// Scripted input: each prompt takes the next queued line.
impl InputSource for VecDeque<String> {
    fn prompt(&mut self, _variable: &str) -> io::Result<String> {
        Ok(self.pop_front().unwrap_or_default())
    }
}

/// An input source for programs that never read; every prompt yields `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn prompt(&mut self, _variable: &str) -> io::Result<String> {
        Ok(String::new())
    }
}
