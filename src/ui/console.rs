//! Line-oriented console used by every interactive command.
//!
//! Generic over input and output so the menu can run on stdin/stdout or on
//! in-memory buffers.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one line of input.
    ///
    /// The trailing line break is removed, other whitespace is kept.
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Like [`Console::prompt`], with end of input read as an empty answer.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
