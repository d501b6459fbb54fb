//! Console I/O.
//!
//! The processor never touches process-wide streams directly. Print and input
//! instructions go through a [`Console`] handed to the run loop, so a run can be
//! pointed at the terminal, a file, or an in-memory buffer.
//!
//! [`StreamConsole`] adapts any `BufRead`/`Write` pair and implements the text
//! conventions of the machine:
//! 1. **Output:** Integers as signed decimal, characters as one raw byte, each followed by `\n`.
//! 2. **Integer input:** Leading whitespace skipped, optional sign, decimal digits; the byte
//!    that ends the number is left unread.
//! 3. **Character input:** Exactly one byte, or two when the first is the `\n` left behind by a
//!    previous integer read.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::common::{VmError, VmResult};

/// Console collaborator used by the print and input instructions.
pub trait Console {
    /// Writes a signed decimal integer followed by a newline.
    ///
    /// # Errors
    ///
    /// [`VmError::Io`] if the underlying stream fails.
    fn print_int(&mut self, value: i64) -> VmResult<()>;

    /// Writes one byte as a character followed by a newline.
    ///
    /// # Errors
    ///
    /// [`VmError::Io`] if the underlying stream fails.
    fn print_char(&mut self, byte: u8) -> VmResult<()>;

    /// Reads a signed decimal integer, blocking until one is available.
    ///
    /// # Errors
    ///
    /// [`VmError::InvalidInput`] if the next token is not an integer that fits in
    /// 64 bits, [`VmError::EndOfInput`] if input is exhausted first.
    fn read_int(&mut self) -> VmResult<i64>;

    /// Reads one character, skipping a single leading newline.
    ///
    /// # Errors
    ///
    /// [`VmError::EndOfInput`] if input is exhausted first.
    fn read_char(&mut self) -> VmResult<u8>;
}

/// A [`Console`] over a buffered reader and a writer.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl StreamConsole<StdinLock<'static>, Stdout> {
    /// Binds the process standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Wraps an input and an output stream.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn peek(&mut self) -> VmResult<Option<u8>> {
        let buf = self.input.fill_buf()?;
        Ok(buf.first().copied())
    }

    fn next_byte(&mut self) -> VmResult<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.input.consume(1);
        }
        Ok(byte)
    }

    /// Consumes bytes while `accept` holds, appending them to `text`.
    fn take_while(&mut self, text: &mut String, accept: impl Fn(u8) -> bool) -> VmResult<()> {
        while let Some(b) = self.peek()? {
            if !accept(b) {
                break;
            }
            text.push(char::from(b));
            self.input.consume(1);
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn print_int(&mut self, value: i64) -> VmResult<()> {
        writeln!(self.output, "{value}")?;
        Ok(())
    }

    fn print_char(&mut self, byte: u8) -> VmResult<()> {
        self.output.write_all(&[byte, b'\n'])?;
        Ok(())
    }

    fn read_int(&mut self) -> VmResult<i64> {
        // Anything printed so far is a prompt the reader should see.
        self.output.flush()?;

        let mut skipped = String::new();
        self.take_while(&mut skipped, |b| b.is_ascii_whitespace())?;

        let mut text = String::new();
        self.take_while(&mut text, |b| b == b'+' || b == b'-')?;
        if text.len() > 1 {
            return Err(VmError::InvalidInput(text));
        }
        self.take_while(&mut text, |b| b.is_ascii_digit())?;

        if text.is_empty() {
            return match self.peek()? {
                None => Err(VmError::EndOfInput),
                Some(b) => Err(VmError::InvalidInput(char::from(b).to_string())),
            };
        }
        text.parse::<i64>().map_err(|_| VmError::InvalidInput(text))
    }

    fn read_char(&mut self) -> VmResult<u8> {
        self.output.flush()?;

        match self.next_byte()? {
            Some(b'\n') => self.next_byte()?.ok_or(VmError::EndOfInput),
            Some(b) => Ok(b),
            None => Err(VmError::EndOfInput),
        }
    }
}
