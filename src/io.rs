//! The player-facing text interface.

use alloc::string::String;
#[cfg(feature = "std")]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::io::{BufRead, Write};

/// Line-oriented I/O between a round and the human player.
///
/// A round never interprets what `read_line` returns beyond trimming and
/// lowercasing it, and never expects `render` to fail.
pub trait PlayerIo {
    /// Blocks until the player enters a line.
    ///
    /// Returns `None` once the input is closed.
    fn read_line(&mut self) -> Option<String>;

    /// Shows one line of output to the player.
    fn render(&mut self, line: &str);
}

impl<T: PlayerIo + ?Sized> PlayerIo for &mut T {
    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }

    fn render(&mut self, line: &str) {
        (**self).render(line);
    }
}

/// [`PlayerIo`] over any buffered reader and writer, such as stdin and stdout.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug)]
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

#[cfg(feature = "std")]
impl ConsoleIo<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Creates a console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

#[cfg(feature = "std")]
impl<R, W> ConsoleIo<R, W> {
    /// Creates a console over the given reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(feature = "std")]
impl<R: BufRead, W: Write> PlayerIo for ConsoleIo<R, W> {
    /// Bytes that are not valid UTF-8 are decoded lossily, so a garbled line
    /// reaches the round as ordinary invalid input rather than closing it.
    fn read_line(&mut self) -> Option<String> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) => {
                log::warn!("failed to read player input: {err}");
                None
            }
        }
    }

    fn render(&mut self, line: &str) {
        if let Err(err) = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush()) {
            log::warn!("failed to write output: {err}");
        }
    }
}
