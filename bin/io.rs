use std::fmt::Display;
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};
use tracing::{instrument, warn};

/// Line-oriented access to the console.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: BufReader<R>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader),
        }
    }

    /// Receive a line without its line break.
    ///
    /// Bytes that are not valid UTF-8 are replaced by `U+FFFD`.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ErrorKind::UnexpectedEof.into());
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        match String::from_utf8(buf) {
            Ok(line) => Ok(line),
            Err(e) => {
                warn!("the console sent a line that is not valid UTF-8");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Send a line.
    #[instrument(level = "trace", skip(self, line), err, fields(%line))]
    pub fn send<T: Display>(&mut self, line: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", line)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
