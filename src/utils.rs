use crate::error::{SheetError, SheetResult};
use crate::row::Row;
use std::io::{BufRead, Write};

pub(crate) fn write_bytes<W: Write>(output: &mut W, src: &[u8]) -> SheetResult<()> {
    output
        .write_all(src)
        .map_err(|err| SheetError::io_error(err, "Failed to write to output"))
}

#[cfg(feature = "cli")]
pub(crate) fn write_to_stdout(src: &str) -> SheetResult<()> {
    write!(std::io::stdout(), "{}", src)
        .map_err(|err| SheetError::io_error(err, "Failed to write to stdout"))?;
    std::io::stdout()
        .flush()
        .map_err(|err| SheetError::io_error(err, "Failed to flush stdout"))?;

    Ok(())
}

/// Line reader feeding rows one at a time
///
/// Reads one line ahead so every row knows whether it is the last one.
pub struct RowReader<R: BufRead> {
    input: R,
    ahead: Option<Vec<u8>>,
    started: bool,
    read: usize,
    capacity: usize,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(input: R, capacity: usize) -> Self {
        Self {
            input,
            ahead: None,
            started: false,
            read: 0,
            capacity,
        }
    }

    /// Number of rows handed out so far
    pub fn rows_read(&self) -> usize {
        self.read
    }

    pub fn next_row(&mut self) -> SheetResult<Option<Row>> {
        if !self.started {
            self.started = true;
            self.ahead = self.read_line()?;
        }
        let current = match self.ahead.take() {
            Some(line) => line,
            None => return Ok(None),
        };
        self.ahead = self.read_line()?;
        self.read += 1;

        let row = Row::new(&current, self.read, self.ahead.is_none(), self.capacity)?;
        log::trace!("Read row {} ({} bytes)", row.number, row.size());
        Ok(Some(row))
    }

    fn read_line(&mut self) -> SheetResult<Option<Vec<u8>>> {
        let mut line = vec![];
        let read_byte = self
            .input
            .read_until(b'\n', &mut line)
            .map_err(|err| SheetError::io_error(err, "Failed to read stdin from source"))?;
        if read_byte == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
