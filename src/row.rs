use crate::error::{SheetError, SheetResult};
use crate::models::Delimiters;

/// One line of the table, newline terminator included
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub(crate) data: Vec<u8>,
    pub(crate) capacity: usize,
    pub number: usize,
    pub deleted: bool,
    pub is_last: bool,
}

impl Row {
    /// Create a row from raw bytes
    ///
    /// A missing newline terminator is appended.
    pub fn new(raw: &[u8], number: usize, is_last: bool, capacity: usize) -> SheetResult<Self> {
        let mut data = Vec::with_capacity(raw.len() + 1);
        data.extend_from_slice(raw);
        if data.last() != Some(&b'\n') {
            data.push(b'\n');
        }
        if data.len() > capacity {
            return Err(SheetError::RowOverflow(number, capacity));
        }
        Ok(Self {
            data,
            capacity,
            number,
            deleted: false,
            is_last,
        })
    }

    /// Row made only of delimiters, used for inserted and appended rows
    pub fn blank(columns: usize, delimiter: u8) -> Vec<u8> {
        let mut data = vec![delimiter; columns.saturating_sub(1)];
        data.push(b'\n');
        data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Rewrite every member of the delimiter set into the canonical delimiter
    pub fn normalize(&mut self, delimiters: &Delimiters) {
        let canonical = delimiters.canonical();
        for byte in self.data.iter_mut() {
            if *byte != canonical && delimiters.contains(*byte) {
                *byte = canonical;
            }
        }
    }

    /// Count columns delimited by a canonical delimiter
    pub fn column_count(&self, delimiter: u8) -> usize {
        self.content().iter().filter(|&&b| b == delimiter).count() + 1
    }

    /// Row bytes without the newline terminator
    pub(crate) fn content(&self) -> &[u8] {
        match self.data.split_last() {
            Some((b'\n', rest)) => rest,
            _ => &self.data,
        }
    }

    /// Replace the whole row, checking the row capacity
    pub(crate) fn replace(&mut self, mut data: Vec<u8>) -> SheetResult<()> {
        if data.last() != Some(&b'\n') {
            data.push(b'\n');
        }
        if data.len() > self.capacity {
            return Err(SheetError::RowOverflow(self.number, self.capacity));
        }
        self.data = data;
        Ok(())
    }
}
