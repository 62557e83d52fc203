//! Column addressing inside a row buffer
//!
//! Columns are never materialized. A column is the n-th run of bytes between canonical
//! delimiters, so every read scans the row and every write splices a new value into it.

use std::ops::Range;

use crate::error::{SheetError, SheetResult};
use crate::row::Row;

/// Column geometry of the row being processed
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub delimiter: u8,
    pub columns: usize,
    pub cell_capacity: usize,
}

impl Layout {
    pub fn new(delimiter: u8, columns: usize, cell_capacity: usize) -> Self {
        Self {
            delimiter,
            columns,
            cell_capacity,
        }
    }

    /// Same layout measured against the current state of a row
    pub fn measure(&self, row: &Row) -> Self {
        Self {
            columns: row.column_count(self.delimiter),
            ..*self
        }
    }

    pub fn contains(&self, column: usize) -> bool {
        column >= 1 && column <= self.columns
    }
}

/// Byte range of a column, delimiters excluded
pub(crate) fn column_span(content: &[u8], column: usize, delimiter: u8) -> Option<Range<usize>> {
    if column == 0 {
        return None;
    }
    let mut current = 1;
    let mut start = 0;
    for (index, &byte) in content.iter().enumerate() {
        if byte == delimiter {
            if current == column {
                return Some(start..index);
            }
            current += 1;
            start = index + 1;
        }
    }
    if current == column {
        Some(start..content.len())
    } else {
        None
    }
}

/// Read the value of a column
pub fn get_column_value(row: &Row, column: usize, layout: &Layout) -> SheetResult<Vec<u8>> {
    if !layout.contains(column) {
        return Err(SheetError::ColumnNotFound(column));
    }
    let content = row.content();
    let span = column_span(content, column, layout.delimiter)
        .ok_or(SheetError::ColumnNotFound(column))?;
    if span.len() > layout.cell_capacity {
        return Err(SheetError::ValueTooLarge(layout.cell_capacity));
    }
    Ok(content[span].to_vec())
}

/// Replace the value of a column
///
/// Bytes around the column are kept verbatim, so the new value may be shorter or longer than the
/// old one. Row is left untouched on failure.
pub fn set_column_value(row: &mut Row, column: usize, value: &[u8], layout: &Layout) -> SheetResult<()> {
    if !layout.contains(column) {
        return Err(SheetError::ColumnNotFound(column));
    }
    let span = column_span(row.content(), column, layout.delimiter)
        .ok_or(SheetError::ColumnNotFound(column))?;

    let size = row.size() - span.len() + value.len();
    if size > row.capacity {
        return Err(SheetError::RowOverflow(row.number, row.capacity));
    }

    let mut data = Vec::with_capacity(size);
    data.extend_from_slice(&row.data[..span.start]);
    data.extend_from_slice(value);
    data.extend_from_slice(&row.data[span.end..]);
    row.replace(data)
}
