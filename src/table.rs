//! Table editing functions
//!
//! These change the structure of a row. Blank row insertion is an emission concern and is driven
//! by the processor instead.

use crate::column::{column_span, Layout};
use crate::error::{SheetError, SheetResult};
use crate::row::Row;
use crate::selection::RowBound;

/// Mark the row deleted when its number lies in the range
pub fn delete_rows(row: &mut Row, from: usize, to: RowBound) -> SheetResult<()> {
    if let RowBound::Row(to) = to {
        if from > to {
            return Err(SheetError::BadRange(from, to));
        }
    }
    if to.covers(from, row.number) {
        row.deleted = true;
    }
    Ok(())
}

/// Insert an empty column before a given column
pub fn insert_column(row: &mut Row, column: usize, layout: &Layout) -> SheetResult<()> {
    if !layout.contains(column) {
        return Err(SheetError::ColumnNotFound(column));
    }
    let span = column_span(row.content(), column, layout.delimiter)
        .ok_or(SheetError::ColumnNotFound(column))?;
    let mut data = row.data.clone();
    data.insert(span.start, layout.delimiter);
    row.replace(data)
}

/// Append an empty column after the last one
pub fn append_column(row: &mut Row, layout: &Layout) -> SheetResult<()> {
    let mut data = row.content().to_vec();
    data.push(layout.delimiter);
    data.push(b'\n');
    row.replace(data)
}

/// Remove every column whose number lies in from..=to
///
/// The upper bound is clipped to the column count. Removing every column leaves an empty line.
pub fn delete_columns(row: &mut Row, from: usize, to: usize, layout: &Layout) -> SheetResult<()> {
    if from > to {
        return Err(SheetError::BadRange(from, to));
    }
    if !layout.contains(from) {
        return Err(SheetError::ColumnNotFound(from));
    }

    let mut data = Vec::with_capacity(row.size());
    let kept = row
        .content()
        .split(|&b| b == layout.delimiter)
        .enumerate()
        .filter(|(index, _)| !(from..=to).contains(&(index + 1)));
    for (count, (_, value)) in kept.enumerate() {
        if count > 0 {
            data.push(layout.delimiter);
        }
        data.extend_from_slice(value);
    }
    data.push(b'\n');
    row.replace(data)
}
