//! Data processing functions
//!
//! Every function reads a column, transforms the value and splices it back. None of them changes
//! the column count of a row.

use crate::column::{get_column_value, set_column_value, Layout};
use crate::error::{SheetError, SheetResult};
use crate::row::Row;
use crate::table::delete_columns;
use crate::value;

pub fn set_cell(row: &mut Row, column: usize, value: &[u8], layout: &Layout) -> SheetResult<()> {
    if value.len() > layout.cell_capacity {
        return Err(SheetError::ValueTooLarge(layout.cell_capacity));
    }
    set_column_value(row, column, value, layout)
}

pub fn to_lower(row: &mut Row, column: usize, layout: &Layout) -> SheetResult<()> {
    let value = get_column_value(row, column, layout)?.to_ascii_lowercase();
    set_column_value(row, column, &value, layout)
}

pub fn to_upper(row: &mut Row, column: usize, layout: &Layout) -> SheetResult<()> {
    let value = get_column_value(row, column, layout)?.to_ascii_uppercase();
    set_column_value(row, column, &value, layout)
}

pub fn round(row: &mut Row, column: usize, layout: &Layout) -> SheetResult<()> {
    let value = value::round(&get_column_value(row, column, layout)?)?;
    set_column_value(row, column, &value, layout)
}

pub fn int(row: &mut Row, column: usize, layout: &Layout) -> SheetResult<()> {
    let value = value::truncate(&get_column_value(row, column, layout)?)?;
    set_column_value(row, column, &value, layout)
}

/// Overwrite a column with the value of another one
///
/// Out of range columns make this a no-op.
pub fn copy(row: &mut Row, from: usize, to: usize, layout: &Layout) -> SheetResult<()> {
    if from == to || !layout.contains(from) || !layout.contains(to) {
        return Ok(());
    }
    let value = get_column_value(row, from, layout)?;
    set_column_value(row, to, &value, layout)
}

/// Exchange values of two columns
///
/// Out of range columns make this a no-op.
pub fn swap(row: &mut Row, first: usize, second: usize, layout: &Layout) -> SheetResult<()> {
    if first == second || !layout.contains(first) || !layout.contains(second) {
        return Ok(());
    }
    let first_value = get_column_value(row, first, layout)?;
    let second_value = get_column_value(row, second, layout)?;
    let original = row.clone();
    set_column_value(row, first, &second_value, layout)?;
    if let Err(err) = set_column_value(row, second, &first_value, layout) {
        *row = original;
        return Err(err);
    }
    Ok(())
}

/// Move a column so it sits right before another one
///
/// Target must not come after the moved column. Out of range columns make this a no-op.
pub fn move_column(row: &mut Row, column: usize, before: usize, layout: &Layout) -> SheetResult<()> {
    if before > column {
        return Err(SheetError::MoveOrderError(column, before));
    }
    if before == column || !layout.contains(column) || !layout.contains(before) {
        return Ok(());
    }

    let moving = get_column_value(row, column, layout)?;
    let second = get_column_value(row, before, layout)?;

    let mut edited = row.clone();
    delete_columns(&mut edited, column, column, layout)?;

    // Target index is unaffected because it precedes the deleted column
    let mut merged = moving;
    merged.push(layout.delimiter);
    merged.extend_from_slice(&second);
    let measured = layout.measure(&edited);
    set_column_value(&mut edited, before, &merged, &measured)?;

    *row = edited;
    Ok(())
}
