use crate::column::{get_column_value, Layout};
use crate::error::SheetResult;
use crate::row::Row;

/// Upper bound of a row range
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowBound {
    Row(usize),
    /// Up to the end of the input
    End,
}

impl RowBound {
    pub fn covers(&self, from: usize, number: usize) -> bool {
        match self {
            Self::Row(to) => from <= number && number <= *to,
            Self::End => from <= number,
        }
    }
}

/// Guard limiting which rows a data processing function applies to
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Selection {
    #[default]
    None,
    Rows { from: usize, to: RowBound },
    /// Only the last input row, written as "rows - -"
    LastRow,
    BeginsWith { column: usize, pattern: Vec<u8> },
    Contains { column: usize, pattern: Vec<u8> },
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether the row is in scope
    ///
    /// Column based selections fail when the column doesn't exist.
    pub fn accepts(&self, row: &Row, layout: &Layout) -> SheetResult<bool> {
        let accepted = match self {
            Self::None => true,
            Self::Rows { from, to } => to.covers(*from, row.number),
            Self::LastRow => row.is_last,
            Self::BeginsWith { column, pattern } => {
                get_column_value(row, *column, layout)?.starts_with(pattern)
            }
            Self::Contains { column, pattern } => {
                let value = get_column_value(row, *column, layout)?;
                pattern.is_empty() || value.windows(pattern.len()).any(|window| window == pattern)
            }
        };
        Ok(accepted)
    }
}
