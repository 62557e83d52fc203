use std::io::{BufRead, Write};

use crate::column::Layout;
use crate::command::{self, Command, DataEdit, Function, TableEdit};
use crate::data;
use crate::error::{SheetError, SheetResult};
use crate::models::{Config, Delimiters, TableContext};
use crate::row::Row;
use crate::table;
use crate::utils::{write_bytes, RowReader};

/// Edit state a row ends up in after every command ran
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowState {
    TableEdited,
    DataEdited,
    Unchanged,
}

/// What the processor decided for a row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowOutcome {
    pub state: RowState,
    /// Blank rows to write before the row itself
    pub inserted_before: usize,
    pub emitted: bool,
}

/// Per row execution engine
///
/// Commands are compiled once and reused for every row.
pub struct Processor {
    commands: Vec<Command>,
    context: TableContext,
}

impl Processor {
    pub fn new(commands: Vec<Command>, delimiters: Delimiters, config: Config) -> Self {
        Self {
            commands,
            context: TableContext::new(delimiters, config),
        }
    }

    /// Compile function tokens and build a processor for them
    pub fn from_args(
        tokens: &[impl AsRef<str>],
        delimiters: Delimiters,
        config: Config,
    ) -> SheetResult<Self> {
        let commands = command::compile(tokens, &delimiters, &config)?;
        Ok(Self::new(commands, delimiters, config))
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn context(&self) -> &TableContext {
        &self.context
    }

    /// Process rows from input until it is exhausted, writing the table to output
    ///
    /// Rows written before a failing row stay written.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> SheetResult<()> {
        let mut reader = RowReader::new(input, self.context.config().row_capacity);
        let result = self.run_rows(&mut reader, &mut output);
        let flushed = output
            .flush()
            .map_err(|err| SheetError::io_error(err, "Failed to flush output"));
        result?;
        flushed
    }

    fn run_rows<R: BufRead, W: Write>(
        &mut self,
        reader: &mut RowReader<R>,
        output: &mut W,
    ) -> SheetResult<()> {
        let mut emitted = 0;
        while let Some(mut row) = reader.next_row()? {
            let outcome = self.process_row(&mut row)?;
            self.emit(&row, &outcome, output)?;
            if outcome.emitted {
                emitted += 1;
            }
        }

        let read = reader.rows_read();
        if read == 0 {
            return Err(SheetError::EmptyInput);
        }

        let appended = self.append_rows(output)?;
        log::debug!(
            "Processed {} row(s), emitted {} and appended {}",
            read,
            emitted,
            appended
        );
        Ok(())
    }

    /// Apply every command to a row
    pub fn process_row(&mut self, row: &mut Row) -> SheetResult<RowOutcome> {
        row.normalize(&self.context.delimiters);

        let delimiter = self.context.delimiter();
        let columns = row.column_count(delimiter);
        self.context.check_input_columns(row.number, columns)?;
        self.context
            .set_output_columns(command::output_columns(&self.commands, columns));

        let mut layout = Layout::new(delimiter, columns, self.context.config().cell_capacity);
        let mut table_changed = false;
        let mut data_changed = false;
        let mut inserted_before = 0;

        for command in &self.commands {
            match &command.function {
                Function::Table(edit) => {
                    if !command.selection.is_none() {
                        return Err(SheetError::SelectionOnTableEdit(
                            command.function.name().to_string(),
                        ));
                    }
                    if apply_table_edit(edit, row, &layout)? {
                        inserted_before += 1;
                    }
                    table_changed = true;
                    layout = layout.measure(row);
                    if row.deleted {
                        log::trace!("Row {} deleted by \"{}\"", row.number, command.function.name());
                        break;
                    }
                }
                Function::Data(edit) => {
                    if data_changed {
                        return Err(SheetError::MultipleDataFunctions(row.number));
                    }
                    if !command.selection.accepts(row, &layout)? {
                        continue;
                    }
                    apply_data_edit(edit, row, &layout)?;
                    data_changed = true;
                }
            }
        }

        if table_changed && data_changed {
            return Err(SheetError::MixedEditCategories(row.number));
        }

        let state = match (table_changed, data_changed) {
            (true, _) => RowState::TableEdited,
            (_, true) => RowState::DataEdited,
            _ => RowState::Unchanged,
        };
        log::trace!("Row {} is {:?}", row.number, state);

        Ok(RowOutcome {
            state,
            inserted_before,
            emitted: !row.deleted,
        })
    }

    fn emit<W: Write>(&mut self, row: &Row, outcome: &RowOutcome, output: &mut W) -> SheetResult<()> {
        let delimiter = self.context.delimiter();
        let columns = self.context.output_columns().unwrap_or(1);
        for _ in 0..outcome.inserted_before {
            write_bytes(output, &Row::blank(columns, delimiter))?;
        }
        if outcome.emitted {
            self.context
                .check_output_columns(row.number, row.column_count(delimiter))?;
            write_bytes(output, row.as_bytes())?;
        }
        Ok(())
    }

    /// Write one blank row per "arow" after the last input row
    fn append_rows<W: Write>(&self, output: &mut W) -> SheetResult<usize> {
        let delimiter = self.context.delimiter();
        let columns = self.context.output_columns().unwrap_or(1);
        let count = self
            .commands
            .iter()
            .filter(|command| command.function == Function::Table(TableEdit::ARow))
            .count();
        for _ in 0..count {
            write_bytes(output, &Row::blank(columns, delimiter))?;
        }
        Ok(count)
    }
}

/// Return : if a blank row should be inserted before the row
fn apply_table_edit(edit: &TableEdit, row: &mut Row, layout: &Layout) -> SheetResult<bool> {
    match edit {
        TableEdit::IRow(number) => return Ok(row.number == *number),
        // Appended rows are written once the input is exhausted
        TableEdit::ARow => (),
        TableEdit::DRows(from, to) => table::delete_rows(row, *from, *to)?,
        TableEdit::ICol(column) => table::insert_column(row, *column, layout)?,
        TableEdit::ACol => table::append_column(row, layout)?,
        TableEdit::DCols(from, to) => table::delete_columns(row, *from, *to, layout)?,
    }
    Ok(false)
}

fn apply_data_edit(edit: &DataEdit, row: &mut Row, layout: &Layout) -> SheetResult<()> {
    match edit {
        DataEdit::CSet(column, value) => data::set_cell(row, *column, value, layout),
        DataEdit::ToLower(column) => data::to_lower(row, *column, layout),
        DataEdit::ToUpper(column) => data::to_upper(row, *column, layout),
        DataEdit::Round(column) => data::round(row, *column, layout),
        DataEdit::Int(column) => data::int(row, *column, layout),
        DataEdit::Copy(from, to) => data::copy(row, *from, *to, layout),
        DataEdit::Swap(first, second) => data::swap(row, *first, *second, layout),
        DataEdit::Move(column, before) => data::move_column(row, *column, *before, layout),
    }
}
