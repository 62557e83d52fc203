use crate::error::{SheetError, SheetResult};
use crate::models::{Config, Delimiters};
use crate::selection::{RowBound, Selection};

/// Token standing for the end of the input in a range
const END_TOKEN: &str = "-";

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum FunctionType {
    IRow,
    ARow,
    DRow,
    DRows,
    ICol,
    ACol,
    DCol,
    DCols,
    CSet,
    ToLower,
    ToUpper,
    Round,
    Int,
    Copy,
    Swap,
    Move,
    Rows,
    BeginsWith,
    Contains,
    None,
}

impl FunctionType {
    /// Names are matched exactly, so `CSET` or ` cset` are unknown
    pub fn from_str(src: &str) -> Self {
        let function_type = match src {
            "irow"       => Self::IRow,
            "arow"       => Self::ARow,
            "drow"       => Self::DRow,
            "drows"      => Self::DRows,
            "icol"       => Self::ICol,
            "acol"       => Self::ACol,
            "dcol"       => Self::DCol,
            "dcols"      => Self::DCols,
            "cset"       => Self::CSet,
            "tolower"    => Self::ToLower,
            "toupper"    => Self::ToUpper,
            "round"      => Self::Round,
            "int"        => Self::Int,
            "copy"       => Self::Copy,
            "swap"       => Self::Swap,
            "move"       => Self::Move,
            "rows"       => Self::Rows,
            "beginswith" => Self::BeginsWith,
            "contains"   => Self::Contains,
            _ => Self::None,
        };
        function_type
    }

    /// Selectors don't produce a function but guard the next one
    pub fn is_selector(&self) -> bool {
        matches!(self, Self::Rows | Self::BeginsWith | Self::Contains)
    }
}

/// Function changing the structure of the table
#[derive(Clone, Debug, PartialEq)]
pub enum TableEdit {
    IRow(usize),
    ARow,
    DRows(usize, RowBound),
    ICol(usize),
    ACol,
    DCols(usize, usize),
}

/// Function rewriting cell values
#[derive(Clone, Debug, PartialEq)]
pub enum DataEdit {
    CSet(usize, Vec<u8>),
    ToLower(usize),
    ToUpper(usize),
    Round(usize),
    Int(usize),
    Copy(usize, usize),
    Swap(usize, usize),
    Move(usize, usize),
}

/// Compiled function with typed arguments
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Table(TableEdit),
    Data(DataEdit),
}

impl Function {
    pub fn is_table_edit(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Table(edit) => match edit {
                TableEdit::IRow(_) => "irow",
                TableEdit::ARow => "arow",
                TableEdit::DRows(..) => "drows",
                TableEdit::ICol(_) => "icol",
                TableEdit::ACol => "acol",
                TableEdit::DCols(..) => "dcols",
            },
            Self::Data(edit) => match edit {
                DataEdit::CSet(..) => "cset",
                DataEdit::ToLower(_) => "tolower",
                DataEdit::ToUpper(_) => "toupper",
                DataEdit::Round(_) => "round",
                DataEdit::Int(_) => "int",
                DataEdit::Copy(..) => "copy",
                DataEdit::Swap(..) => "swap",
                DataEdit::Move(..) => "move",
            },
        }
    }
}

/// Function paired with the selection it was given
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub function: Function,
    pub selection: Selection,
}

impl Command {
    pub fn new(function: Function) -> Self {
        Self {
            function,
            selection: Selection::None,
        }
    }

    pub fn with_selection(function: Function, selection: Selection) -> Self {
        Self {
            function,
            selection,
        }
    }
}

/// Compile function tokens into commands
///
/// Selection on a table editing function is accepted here and rejected when a row is processed.
pub fn compile(
    tokens: &[impl AsRef<str>],
    delimiters: &Delimiters,
    config: &Config,
) -> SheetResult<Vec<Command>> {
    let mut compiler = Compiler {
        tokens: tokens.iter().map(|t| t.as_ref()).collect(),
        cursor: 0,
        delimiters,
        config,
    };
    let commands = compiler.compile()?;
    log::debug!("Compiled {} function(s) from {} token(s)", commands.len(), tokens.len());
    Ok(commands)
}

/// Column count of emitted rows, given the input column count
///
/// Structural functions apply to every row alike, so the result holds for the whole table.
pub fn output_columns(commands: &[Command], input: usize) -> usize {
    commands.iter().fold(input, |count, command| match command.function {
        Function::Table(TableEdit::ICol(_) | TableEdit::ACol) => count + 1,
        // Reversed ranges are rejected by dcols itself and leave the count alone
        Function::Table(TableEdit::DCols(from, to)) if from <= to && from <= count => {
            let removed = to.min(count) - from + 1;
            (count - removed).max(1)
        }
        _ => count,
    })
}

struct Compiler<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
    delimiters: &'a Delimiters,
    config: &'a Config,
}

impl<'a> Compiler<'a> {
    fn compile(&mut self) -> SheetResult<Vec<Command>> {
        let mut commands = vec![];
        let mut selection: Option<(&str, Selection)> = None;

        while let Some(name) = self.next_token() {
            let function_type = FunctionType::from_str(name);
            if function_type == FunctionType::None {
                return Err(SheetError::UnknownFunction(name.to_string()));
            }

            if function_type.is_selector() {
                if let Some((previous, _)) = selection {
                    return Err(SheetError::InvalidArgument(format!(
                        "Selection \"{}\" is followed by another selection \"{}\"",
                        previous, name
                    )));
                }
                selection.replace((name, self.selection(name, function_type)?));
                continue;
            }

            let function = self.function(name, function_type)?;
            let command = match selection.take() {
                Some((_, selection)) => Command::with_selection(function, selection),
                None => Command::new(function),
            };
            commands.push(command);
        }

        if let Some((name, _)) = selection {
            return Err(SheetError::InvalidArgument(format!(
                "Selection \"{}\" is not followed by a function",
                name
            )));
        }
        Ok(commands)
    }

    fn function(&mut self, name: &str, function_type: FunctionType) -> SheetResult<Function> {
        let function = match function_type {
            FunctionType::IRow => Function::Table(TableEdit::IRow(self.number(name)?)),
            FunctionType::ARow => Function::Table(TableEdit::ARow),
            FunctionType::DRow => {
                let row = self.number(name)?;
                Function::Table(TableEdit::DRows(row, RowBound::Row(row)))
            }
            FunctionType::DRows => {
                let from = self.number(name)?;
                let to = self.bound(name)?;
                if let RowBound::Row(to) = to {
                    check_range(from, to)?;
                }
                Function::Table(TableEdit::DRows(from, to))
            }
            FunctionType::ICol => Function::Table(TableEdit::ICol(self.number(name)?)),
            FunctionType::ACol => Function::Table(TableEdit::ACol),
            FunctionType::DCol => {
                let column = self.number(name)?;
                Function::Table(TableEdit::DCols(column, column))
            }
            FunctionType::DCols => {
                let (from, to) = self.pair(name)?;
                check_range(from, to)?;
                Function::Table(TableEdit::DCols(from, to))
            }
            FunctionType::CSet => {
                let column = self.number(name)?;
                let value = self.text(name)?;
                if value.iter().any(|&b| b == b'\n' || self.delimiters.contains(b)) {
                    return Err(SheetError::InvalidArgument(format!(
                        "Value \"{}\" of \"{}\" contains a delimiter",
                        String::from_utf8_lossy(&value),
                        name
                    )));
                }
                Function::Data(DataEdit::CSet(column, value))
            }
            FunctionType::ToLower => Function::Data(DataEdit::ToLower(self.number(name)?)),
            FunctionType::ToUpper => Function::Data(DataEdit::ToUpper(self.number(name)?)),
            FunctionType::Round => Function::Data(DataEdit::Round(self.number(name)?)),
            FunctionType::Int => Function::Data(DataEdit::Int(self.number(name)?)),
            FunctionType::Copy => {
                let (from, to) = self.pair(name)?;
                Function::Data(DataEdit::Copy(from, to))
            }
            FunctionType::Swap => {
                let (first, second) = self.pair(name)?;
                Function::Data(DataEdit::Swap(first, second))
            }
            FunctionType::Move => {
                let (column, before) = self.pair(name)?;
                if before > column {
                    return Err(SheetError::MoveOrderError(column, before));
                }
                Function::Data(DataEdit::Move(column, before))
            }
            FunctionType::Rows
            | FunctionType::BeginsWith
            | FunctionType::Contains
            | FunctionType::None => {
                return Err(SheetError::UnknownFunction(name.to_string()));
            }
        };
        Ok(function)
    }

    fn selection(&mut self, name: &str, function_type: FunctionType) -> SheetResult<Selection> {
        let selection = match function_type {
            FunctionType::Rows => {
                let from = self.expect_token(name)?;
                let to = self.bound(name)?;
                match (from == END_TOKEN, to) {
                    (true, RowBound::End) => Selection::LastRow,
                    (true, RowBound::Row(_)) => {
                        return Err(SheetError::InvalidArgument(format!(
                            "\"{}\" accepts \"{}\" as a start only when the end is \"{}\" too",
                            name, END_TOKEN, END_TOKEN
                        )));
                    }
                    (false, to) => {
                        let from = parse_number(name, from)?;
                        if let RowBound::Row(to) = to {
                            check_range(from, to)?;
                        }
                        Selection::Rows { from, to }
                    }
                }
            }
            FunctionType::BeginsWith => {
                let column = self.number(name)?;
                let pattern = self.text(name)?;
                Selection::BeginsWith { column, pattern }
            }
            FunctionType::Contains => {
                let column = self.number(name)?;
                let pattern = self.text(name)?;
                Selection::Contains { column, pattern }
            }
            _ => return Err(SheetError::UnknownFunction(name.to_string())),
        };
        Ok(selection)
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.cursor).copied();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn expect_token(&mut self, name: &str) -> SheetResult<&'a str> {
        self.next_token().ok_or_else(|| {
            SheetError::InvalidArgument(format!("Insufficient arguments for \"{}\"", name))
        })
    }

    fn number(&mut self, name: &str) -> SheetResult<usize> {
        let token = self.expect_token(name)?;
        parse_number(name, token)
    }

    fn pair(&mut self, name: &str) -> SheetResult<(usize, usize)> {
        Ok((self.number(name)?, self.number(name)?))
    }

    fn bound(&mut self, name: &str) -> SheetResult<RowBound> {
        let token = self.expect_token(name)?;
        if token == END_TOKEN {
            Ok(RowBound::End)
        } else {
            Ok(RowBound::Row(parse_number(name, token)?))
        }
    }

    fn text(&mut self, name: &str) -> SheetResult<Vec<u8>> {
        let value = self.expect_token(name)?.as_bytes().to_vec();
        if value.len() > self.config.cell_capacity {
            return Err(SheetError::ValueTooLarge(self.config.cell_capacity));
        }
        Ok(value)
    }
}

fn parse_number(name: &str, token: &str) -> SheetResult<usize> {
    match token.parse::<usize>() {
        Ok(num) if num >= 1 => Ok(num),
        _ => Err(SheetError::InvalidArgument(format!(
            "\"{}\" expects a positive integer but got \"{}\"",
            name, token
        ))),
    }
}

fn check_range(from: usize, to: usize) -> SheetResult<()> {
    if from > to {
        return Err(SheetError::BadRange(from, to));
    }
    Ok(())
}
