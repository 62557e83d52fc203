use crate::error::{SheetError, SheetResult};

pub(crate) const DEFAULT_DELIMITER: u8 = b' ';
pub(crate) const ROW_CAPACITY: usize = 10 * 1024;
pub(crate) const CELL_CAPACITY: usize = 100;

/// Set of characters accepted as column delimiters
///
/// First character is the canonical delimiter, every other member is rewritten to it when a row
/// is loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Delimiters {
    set: Vec<u8>,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            set: vec![DEFAULT_DELIMITER],
        }
    }
}

impl Delimiters {
    pub fn from_str(src: &str) -> SheetResult<Self> {
        if src.is_empty() {
            return Err(SheetError::InvalidArgument(
                "Delimiter set is empty".to_string(),
            ));
        }
        if !src.is_ascii() || src.contains('\n') {
            return Err(SheetError::InvalidArgument(format!(
                "Delimiters \"{}\" must be ascii characters other than newline",
                src.escape_default()
            )));
        }
        let mut set: Vec<u8> = Vec::with_capacity(src.len());
        for byte in src.bytes() {
            if !set.contains(&byte) {
                set.push(byte);
            }
        }
        Ok(Self { set })
    }

    pub fn canonical(&self) -> u8 {
        self.set[0]
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.set.contains(&byte)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.set
    }
}

/// Buffer limits of a run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub row_capacity: usize,
    pub cell_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row_capacity: ROW_CAPACITY,
            cell_capacity: CELL_CAPACITY,
        }
    }
}

impl Config {
    /// Read capacities from SHEET_ROW_CAPACITY and SHEET_CELL_CAPACITY
    ///
    /// Missing or invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            row_capacity: capacity_from_env("SHEET_ROW_CAPACITY", ROW_CAPACITY),
            cell_capacity: capacity_from_env("SHEET_CELL_CAPACITY", CELL_CAPACITY),
        }
    }
}

fn capacity_from_env(key: &str, default: usize) -> usize {
    if let Ok(cap) = std::env::var(key) {
        match cap.parse::<usize>() {
            Ok(num) if num > 0 => num,
            _ => default,
        }
    } else {
        default
    }
}

/// Table wide state shared by every row of a run
///
/// Both counts are written once, while row 1 is processed, and only read afterwards.
#[derive(Debug)]
pub struct TableContext {
    pub(crate) delimiters: Delimiters,
    pub(crate) config: Config,
    input_columns: Option<usize>,
    output_columns: Option<usize>,
}

impl TableContext {
    pub fn new(delimiters: Delimiters, config: Config) -> Self {
        Self {
            delimiters,
            config,
            input_columns: None,
            output_columns: None,
        }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiters.canonical()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Column count every input row must have, fixed by row 1
    pub fn input_columns(&self) -> Option<usize> {
        self.input_columns
    }

    /// Column count of emitted rows, fixed by row 1 after its edits
    pub fn output_columns(&self) -> Option<usize> {
        self.output_columns
    }

    /// Check a freshly loaded row against the table column count
    pub(crate) fn check_input_columns(&mut self, row_number: usize, found: usize) -> SheetResult<()> {
        match self.input_columns {
            None => {
                self.input_columns.replace(found);
                Ok(())
            }
            Some(expected) if expected != found => Err(SheetError::InconsistentColumnCount {
                row: row_number,
                expected,
                found,
            }),
            Some(_) => Ok(()),
        }
    }

    pub(crate) fn set_output_columns(&mut self, count: usize) {
        if self.output_columns.is_none() {
            self.output_columns.replace(count);
        }
    }

    /// Check an edited row against the output column count
    pub(crate) fn check_output_columns(&mut self, row_number: usize, found: usize) -> SheetResult<()> {
        match self.output_columns {
            None => {
                self.output_columns.replace(found);
                Ok(())
            }
            Some(expected) if expected != found => Err(SheetError::InconsistentColumnCount {
                row: row_number,
                expected,
                found,
            }),
            Some(_) => Ok(()),
        }
    }
}
