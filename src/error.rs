use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error : {0}")]
    IoError(IoErrorWithMeta),
    #[error("Unknown function \"{0}\"")]
    UnknownFunction(String),
    #[error("Invalid argument : {0}")]
    InvalidArgument(String),
    #[error("Invalid range : {0} is greater than {1}")]
    BadRange(usize, usize),
    #[error("Row {0} exceeds the row capacity of {1} bytes")]
    RowOverflow(usize, usize),
    #[error("Value exceeds the cell capacity of {0} bytes")]
    ValueTooLarge(usize),
    #[error("Column {0} does not exist")]
    ColumnNotFound(usize),
    #[error("Row {row} has {found} columns but the table has {expected}")]
    InconsistentColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Value \"{0}\" is not a number")]
    InvalidNumber(String),
    #[error("Row selection cannot be applied to table editing function \"{0}\"")]
    SelectionOnTableEdit(String),
    #[error("Only one data processing function can edit row {0}")]
    MultipleDataFunctions(usize),
    #[error("Row {0} cannot be edited by both table editing and data processing functions")]
    MixedEditCategories(usize),
    #[error("Cannot move column {0} before column {1}, target must not come after the source")]
    MoveOrderError(usize, usize),
    #[error("Input is empty")]
    EmptyInput,
    #[cfg(feature = "cli")]
    #[error("Command line error : {0}")]
    CliError(String),
}

impl SheetError {
    pub fn io_error(err: std::io::Error, meta: &str) -> Self {
        Self::IoError(IoErrorWithMeta::new(err, meta))
    }

    /// Whether the error only means the reading end of stdout went away
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::IoError(meta) if meta.error.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub struct IoErrorWithMeta {
    error: std::io::Error,
    meta: String,
}

impl IoErrorWithMeta {
    pub fn new(error: std::io::Error, meta: &str) -> Self {
        Self {
            error,
            meta: meta.to_owned(),
        }
    }
}

impl std::fmt::Debug for IoErrorWithMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.error, self.meta)
    }
}

impl std::fmt::Display for IoErrorWithMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.error, self.meta)
    }
}
