//! Sheet, a streaming table editor
//!
//! Rows are read from stdin one at a time, edited by a list of functions given as arguments and
//! written to stdout.
//!
//! ### Binary usage
//!
//! ```bash
//! # Print help
//! sheet --help
//!
//! # Columns separated by ':' or '|', output uses ':'
//! sheet -d ':|' icol 1 acol < table.txt
//!
//! # Uppercase the second column of rows 2 to the end
//! sheet -d , rows 2 - toupper 2 < table.csv
//!
//! # Set the first column of rows whose third column contains "x"
//! sheet -d , contains 3 x cset 1 found < table.csv
//! ```
//!
//! ### Library usage
//!
//! ```
//! use sheet::{Config, Delimiters, Processor};
//!
//! let mut processor =
//!     Processor::from_args(&["swap", "1", "3"], Delimiters::from_str(",").unwrap(), Config::default())
//!         .unwrap();
//! let mut output = vec![];
//! processor.run("x,y,z\n".as_bytes(), &mut output).unwrap();
//! assert_eq!(output, b"z,y,x\n");
//! ```


#[cfg(feature = "cli")]
pub(crate) mod cli;

pub(crate) mod column;
pub(crate) mod command;
pub(crate) mod data;
pub(crate) mod error;
pub(crate) mod models;
pub(crate) mod processor;
pub(crate) mod row;
pub(crate) mod selection;
pub(crate) mod table;
pub(crate) mod utils;
pub(crate) mod value;

// ----------
// RE-EXPORTS

#[cfg(feature = "cli")]
pub use cli::main_loop::start_main_loop;
pub use column::{get_column_value, set_column_value, Layout};
pub use command::{compile, output_columns, Command, DataEdit, Function, FunctionType, TableEdit};
pub use error::{SheetError, SheetResult};
pub use models::{Config, Delimiters, TableContext};
pub use processor::{Processor, RowOutcome, RowState};
pub use row::Row;
pub use selection::{RowBound, Selection};
pub use utils::RowReader;
