use crate::error::SheetResult;
use crate::utils;

const HELP_TEXT: &str = include_str!("../help/usage.txt");

pub fn print_help_text() -> SheetResult<()> {
    utils::write_to_stdout(HELP_TEXT)
}

pub fn print_version() -> SheetResult<()> {
    utils::write_to_stdout(&format!("sheet, {}\n", env!("CARGO_PKG_VERSION")))
}
