use std::io::BufWriter;

use crate::cli::help;
use crate::cli::logger;
use crate::cli::parse::{FlagType, Parser};
use crate::error::{SheetError, SheetResult};
use crate::models::{Config, Delimiters};
use crate::processor::Processor;

/// Run sheet with process arguments, stdin and stdout
pub fn start_main_loop() -> SheetResult<()> {
    logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut parser = Parser::new();
    let flags = parser.parse_from_vec(&args);

    let mut delimiters = Delimiters::default();
    for item in flags.iter() {
        match item.ftype {
            FlagType::Version => return help::print_version(),
            FlagType::Help => return help::print_help_text(),
            FlagType::Delimiter => {
                if item.option.is_empty() {
                    return Err(SheetError::CliError(
                        "Flag \"-d\" requires a set of delimiters".to_string(),
                    ));
                }
                delimiters = Delimiters::from_str(&item.option)?;
            }
            FlagType::None => (),
        }
    }

    let config = Config::from_env();
    log::debug!("Delimiters {:?}, {:?}", delimiters, config);
    let mut processor = Processor::from_args(&args[parser.start_index()..], delimiters, config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match processor.run(stdin.lock(), BufWriter::new(stdout.lock())) {
        // Reader of the output went away, nothing left to report
        Err(err) if err.is_broken_pipe() => Ok(()),
        result => result,
    }
}
