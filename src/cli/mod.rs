pub mod help;
pub mod logger;
pub mod main_loop;
pub mod parse;
