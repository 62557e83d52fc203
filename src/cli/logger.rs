use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter, e.g. `debug` or `sheet=info`
pub const LOG_ENV: &str = "SHEET_LOG";

/// Install env_logger on stderr, silent unless SHEET_LOG is set
pub fn init() {
    // A logger installed by an embedding program wins
    let _ = Builder::from_env(Env::new().filter_or(LOG_ENV, "off"))
        .target(Target::Stderr)
        .try_init();
}
