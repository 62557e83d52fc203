#[cfg(feature = "cli")]
pub fn main() {
    if let Err(err) = sheet::start_main_loop() {
        eprintln!("sheet: {}", err);
        std::process::exit(1);
    }
}

// Placeholder for binary
#[cfg(not(feature = "cli"))]
pub fn main() {}
