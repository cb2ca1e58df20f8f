// Conditional logging macros - only active in debug builds

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Initialise `env_logger`, honouring `RUST_LOG` (default `info`).
///
/// Output goes to `log_path` so the full-screen interface is left alone. If
/// the file cannot be opened, records go to stderr, or nowhere when
/// `stderr_fallback` is false (the terminal belongs to the TUI).
pub fn init_logging(log_path: &Path, stderr_fallback: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match open_log_file(log_path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) if stderr_fallback => {
            eprintln!("Could not open log file '{}': {e}", log_path.display());
        }
        Err(e) => {
            eprintln!(
                "Could not open log file '{}': {e}; logging disabled",
                log_path.display()
            );
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    // A second call (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

/// Open `log_path` for appending, creating its directory first.
fn open_log_file(log_path: &Path) -> io::Result<File> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(log_path)
}
