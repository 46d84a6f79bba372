// Debug logging for duopong
// Routes tracing output to a file when enabled via --debug, since the
// terminal itself belongs to the TUI

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("duopong-debug.log")
}

/// Install the file subscriber
///
/// # Behavior
/// - If enabled=false: returns immediately, tracing events go nowhere
/// - If enabled=true: creates/truncates the log file and sends every event
///   at debug level and above to it
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();

    tracing::info!("debug log started, to monitor: tail -f {}", path.display());
    Ok(())
}
