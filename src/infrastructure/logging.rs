use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Routes tracing output to `log_path`, keeping the terminal free for the UI.
///
/// `RUST_LOG` overrides the default `info` filter. Fails if the log file
/// cannot be opened or a global subscriber is already installed.
pub fn init_tracing(log_path: &Path) -> io::Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // The only test in the crate that installs a global subscriber.
    #[test]
    fn test_second_install_is_reported() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("logs").join("recstore.log");

        init_tracing(&log_path).unwrap();
        assert!(log_path.is_file());

        let err = init_tracing(&log_path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
