// Application state module

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;

/// Shared server state, fixed for the lifetime of the run.
pub struct AppState {
    pub config: Config,
    /// Canonicalized serving root; all resolved paths must stay under it.
    pub root: PathBuf,
    /// Signalled by the signal handler (or tests) to stop the accept loop.
    pub shutdown: Arc<Notify>,
}

impl AppState {
    /// Validate the configured root directory and build the state.
    ///
    /// Fails if the root does not exist, is not readable, or is not a
    /// directory. This is a startup error, checked before serving begins.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = PathBuf::from(&config.server.root)
            .canonicalize()
            .map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("Root directory '{}' is not accessible: {e}", config.server.root),
                )
            })?;

        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Root path '{}' is not a directory", root.display()),
            ));
        }

        Ok(Self {
            config,
            root,
            shutdown: Arc::new(Notify::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(root: &str) -> Config {
        let mut cfg = Config::load_from("/nonexistent/staticd-test-config").unwrap();
        cfg.server.root = root.to_string();
        cfg
    }

    #[test]
    fn accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(base_config(dir.path().to_str().unwrap())).unwrap();
        assert!(state.root.is_dir());
    }

    #[test]
    fn rejects_missing_root() {
        assert!(AppState::new(base_config("/nonexistent/staticd-root")).is_err());
    }

    #[test]
    fn rejects_file_as_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"not a directory").unwrap();
        assert!(AppState::new(base_config(file.to_str().unwrap())).is_err());
    }
}
