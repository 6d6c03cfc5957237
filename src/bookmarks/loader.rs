//! Dataset loading from an injected document or a JSON file.
//!
//! Loading happens once at startup on a background thread so the UI is
//! interactive before the data arrives.

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use thiserror::Error;

use super::Dataset;

/// Environment variable holding a pre-injected JSON dataset
pub const INJECTED_DATA_ENV: &str = "NAVDECK_DATA";

/// Data file used when neither the command line nor the config names one
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// The single user-visible status shown when no data could be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Unable to read data. Please re-import your bookmarks.";

/// Why the dataset could not be loaded.
///
/// The UI collapses every variant into [`LOAD_FAILED_MESSAGE`]; the detail
/// only goes to the log.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse injected data from NAVDECK_DATA: {0}")]
    Injected(#[source] serde_json::Error),
    #[error("dataset loader exited without a result")]
    Disconnected,
}

impl LoadError {
    /// Message to show in place of the stats line
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

/// Where the dataset comes from
#[derive(Debug, Clone)]
pub enum DataSource {
    /// An already-parsed dataset handed in by the caller
    Preloaded(Dataset),
    /// A JSON document injected through [`INJECTED_DATA_ENV`]
    Injected(String),
    /// A JSON file on disk
    File(PathBuf),
}

impl DataSource {
    /// Pick a source: injected data wins, then the command-line path, then
    /// the configured path, then `./data.json`.
    pub fn resolve(
        injected: Option<String>,
        cli_path: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Self {
        if let Some(json) = injected.filter(|j| !j.trim().is_empty()) {
            return DataSource::Injected(json);
        }
        let path = cli_path
            .or(config_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        DataSource::File(path)
    }

    /// Resolve using [`INJECTED_DATA_ENV`] from the process environment
    pub fn from_env(cli_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Self {
        Self::resolve(std::env::var(INJECTED_DATA_ENV).ok(), cli_path, config_path)
    }

    /// Load and parse the dataset, blocking the calling thread
    pub fn load(&self) -> Result<Dataset, LoadError> {
        match self {
            DataSource::Preloaded(data) => Ok(data.clone()),
            DataSource::Injected(json) => serde_json::from_str(json).map_err(LoadError::Injected),
            DataSource::File(path) => {
                let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
                    path: path.clone(),
                    source,
                })
            }
        }
    }

    /// Load on a background thread; the result arrives on the returned channel
    pub fn spawn_load(self) -> Receiver<Result<Dataset, LoadError>> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            tracing::info!(source = %self, "loading dataset");
            let result = self.load();
            // Receiver may be gone if the user quit before the load finished
            let _ = tx.send(result);
        });
        rx
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Preloaded(_) => write!(f, "preloaded dataset"),
            DataSource::Injected(_) => write!(f, "${INJECTED_DATA_ENV}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn injected_data_takes_precedence() {
        let source = DataSource::resolve(
            Some(r#"{"groups":[]}"#.to_string()),
            Some(PathBuf::from("cli.json")),
            None,
        );
        assert!(matches!(source, DataSource::Injected(_)));
    }

    #[test]
    fn cli_path_beats_config_path_and_default() {
        let source = DataSource::resolve(
            None,
            Some(PathBuf::from("cli.json")),
            Some(PathBuf::from("config.json")),
        );
        assert!(matches!(source, DataSource::File(ref p) if p == &PathBuf::from("cli.json")));

        let source = DataSource::resolve(None, None, Some(PathBuf::from("config.json")));
        assert!(matches!(source, DataSource::File(ref p) if p == &PathBuf::from("config.json")));

        let source = DataSource::resolve(Some("   ".to_string()), None, None);
        assert!(matches!(source, DataSource::File(ref p) if p == &PathBuf::from(DEFAULT_DATA_FILE)));
    }

    #[test]
    fn loads_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title":"Mine","groups":[{{"name":"A","links":[{{"url":"https://a.dev"}}]}}]}}"#
        )
        .unwrap();

        let data = DataSource::File(file.path().to_path_buf()).load().unwrap();
        assert_eq!(data.display_title(), "Mine");
        assert_eq!(data.link_count(), 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataSource::File(dir.path().join("absent.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn malformed_json_is_a_parse_error_with_the_same_message() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = DataSource::File(file.path().to_path_buf()).load().unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);

        let err = DataSource::Injected("[".to_string()).load().unwrap_err();
        assert!(matches!(err, LoadError::Injected(_)));
    }

    #[test]
    fn spawn_load_delivers_result_over_channel() {
        let rx = DataSource::Preloaded(Dataset::default()).spawn_load();
        let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.unwrap(), Dataset::default());
    }
}
