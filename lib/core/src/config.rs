use std::path::PathBuf;

/// Common service configuration.
///
/// The server binary fills this from command-line arguments and the optional
/// TOML config file, then hands it to storage initialization.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the database file. Created if missing.
    pub data_dir: Option<PathBuf>,

    /// Path to the SQLite database file.
    /// Defaults to `{data_dir}/school.sqlite` if not specified.
    pub db_path: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            db_path: None,
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the SQLite database path.
    pub fn resolve_db_path(&self) -> PathBuf {
        if let Some(ref p) = self.db_path {
            return p.clone();
        }
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("school.sqlite")
    }
}
