use std::env;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "profile.txt";

/// Locations resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub settings_path: PathBuf,
    pub log_path: PathBuf,
    /// Where the picker starts browsing.
    pub initial_dir: PathBuf,
    pub suggested_name: String,
}

impl Config {
    /// Resolution order for the data directory:
    ///
    /// 1. `$RECSTORE_HOME`
    /// 2. Platform data directory + `recstore`
    /// 3. `./.recstore`
    pub fn resolve() -> Self {
        let data_dir = env::var("RECSTORE_HOME")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|dir| dir.join("recstore")))
            .unwrap_or_else(|| PathBuf::from(".recstore"));
        let initial_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_dirs(data_dir, initial_dir)
    }

    pub fn with_dirs(data_dir: PathBuf, initial_dir: PathBuf) -> Self {
        Self {
            settings_path: data_dir.join("settings.json"),
            log_path: data_dir.join("recstore.log"),
            data_dir,
            initial_dir,
            suggested_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_under_data_dir() {
        let config = Config::with_dirs(PathBuf::from("/var/lib/rs"), PathBuf::from("/media"));
        assert_eq!(config.settings_path, PathBuf::from("/var/lib/rs/settings.json"));
        assert_eq!(config.log_path, PathBuf::from("/var/lib/rs/recstore.log"));
        assert_eq!(config.initial_dir, PathBuf::from("/media"));
        assert_eq!(config.suggested_name, "profile.txt");
    }
}
