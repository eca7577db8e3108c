use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    pub lang: Option<String>,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Settings {
    pub fn new(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load(get_user_config_path().as_deref(), Path::new("potato.toml"), explicit)
    }

    /// Layers defaults, the user file, the local file, an explicit file and
    /// `POTATO_*` variables, later sources winning.
    pub fn load(user: Option<&Path>, local: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(user, local, explicit, Environment::with_prefix("POTATO"))
    }

    pub fn load_with_env(
        user: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 1. Defaults.
            .set_default("log_level", "info")?;

        // 2. User config. Optional.
        if let Some(user) = user {
            builder = builder.add_source(File::from(user).required(false));
        }

        // 3. potato.toml in the working directory. Optional.
        builder = builder.add_source(File::from(local).required(false));

        // 4. --config. Required when given.
        if let Some(explicit) = explicit {
            builder = builder.add_source(File::from(explicit).required(true));
        }

        // 5. Environment.
        let s = builder.add_source(env).build()?;

        s.try_deserialize()
    }

    /// Log file with `~` expanded, falling back to the cache directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        match &self.log_file {
            Some(path) => Some(PathBuf::from(shellexpand::tilde(path).into_owned())),
            None => dirs::cache_dir().map(|mut dir| {
                dir.push("potato");
                dir.push("potato.log");
                dir
            }),
        }
    }
}

pub fn get_user_config_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".config");
    path.push("potato");
    path.push("potato.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_files() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(None, &tmp.path().join("potato.toml"), None).unwrap();
        assert_eq!(settings.log_level, "info");
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn local_file_overrides_user_file() {
        let tmp = TempDir::new().unwrap();
        let user = tmp.path().join("user.toml");
        let local = tmp.path().join("potato.toml");
        fs::write(&user, "lang = \"de-DE\"\nlog_level = \"warn\"\n").unwrap();
        fs::write(&local, "log_level = \"debug\"\n").unwrap();

        let settings = Settings::load(Some(&user), &local, None).unwrap();
        assert_eq!(settings.lang.as_deref(), Some("de-DE"));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn env_overrides_files() {
        let tmp = TempDir::new().unwrap();
        let local = tmp.path().join("potato.toml");
        fs::write(&local, "lang = \"de-DE\"\nlog_level = \"warn\"\n").unwrap();

        let mut vars = ::config::Map::new();
        vars.insert("POTATO_LOG_LEVEL".to_string(), "trace".to_string());
        let env = Environment::with_prefix("POTATO").source(Some(vars));

        let settings = Settings::load_with_env(None, &local, None, env).unwrap();
        assert_eq!(settings.log_level, "trace");
        assert_eq!(settings.lang.as_deref(), Some("de-DE"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(Settings::load(None, &tmp.path().join("potato.toml"), Some(&missing)).is_err());
    }

    #[test]
    fn log_path_expands_tilde() {
        let settings = Settings {
            lang: None,
            log_level: "info".into(),
            log_file: Some("~/potato.log".into()),
        };
        let path = settings.log_path().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("potato.log"));
    }
}
