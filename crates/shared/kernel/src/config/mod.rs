use crate::domain::constants::ENV_PREFIX;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[vacc_derive::vacc_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with environment overrides.
///
/// 1. **Base File**: settings from `path` (any format the `config` crate detects by
///    extension, e.g. `server.toml`). Defaults to `"server"` in the working directory.
///    The file is optional: a deployment may configure everything from the environment.
/// 2. **Environment Overrides**: variables prefixed with `VACC__`, nested with double
///    underscores (`VACC__CONTENT__API_KEY` maps to `content.api_key`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when a source is malformed or the merged values do
/// not deserialize into `T`.
///
/// # Example
/// ```rust
/// use vacc_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ApiConfig;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg: ApiConfig = load_config(Some("does/not/exist/server")).expect("defaults");
        assert_eq!(cfg.server.port, 4583);
    }

    #[test]
    fn reads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("server.toml");
        let mut file = std::fs::File::create(&path)?;
        writeln!(
            file,
            "[server]\nport = 9090\n\n[content]\nbase_url = \"https://content.test\"\ntimeout_seconds = 3"
        )?;

        let cfg: ApiConfig = load_config(Some(&path))?;
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.content.base_url, "https://content.test");
        assert_eq!(cfg.content.timeout_seconds, Some(3));
        Ok(())
    }

    #[test]
    fn malformed_file_is_reported_with_context() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[server]\nport = \"not a port\"")?;

        let err = load_config::<ApiConfig>(Some(&path)).expect_err("should fail");
        assert_eq!(err.kind(), "Config");
        assert!(err.to_string().contains("Failed to deserialize config"));
        Ok(())
    }
}
