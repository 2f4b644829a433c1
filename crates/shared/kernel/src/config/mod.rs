use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file stem, resolved against any supported extension (`otsav.toml`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "otsav";
/// Prefix of environment overrides, e.g. `OTSAV__REGISTRATION__SUBMIT_DELAY_MS=10`.
pub const ENV_PREFIX: &str = "OTSAV";

#[otsav_derive::otsav_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a file source, then `OTSAV__*` environment overrides.
///
/// * With `Some(path)` the file must exist.
/// * With `None` the `otsav.*` file in the working directory is used if present; otherwise
///   the result is built from `T`'s serde defaults plus the environment.
///
/// Nested keys use double underscores: `OTSAV__SITE__ORIGIN` maps to `site.origin`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use otsav_kernel::config::load_config;
/// use otsav_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.registration.submit_delay_ms > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
