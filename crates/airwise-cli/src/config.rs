use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use airwise_core::models::location::Location;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirwiseConfig {
    /// Schema version. Missing means [`CURRENT_VERSION`].
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Used by `assess` when no `--location` is given.
    pub default_location: Location,
    /// 0 is treated as [`DEFAULT_HTTP_TIMEOUT_SECS`].
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    /// How long a fetched reading is reused for the same coordinates.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    pub created_at: jiff::Timestamp,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

impl AirwiseConfig {
    pub fn new(default_location: Location) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_location,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Timeout for each Open-Meteo request. A zero timeout would fail every
    /// fetch, so it falls back to the default.
    pub fn http_timeout(&self) -> Duration {
        if self.http_timeout_secs == 0 {
            tracing::warn!(
                default = DEFAULT_HTTP_TIMEOUT_SECS,
                "http_timeout_secs is 0, using default"
            );
            return Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS);
        }
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("airwise"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<AirwiseConfig> {
    load_config_from(&config_path()?)
}

/// Load the saved config, or fall back to defaults centred on London when
/// none has been written yet.
pub fn load_or_default() -> eyre::Result<AirwiseConfig> {
    if has_config() {
        load_config()
    } else {
        tracing::debug!("no config file, using defaults");
        Ok(AirwiseConfig::new(Location::default()))
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<AirwiseConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(u64::from(CURRENT_VERSION)) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AirwiseConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value. v1 is the first
/// shipped shape, so there is nothing to transform yet.
pub fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update airwise."
        ));
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &AirwiseConfig) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

/// Write `config.json` into `dir`, creating it if needed. Returns the path
/// written.
pub fn save_config_in(dir: &Path, config: &AirwiseConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
