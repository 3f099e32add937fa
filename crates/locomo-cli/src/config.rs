use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use locomo_export::links::DEFAULT_VIDEO_URL;
use locomo_instruments::advice::AdviceCatalog;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides `endpoint_url` when set.
pub const ENDPOINT_ENV: &str = "LOCOMO_ENDPOINT_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocomoConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Remote logging endpoint for result payloads. Unset disables sending.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Explanatory video linked (and QR-encoded) on the report. Added in v1.
    pub video_url: String,
    /// Where reports are written when `--out` is not given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// JSON advice catalog replacing the built-in one.
    #[serde(default)]
    pub advice_catalog: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

impl Default for LocomoConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            endpoint_url: None,
            video_url: DEFAULT_VIDEO_URL.to_string(),
            output_dir: None,
            advice_catalog: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl LocomoConfig {
    /// The endpoint to post results to, honouring [`ENDPOINT_ENV`].
    pub fn endpoint(&self) -> Option<String> {
        resolve_endpoint(
            std::env::var(ENDPOINT_ENV).ok().as_deref(),
            self.endpoint_url.as_deref(),
        )
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn advice(&self) -> eyre::Result<AdviceCatalog> {
        let Some(path) = &self.advice_catalog else {
            return Ok(AdviceCatalog::builtin().clone());
        };
        let json = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read advice catalog at {}: {e}", path.display()))?;
        let catalog = AdviceCatalog::from_json(&json)?;
        tracing::info!(path = %path.display(), "loaded advice catalog");
        Ok(catalog)
    }
}

/// Pick the environment value over the configured one; blank counts as unset.
pub fn resolve_endpoint(env_value: Option<&str>, configured: Option<&str>) -> Option<String> {
    env_value
        .or(configured)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.locomo.check"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the user config, falling back to defaults when none is saved.
pub fn load_config() -> eyre::Result<LocomoConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LocomoConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<LocomoConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(raw_version)
        .map_err(|_| eyre::eyre!("config_version {raw_version} is not a valid version"))?;

    let migrated = migrate(json, on_disk_version)?;
    let config: LocomoConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update locomo."
        ));
    }

    // v0 → v1: add video_url
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("video_url")
            .or_insert(serde_json::Value::String(DEFAULT_VIDEO_URL.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added video_url)");
    }

    Ok(json)
}

pub fn save_config(config: &LocomoConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &LocomoConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The endpoint URL may embed a deployment key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
