//! Configuration vault – reads/writes `~/.fusemark/config.toml`.

use fusemark_types::FuseMarkError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted demo configuration stored in `~/.fusemark/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Frame rate of the demo loop (ticks per second).
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,

    /// Named tracking scenario replayed by the demo
    /// (`"two-card"` or `"solo"`).
    #[serde(default = "default_scenario")]
    pub scenario: String,

    /// Display label for anchor A, used in status lines.
    #[serde(default = "default_label_a")]
    pub label_a: String,

    /// Display label for anchor B.
    #[serde(default = "default_label_b")]
    pub label_b: String,
}

fn default_tick_hz() -> u32 {
    30
}
fn default_scenario() -> String {
    "two-card".to_string()
}
fn default_label_a() -> String {
    "Anchor A".to_string()
}
fn default_label_b() -> String {
    "Anchor B".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: default_tick_hz(),
            scenario: default_scenario(),
            label_a: default_label_a(),
            label_b: default_label_b(),
        }
    }
}

/// Return the path to `~/.fusemark/config.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

/// Build the config path relative to the given home directory.
/// Extracted for testability without mutating environment variables.
pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".fusemark").join("config.toml")
}

/// Load the config from disk.  Returns `None` if the file does not exist.
pub fn load() -> Result<Option<Config>, FuseMarkError> {
    load_from(&config_path())
}

/// Load the config from a specific path.
pub(crate) fn load_from(path: &PathBuf) -> Result<Option<Config>, FuseMarkError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|e| {
        FuseMarkError::Config(format!("failed to read config at {}: {}", path.display(), e))
    })?;
    let mut cfg: Config = toml::from_str(&raw)
        .map_err(|e| FuseMarkError::Config(format!("failed to parse config: {}", e)))?;
    apply_env_overrides(&mut cfg);
    Ok(Some(cfg))
}

/// Apply `FUSEMARK_*` environment variable overrides to `cfg`.
///
/// Supported variables:
///
/// | Variable | Config field |
/// |---|---|
/// | `FUSEMARK_TICK_HZ` | `tick_hz` |
/// | `FUSEMARK_SCENARIO` | `scenario` |
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("FUSEMARK_TICK_HZ")
        && let Ok(hz) = v.parse::<u32>()
        && hz > 0
    {
        cfg.tick_hz = hz;
    }
    if let Ok(v) = std::env::var("FUSEMARK_SCENARIO") {
        cfg.scenario = v;
    }
}

/// Save the config to disk, creating `~/.fusemark/` if necessary.
pub fn save(cfg: &Config) -> Result<(), FuseMarkError> {
    save_to(cfg, &config_path())
}

/// Save the config to a specific path.
pub(crate) fn save_to(cfg: &Config, path: &PathBuf) -> Result<(), FuseMarkError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FuseMarkError::Config(format!("failed to create config directory: {}", e))
        })?;
    }
    let raw = toml::to_string_pretty(cfg)
        .map_err(|e| FuseMarkError::Config(format!("failed to serialize config: {}", e)))?;
    fs::write(path, raw).map_err(|e| {
        FuseMarkError::Config(format!("failed to write config at {}: {}", path.display(), e))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that read or write `FUSEMARK_*` env vars, which are
    /// process-global while the test harness runs threads in parallel.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn roundtrip_default_config() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());

        let cfg = Config::default();
        save_to(&cfg, &path).expect("save");

        let loaded = load_from(&path).expect("load ok").expect("some");
        assert_eq!(loaded.tick_hz, 30);
        assert_eq!(loaded.scenario, "two-card");
        assert_eq!(loaded.label_a, "Anchor A");
        assert_eq!(loaded.label_b, "Anchor B");
    }

    #[test]
    fn config_path_points_to_fusemark_dir() {
        let p = config_path_for_home("/home/testuser");
        assert!(p.to_string_lossy().contains(".fusemark"));
        assert!(p.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn load_from_returns_none_when_missing() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());
        let result = load_from(&path).expect("no error");
        assert!(result.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "tick_hz = 60\n").unwrap();

        let loaded = load_from(&path).expect("load ok").expect("some");
        assert_eq!(loaded.tick_hz, 60);
        assert_eq!(loaded.scenario, "two-card");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "tick_hz = \"fast\"\n").unwrap();

        let result = load_from(&path);
        assert!(matches!(result, Err(FuseMarkError::Config(_))));
    }

    #[test]
    fn apply_env_overrides_tick_hz_accepts_valid_rejects_junk() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: env mutation is serialized by ENV_LOCK.
        unsafe { std::env::set_var("FUSEMARK_TICK_HZ", "120") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.tick_hz, 120);

        unsafe { std::env::set_var("FUSEMARK_TICK_HZ", "not-a-rate") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.tick_hz, 30);

        unsafe { std::env::set_var("FUSEMARK_TICK_HZ", "0") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.tick_hz, 30);

        unsafe { std::env::remove_var("FUSEMARK_TICK_HZ") };
    }

    #[test]
    fn apply_env_overrides_changes_scenario() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: env mutation is serialized by ENV_LOCK.
        unsafe { std::env::set_var("FUSEMARK_SCENARIO", "solo") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.scenario, "solo");
        unsafe { std::env::remove_var("FUSEMARK_SCENARIO") };
    }
}
