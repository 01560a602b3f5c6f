//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/termstack/config.json`.
//! It is split into a `"connection"` section shared by both utilities and an
//! `"arrange"` section read only by `stack-windows`.
//!
//! # Example
//!
//! ```json
//! {
//!   "connection": {
//!     "socket_path": "/run/user/1000/termstack/host.sock",
//!     "wait_for_app": true,
//!     "retry_interval_ms": 500
//!   },
//!   "arrange": {
//!     "grid": { "columns": 80, "rows": 24 },
//!     "gap": 1,
//!     "probe_offset": 99999,
//!     "third_column": { "x_factor": 0.8, "y_factor": 0.5 },
//!     "screen": { "max_x": 1920, "max_y": 1080 }
//!   }
//! }
//! ```

use crate::arranger::{ArrangeOptions, OffsetColumn};
use crate::host::socket::ConnectPolicy;
use crate::layout::DEFAULT_GAP;
use crate::model::GridSize;
use crate::probe::{ScreenBounds, DEFAULT_PROBE_OFFSET};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the socket path.
pub const SOCKET_ENV: &str = "TERMSTACK_SOCKET";

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub arrange: ArrangeConfig,
}

/// How to reach the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Control socket of the host.  `None` means the default location.
    pub socket_path: Option<PathBuf>,
    /// Retry until the host is running.  `None` lets each utility pick:
    /// `set-color-preset` waits, `stack-windows` does not.
    pub wait_for_app: Option<bool>,
    /// Delay between connection attempts while waiting (ms).
    pub retry_interval_ms: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            wait_for_app: None,
            retry_interval_ms: 500,
        }
    }
}

impl ConnectionConfig {
    /// Connection policy, falling back to `wait_by_default` when the file
    /// does not say.
    pub fn policy(&self, wait_by_default: bool) -> ConnectPolicy {
        ConnectPolicy {
            wait_for_app: self.wait_for_app.unwrap_or(wait_by_default),
            retry_interval: Duration::from_millis(self.retry_interval_ms),
        }
    }

    /// Resolve the socket path: `$TERMSTACK_SOCKET`, then the config file,
    /// then `$XDG_RUNTIME_DIR/termstack/host.sock`.
    pub fn socket_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var(SOCKET_ENV) {
            return PathBuf::from(path);
        }
        self.socket_path.clone().unwrap_or_else(default_socket_path)
    }
}

/// Default socket path for the host control socket.
fn default_socket_path() -> PathBuf {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(runtime).join("termstack").join("host.sock")
}

/// Window arrangement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangeConfig {
    /// Character grid every session is pinned to before stacking.
    pub grid: GridSize,
    /// Space between stacked windows.
    pub gap: i32,
    /// How far off screen the probe window is pushed.
    /// Must be positive.
    pub probe_offset: u32,
    pub third_column: OffsetColumn,
    /// Known screen bounds.  When set, the off-screen probe is skipped.
    pub screen: Option<ScreenBounds>,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            gap: DEFAULT_GAP,
            probe_offset: DEFAULT_PROBE_OFFSET,
            third_column: OffsetColumn::default(),
            screen: None,
        }
    }
}

impl ArrangeConfig {
    pub fn options(&self) -> ArrangeOptions {
        ArrangeOptions {
            grid: self.grid,
            gap: self.gap,
            offset_column: self.third_column,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arrange.probe_offset == 0 {
            return Err(ConfigError(
                "arrange.probe_offset must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// `$XDG_CONFIG_HOME/termstack/config.json`, with `~/.config` as the
    /// fallback base.
    pub fn default_path() -> PathBuf {
        let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
            format!("{}/.config", home)
        });
        PathBuf::from(base).join("termstack").join("config.json")
    }

    /// Try [`default_path`](Config::default_path), falling back to
    /// compiled-in defaults.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(cfg) => {
                info!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                info!("config not loaded ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
