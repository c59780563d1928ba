//! Configuration surface consumed by the engine.
//!
//! Loaded from TOML with fall-back-to-defaults on any read or parse
//! error; a broken config file must never keep the server from starting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::warn;

use relictools_core::ToolKind;

/// Default on-disk location.
pub const DEFAULT_CONFIG_PATH: &str = "config/tools.toml";

/// Per-kind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KindEntry {
    pub enabled: bool,
    /// Display name; empty means "use the built-in name".
    pub name: String,
    /// Description template lines. `{time}`, `{uuid}` and `{amount}` are
    /// substituted when the item text is rendered.
    pub lore: Vec<String>,
}

impl Default for KindEntry {
    fn default() -> Self {
        Self {
            enabled: true,
            name: String::new(),
            lore: vec![
                "Self Destruct: {time}".to_string(),
                "UUID: {uuid}".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketSettings {
    /// How many water blocks one use clears.
    pub drain_amount: u32,
}

impl Default for BucketSettings {
    fn default() -> Self {
        Self { drain_amount: 27 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TorchSettings {
    pub cooldown_secs: u64,
}

impl Default for TorchSettings {
    fn default() -> Self {
        Self { cooldown_secs: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketSettings {
    pub cooldown_secs: u64,
}

impl Default for RocketSettings {
    fn default() -> Self {
        Self { cooldown_secs: 2 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PickaxeSettings {
    /// Block names the excavation pickaxe refuses to mine.
    pub excluded_blocks: Vec<String>,
}

/// Root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Tool lifetime in days.
    pub lifetime_days: u64,
    /// Extra per-use logging.
    pub debug: bool,
    /// Per-kind entries keyed by config key (`tree-chopper`, ...).
    pub tools: BTreeMap<String, KindEntry>,
    pub bucket: BucketSettings,
    pub torch: TorchSettings,
    pub rocket: RocketSettings,
    pub pickaxe: PickaxeSettings,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let mut tools = BTreeMap::new();
        for kind in relictools_core::ALL_KINDS {
            tools.insert(kind.config_key().to_string(), KindEntry::default());
        }
        Self {
            lifetime_days: 7,
            debug: false,
            tools,
            bucket: BucketSettings::default(),
            torch: TorchSettings::default(),
            rocket: RocketSettings::default(),
            pickaxe: PickaxeSettings::default(),
        }
    }
}

impl ToolsConfig {
    /// Load from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ToolsConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    ToolsConfig::default()
                }
            },
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                ToolsConfig::default()
            }
        }
    }

    /// Settings for a kind; defaults when the entry is missing.
    pub fn entry(&self, kind: ToolKind) -> KindEntry {
        self.tools
            .get(kind.config_key())
            .cloned()
            .unwrap_or_default()
    }

    /// Whether a kind may be issued.
    pub fn is_enabled(&self, kind: ToolKind) -> bool {
        self.entry(kind).enabled
    }

    /// Display name for a kind, honoring configuration overrides.
    pub fn display_name(&self, kind: ToolKind) -> String {
        let entry = self.entry(kind);
        if entry.name.is_empty() {
            kind.display_name().to_string()
        } else {
            entry.name
        }
    }

    /// Configured lifetime in milliseconds.
    pub fn lifetime_ms(&self) -> u64 {
        self.lifetime_days * 24 * 60 * 60 * 1_000
    }
}

/// Shared, reloadable configuration handle.
///
/// Interaction handlers read concurrently; `reload_configuration`
/// replaces the whole document at once.
#[derive(Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<ToolsConfig>>,
}

impl ConfigHandle {
    pub fn new(config: ToolsConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Snapshot the current configuration.
    pub fn get(&self) -> ToolsConfig {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Swap in a new configuration.
    pub fn replace(&self, config: ToolsConfig) {
        *self.inner.write().expect("config lock poisoned") = config;
    }
}
