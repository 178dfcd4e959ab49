//! Runtime configuration.
//!
//! Built-in defaults, optionally overlaid by a JSON file. Every field is
//! optional in the file; anything left out keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::*;
use crate::content::{
    default_banner, default_boot_steps, default_content_store, default_message_pool,
    default_short_snippets, BootStep, ContentStore, MessagePool,
};
use crate::error::{BootError, Result};
use crate::progress_bar::BarSettings;

const CONFIG_FILE_NAME: &str = "config.json";

/// Order in which boot steps are consumed by the step phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOrder {
    Sequential,
    Shuffled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSettings {
    pub enabled: bool,
    pub order: StepOrder,
    /// Steps are grouped into random batches of 1..=batch_max.
    pub batch_max: usize,
}

impl Default for StepSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            order: StepOrder::Sequential,
            batch_max: STEP_BATCH_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub max_lines: usize,
    pub prefill_lines: usize,
    pub boot_stream_ms: u64,
    pub panel_stream_ms: u64,
    pub batch_min: usize,
    pub batch_max: usize,
    pub interval_min_ms: u64,
    pub interval_max_ms: u64,
    pub short_chance: f64,
    pub intro_pause_ms: u64,
    pub finalize_pauses_ms: [u64; 3],
    pub unlock_delay_ms: u64,
    pub panel_reveal_delay_ms: u64,
    pub steps: StepSettings,
    pub bar: BarSettings,
    pub banner: Vec<String>,
    pub boot_steps: Vec<BootStep>,
    pub pools: MessagePool,
    pub short_snippets: Vec<String>,
    pub content: ContentStore,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_lines: MAX_LOG_LINES,
            prefill_lines: PREFILL_LINES,
            boot_stream_ms: BOOT_STREAM_MS,
            panel_stream_ms: PANEL_STREAM_MS,
            batch_min: BATCH_MIN,
            batch_max: BATCH_MAX,
            interval_min_ms: INTERVAL_MIN_MS,
            interval_max_ms: INTERVAL_MAX_MS,
            short_chance: SHORT_SNIPPET_CHANCE,
            intro_pause_ms: INTRO_PAUSE_MS,
            finalize_pauses_ms: [
                FINALIZE_FIRST_PAUSE_MS,
                FINALIZE_SECOND_PAUSE_MS,
                FINALIZE_THIRD_PAUSE_MS,
            ],
            unlock_delay_ms: UNLOCK_DELAY_MS,
            panel_reveal_delay_ms: PANEL_REVEAL_DELAY_MS,
            steps: StepSettings::default(),
            bar: BarSettings::default(),
            banner: default_banner(),
            boot_steps: default_boot_steps(),
            pools: default_message_pool(),
            short_snippets: default_short_snippets(),
            content: default_content_store(),
        }
    }
}

impl BootConfig {
    /// Per-user config location, e.g. `~/.config/bootseq/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bootseq").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|source| BootError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| BootError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text, path)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// An explicit path must load. The per-user file is used only if it
    /// exists; otherwise the built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(_) => Ok(Self::default()),
            None => {
                warn!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_lines == 0 {
            return Err(BootError::InvalidConfig("max_lines must be at least 1".into()));
        }
        if self.batch_min == 0 || self.batch_min > self.batch_max {
            return Err(BootError::InvalidConfig(format!(
                "batch range {}..={} is empty or starts at zero",
                self.batch_min, self.batch_max
            )));
        }
        if self.interval_min_ms > self.interval_max_ms {
            return Err(BootError::InvalidConfig(format!(
                "interval range {}..={} is inverted",
                self.interval_min_ms, self.interval_max_ms
            )));
        }
        if self.steps.batch_max == 0 {
            return Err(BootError::InvalidConfig(
                "steps.batch_max must be at least 1".into(),
            ));
        }
        if self.bar.tick_count == 0 {
            return Err(BootError::InvalidConfig(
                "bar.tick_count must be at least 1".into(),
            ));
        }
        for (name, p) in [
            ("short_chance", self.short_chance),
            ("bar.chaos_probability", self.bar.chaos_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(BootError::InvalidConfig(format!(
                    "{name} must be within 0..=1, got {p}"
                )));
            }
        }
        Ok(())
    }

    /// Zeroes every delay and duration. Content is untouched.
    pub fn fast(mut self) -> Self {
        self.boot_stream_ms = 0;
        self.panel_stream_ms = 0;
        self.interval_min_ms = 0;
        self.interval_max_ms = 0;
        self.intro_pause_ms = 0;
        self.finalize_pauses_ms = [0; 3];
        self.unlock_delay_ms = 0;
        self.panel_reveal_delay_ms = 0;
        for step in &mut self.boot_steps {
            step.duration_hint_ms = 0;
        }
        self
    }
}
