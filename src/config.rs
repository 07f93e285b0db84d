//! Runtime settings, read from `folio.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationConfig,
    pub chrome: ChromeConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Multiplier applied to every animation clock: timelines, the cursor
    /// follower and smooth scrolling.
    pub time_scale: f32,
    /// Skip animations and show their end state.
    pub reduced_motion: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Scroll offset past which the nav bar switches to its compact style.
    pub nav_scroll_threshold: f32,
    /// Space left above an anchor target for the fixed header.
    pub anchor_offset: f32,
    pub smooth_scroll_secs: f32,
    /// Touch-style pointer: no cursor follower.
    pub coarse_pointer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            reduced_motion: false,
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold: 50.0,
            anchor_offset: 80.0,
            smooth_scroll_secs: 0.6,
            coarse_pointer: false,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(self.animation.time_scale > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "animation.time_scale must be > 0, got {}",
                self.animation.time_scale
            )));
        }
        if !(self.chrome.nav_scroll_threshold >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "chrome.nav_scroll_threshold must be >= 0, got {}",
                self.chrome.nav_scroll_threshold
            )));
        }
        if !(self.chrome.anchor_offset >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "chrome.anchor_offset must be >= 0, got {}",
                self.chrome.anchor_offset
            )));
        }
        if !(self.chrome.smooth_scroll_secs >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "chrome.smooth_scroll_secs must be >= 0, got {}",
                self.chrome.smooth_scroll_secs
            )));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.animation.reduced_motion && self.animation.time_scale != 1.0 {
            warn!(
                time_scale = self.animation.time_scale,
                "reduced_motion is set, time_scale has no visible effect"
            );
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// `folio.toml` in the working directory, or defaults when it is absent.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
