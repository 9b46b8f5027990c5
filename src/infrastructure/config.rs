use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{dock::DockConfig, fragment::FragmentScope},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5289/api";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    pub page_size: u32,
    /// Posts revealed per "load more"
    pub display_step: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            display_step: 10,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub page_size: u32,
    pub dedupe: bool,
    pub scope: FragmentScope,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            dedupe: true,
            scope: FragmentScope::Any,
        }
    }
}

/// Docking animation of the hero search bar, distances in terminal rows
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeroConfig {
    pub reference_distance: f64,
    pub dock_fraction: f64,
    pub ease_exponent: f64,
    pub min_scale: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            reference_distance: 12.0,
            ..HeroConfig::from(DockConfig::default())
        }
    }
}

impl From<DockConfig> for HeroConfig {
    fn from(dock: DockConfig) -> Self {
        Self {
            reference_distance: dock.reference_distance,
            dock_fraction: dock.dock_fraction,
            ease_exponent: dock.ease_exponent,
            min_scale: dock.min_scale,
        }
    }
}

impl From<&HeroConfig> for DockConfig {
    fn from(hero: &HeroConfig) -> Self {
        Self {
            reference_distance: hero.reference_distance,
            dock_fraction: hero.dock_fraction,
            ease_exponent: hero.ease_exponent,
            min_scale: hero.min_scale,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Rows from the bottom at which the next page is requested
    pub load_more_threshold: u16,
    /// Rows per mouse wheel notch
    pub scroll_step: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            load_more_threshold: 10,
            scroll_step: 3,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Built-in configuration only
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Built-in defaults overlaid with the user's config file, if any
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using built-in defaults",
                config_dir.display()
            );
            return Ok(Self {
                config: AppConfig {
                    _data_dir: data_dir,
                    _config_dir: config_dir,
                },
                ..default_config
            });
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// Merge default keybindings and styles into user config (flat mapping)
    fn merge_defaults(&mut self, default_config: &Config) {
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }

    /// Apply command line overrides
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        self
    }
}
