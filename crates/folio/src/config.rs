use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use folio_core::content::Profile;
use folio_core::nav::DEFAULT_SCROLL_THRESHOLD;
use folio_core::{SectionId, Threshold};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Theme accent colour, written as `#rrggbb` in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub struct Accent(pub Srgb<u8>);

impl Accent {
    pub const CRIMSON: Self = Self(Srgb::new(0xdc, 0x14, 0x3c));

    pub fn components(&self) -> (f64, f64, f64) {
        self.0.into_format::<f64>().into_components()
    }
}

impl Default for Accent {
    fn default() -> Self {
        Self::CRIMSON
    }
}

impl FromStr for Accent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim())
            .map(Self)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub accent: Accent,
    pub scroll_threshold: f64,
    pub intersection: bool,
    pub thresholds: HashMap<SectionId, Threshold>,
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent: Accent::default(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            intersection: true,
            thresholds: HashMap::new(),
            profile: Profile::default(),
        }
    }
}

impl Config {
    pub fn threshold(&self, section: SectionId) -> Threshold {
        self.thresholds
            .get(&section)
            .copied()
            .unwrap_or_else(|| section.default_threshold())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Invalid colour '{0}', expected #rrggbb")]
    InvalidColor(String),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid config path: {0}")]
    Path(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("dev", "iffy", "folio").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("FOLIO"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads `path`, falling back to the built-in defaults on any error.
pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config from {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// A change to the config file itself. `notify` reports absolute paths, so a
/// relative `config_path` is resolved against the working directory first.
fn is_config_event(event: &Event, config_path: &Path) -> bool {
    let meaningful_event = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    if !meaningful_event {
        return false;
    }
    let Ok(config_path) = std::path::absolute(config_path) else {
        return false;
    };
    event.paths.iter().any(|p| p == &config_path)
}

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_path = match std::path::absolute(&config_path) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Cannot watch {}: {}", config_path.display(), e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if is_config_event(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(s: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(s, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_accent_parsing() {
        let cases = vec![
            ("\"#dc143c\"", Accent::CRIMSON),
            ("\"DC143C\"", Accent::CRIMSON),
            ("\"#00ff00\"", Accent(Srgb::new(0, 255, 0))),
        ];

        for (json, expected) in cases {
            let deserialized: Accent = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
        assert!(serde_json::from_str::<Accent>("\"crimson\"").is_err());
        assert_eq!(Accent::CRIMSON.to_string(), "#dc143c");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config, Config::default());
        assert_eq!(config.threshold(SectionId::Skills).get(), 0.2);
    }

    #[test]
    fn test_threshold_overrides() {
        let config = from_toml(
            r#"
            scroll_threshold = 64.0

            [thresholds]
            projects = 0.5
            "#,
        );
        assert_eq!(config.scroll_threshold, 64.0);
        assert_eq!(config.threshold(SectionId::Projects).get(), 0.5);
        assert_eq!(config.threshold(SectionId::Services).get(), 0.1);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let result = config::Config::builder()
            .add_source(config::File::from_str(
                "[thresholds]\nskills = 3.0",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Config>();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_event_matches_relative_path() {
        use notify::event::{AccessKind, DataChange, ModifyKind};

        let absolute = std::env::current_dir().unwrap().join("folio.toml");
        let modified = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Any)))
            .add_path(absolute.clone());

        assert!(is_config_event(&modified, Path::new("folio.toml")));
        assert!(is_config_event(&modified, &absolute));
        assert!(!is_config_event(&modified, Path::new("other.toml")));

        let accessed = Event::new(EventKind::Access(AccessKind::Any)).add_path(absolute);
        assert!(!is_config_event(&accessed, Path::new("folio.toml")));
    }

    #[test]
    fn test_default_config_file_matches_defaults() {
        let config = from_toml(DEFAULT_CONFIG);
        let defaults = Config::default();
        assert_eq!(config.accent, defaults.accent);
        assert_eq!(config.scroll_threshold, defaults.scroll_threshold);
        assert_eq!(config.profile.email, defaults.profile.email);
        assert_eq!(config.threshold(SectionId::Contact).get(), 0.1);
    }
}
