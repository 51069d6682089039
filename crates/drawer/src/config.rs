use directories::ProjectDirs;
use drawer_core::{Detent, DrawerLayout, Position, Size};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub position: Position,
    pub detents: Vec<Detent>,
    pub interactive_detents: Vec<Detent>,
    pub initial_detent: Detent,
    pub container: Size,
    pub settle: SettleConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            position: Position::Bottom,
            detents: vec![Detent::SMALL, Detent::new(0.61), Detent::LARGE],
            interactive_detents: vec![Detent::LARGE],
            initial_detent: Detent::SMALL,
            container: Size::new(390.0, 844.0),
            settle: SettleConfig::default(),
        }
    }
}

impl DrawerConfig {
    pub fn layout(&self) -> DrawerLayout {
        DrawerLayout::new(
            self.position,
            self.detents.iter().copied(),
            self.interactive_detents.iter().copied(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SettleConfig {
    pub duration_ms: u64,
    /// Overshoot past the target, as a fraction of the distance travelled.
    pub bounce: f64,
    pub frame_ms: u64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            duration_ms: 350,
            bounce: 0.1,
            frame_ms: 16,
        }
    }
}

impl SettleConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "drawer", "drawer").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<DrawerConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("DRAWER"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<DrawerConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> DrawerConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            DrawerConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
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
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", ConfigError::from(e));
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
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

    #[test]
    fn test_default_config_file_matches_defaults() {
        let parsed = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, DrawerConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed = parse_config(
            r#"
            position = "Left"
            detents = [0.5, 1.0]

            [settle]
            duration_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(parsed.position, Position::Leading);
        assert_eq!(parsed.detents, vec![Detent::MEDIUM, Detent::LARGE]);
        assert_eq!(parsed.interactive_detents, vec![Detent::LARGE]);
        assert_eq!(parsed.settle.duration_ms, 0);
        assert_eq!(parsed.settle.frame_ms, 16);
    }

    #[test]
    fn test_out_of_range_detents_are_clamped() {
        let parsed = parse_config("detents = [-0.5, 0.5, 2.0]").unwrap();
        assert_eq!(
            parsed.detents,
            vec![Detent::HIDDEN, Detent::MEDIUM, Detent::LARGE]
        );
    }

    #[test]
    fn test_unknown_position_is_an_error() {
        assert!(parse_config("position = \"diagonal\"").is_err());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = DrawerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: DrawerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_layout_preserves_detent_order() {
        let config = DrawerConfig {
            detents: vec![Detent::LARGE, Detent::SMALL],
            ..DrawerConfig::default()
        };
        let layout = config.layout();
        let order: Vec<Detent> = layout.detents.iter().copied().collect();
        assert_eq!(order, vec![Detent::LARGE, Detent::SMALL]);
    }

    #[test]
    fn test_frame_interval_is_never_zero() {
        let settle = SettleConfig {
            frame_ms: 0,
            ..SettleConfig::default()
        };
        assert_eq!(settle.frame_interval(), Duration::from_millis(1));
    }
}
