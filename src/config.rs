use anyhow::Context;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const FILE_NAME: &str = "rhythm-ripple.toml";
const DEFAULT_LIBRARY: &str = "data/playlists.toml";
const DEFAULT_VOLUME: f32 = 0.7;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub library: LibraryConfig,
    pub player: PlayerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    pub path: PathBuf,
    pub initial_playlist: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub volume: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: LibraryConfig {
                path: PathBuf::from(DEFAULT_LIBRARY),
                initial_playlist: 0,
            },
            player: PlayerConfig {
                volume: DEFAULT_VOLUME,
            },
            log: LogConfig {
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl Config {
    /// First config file found in the working directory, its `config/`
    /// subdirectory or next to the executable. Defaults when none exists.
    pub fn load() -> anyhow::Result<Self> {
        let mut candidates = Vec::new();

        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(FILE_NAME));
            candidates.push(current_dir.join("config").join(FILE_NAME));
        }

        if let Ok(exe) = env::current_exe()
            && let Some(dir) = exe.parent()
        {
            candidates.push(dir.join(FILE_NAME));
            candidates.push(dir.join("config").join(FILE_NAME));
        }

        for path in candidates {
            if path.exists() {
                return Self::from_path(&path);
            }
        }

        Ok(Config::default())
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let base = path.parent().unwrap_or(Path::new(""));
        Self::parse(&data, base)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses a config document. A relative library path is taken from `base`.
    pub fn parse(data: &str, base: &Path) -> anyhow::Result<Self> {
        let doc: ConfigDocument = toml::from_str(data)?;
        let mut config = Config::from(doc);
        if config.library.path.is_relative() {
            config.library.path = base.join(&config.library.path);
        }
        Ok(config)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    library: LibrarySection,
    #[serde(default)]
    player: PlayerSection,
    #[serde(default)]
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
struct LibrarySection {
    path: Option<PathBuf>,
    initial_playlist: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct PlayerSection {
    volume: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct LogSection {
    filter: Option<String>,
}

impl From<ConfigDocument> for Config {
    fn from(value: ConfigDocument) -> Self {
        let defaults = Config::default();
        Config {
            library: LibraryConfig {
                path: value.library.path.unwrap_or(defaults.library.path),
                initial_playlist: value.library.initial_playlist.unwrap_or(0),
            },
            player: PlayerConfig {
                volume: value
                    .player
                    .volume
                    .filter(|v| v.is_finite())
                    .unwrap_or(DEFAULT_VOLUME)
                    .clamp(0.0, 1.0),
            },
            log: LogConfig {
                filter: value.log.filter.unwrap_or(defaults.log.filter),
            },
        }
    }
}
