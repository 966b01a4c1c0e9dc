use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Build defaults. Command-line flags win over environment variables,
/// which win over the optional JSON config file named by `TEZAUR_CONFIG`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chunk_size: usize,
    pub top: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            top: 10,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = match env::var("TEZAUR_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Self::default(),
        };

        if let Some(chunk_size) = env_usize("TEZAUR_CHUNK_SIZE") {
            config.chunk_size = chunk_size;
        }
        if let Some(top) = env_usize("TEZAUR_TOP") {
            config.top = top;
        }

        config
    }

    fn from_file(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
