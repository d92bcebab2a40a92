// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  Text,
  Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Error,
  Warn,
  Info,
  Debug,
  Trace,
}

impl LogLevel {
  pub fn to_filter(self) -> log::LevelFilter {
    match self {
      LogLevel::Error => log::LevelFilter::Error,
      LogLevel::Warn => log::LevelFilter::Warn,
      LogLevel::Info => log::LevelFilter::Info,
      LogLevel::Debug => log::LevelFilter::Debug,
      LogLevel::Trace => log::LevelFilter::Trace,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub log_level: LogLevel,
  pub output_format: OutputFormat,

  // Desktop window only
  pub window_width: i32,
  pub window_height: i32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      log_level: LogLevel::Warn,
      output_format: OutputFormat::Text,
      window_width: 1100,
      window_height: 700,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/glassconv/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  /// Loads config from `path`. Falls back to defaults on any problem; the
  /// message says what happened.
  pub fn load_from(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "glassconv") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, msg) = Config::load_from(&dir.path().join("settings.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("No config found"));
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "output_format": "json", "log_level": "debug" }"#).unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg.output_format, OutputFormat::Json);
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.window_width, 1100);
    assert!(msg.starts_with("Config loaded"));
  }

  #[test]
  fn test_bad_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
  }

  #[test]
  fn test_log_level_filter() {
    assert_eq!(LogLevel::Info.to_filter(), log::LevelFilter::Info);
  }
}
