use std::path::{Path, PathBuf};

use config::FileFormat;
use serde::Deserialize;
use serde_json::Value;

use crate::{
  error::Error,
  utils::{get_config_dir, get_data_dir},
};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
  #[serde(default)]
  pub data_dir: PathBuf,
  #[serde(default)]
  pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
  #[serde(default, flatten)]
  pub config: AppConfig,
  #[serde(default)]
  pub banner: String,
  /// Untyped on purpose: records are shape-checked before they reach the list.
  #[serde(default)]
  pub users: Vec<Value>,
}

impl Config {
  pub fn new() -> Result<Self, Error> {
    Self::load_from(&get_config_dir(), &get_data_dir())
  }

  /// Embedded defaults, overlaid by any config file found in `config_dir`.
  pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, Error> {
    let mut builder = config::Config::builder()
      .add_source(config::File::from_str(CONFIG, FileFormat::Json5))
      .set_default("data_dir", data_dir.display().to_string())?
      .set_default("config_dir", config_dir.display().to_string())?;

    let config_files = [
      ("config.json5", FileFormat::Json5),
      ("config.json", FileFormat::Json),
      ("config.yaml", FileFormat::Yaml),
      ("config.toml", FileFormat::Toml),
      ("config.ini", FileFormat::Ini),
    ];
    let mut found_config = false;
    for (file, format) in &config_files {
      let path = config_dir.join(file);
      builder = builder.add_source(config::File::from(path.clone()).format(*format).required(false));
      if path.exists() {
        found_config = true;
      }
    }
    if !found_config {
      log::info!("No configuration file found in {}, using defaults", config_dir.display());
    }

    let cfg: Self = builder.build()?.try_deserialize()?;
    Ok(cfg)
  }
}
