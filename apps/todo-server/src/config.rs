use std::{
  env, fs, io,
  net::SocketAddr,
  path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TODO_API_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "todo-api.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse {}: {source}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub server: ServerConfig,
  pub storage: StorageConfig,
  pub log: LogConfig,
  pub openapi: OpenApiConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
  pub bind: SocketAddr,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
    }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
  #[default]
  Memory,
  Sqlite {
    path: PathBuf,
  },
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
  pub filter: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      filter: "info,tower_http=debug".into(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenApiConfig {
  pub enabled: bool,
  pub path: String,
}

impl Default for OpenApiConfig {
  fn default() -> Self {
    Self {
      enabled: true,
      path: "/swagger/v1/swagger.json".into(),
    }
  }
}

impl Config {
  /// Loads the file named by `TODO_API_CONFIG`, falling back to
  /// `todo-api.toml` in the working directory.
  pub fn load() -> Result<Self, ConfigError> {
    let path = env::var_os(CONFIG_ENV)
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    Self::from_path(&path)
  }

  /// A missing file is not an error; every setting has a default. Any
  /// other read failure is.
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    let text = match fs::read_to_string(path) {
      Ok(text) => text,
      Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
      Err(source) => {
        return Err(ConfigError::Read {
          path: path.to_owned(),
          source,
        })
      }
    };

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
      path: path.to_owned(),
      source,
    })
  }
}
