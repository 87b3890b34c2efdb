//! Persisted settings: the API key.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Environment variable overriding the stored API key.
pub const API_KEY_ENV: &str = "CURRENCYLAYER_API_KEY";

/// A settings store failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The platform has no per-user config directory.
	#[error("could not determine the user config directory")]
	NoConfigDir,
	/// Reading or writing the settings file failed.
	#[error("settings file {path}: {source}")]
	Io {
		/// The settings file.
		path: PathBuf,
		/// The cause.
		source: io::Error,
	},
	/// The settings file is not valid JSON.
	#[error("settings file {path} is malformed: {source}")]
	Json {
		/// The settings file.
		path: PathBuf,
		/// The cause.
		source: serde_json::Error,
	},
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	api_key: Option<String>,
}

/// The per-user settings file, `{config dir}/currencylayer/config.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
	path: PathBuf,
}

impl ConfigStore {
	/// Opens the store at the platform's config directory.
	pub fn open() -> Result<Self, ConfigError> {
		let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
		Ok(Self::at(dir.join("currencylayer").join("config.json")))
	}

	/// Opens the store at the given file.
	pub fn at(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// The settings file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// The stored API key, [`None`] if there is no settings file or key yet.
	pub fn api_key(&self) -> Result<Option<String>, ConfigError> {
		Ok(self.load()?.api_key.filter(|key| !key.trim().is_empty()))
	}

	/// Stores the API key, creating the settings file if needed.
	///
	/// A malformed settings file is replaced.
	pub fn set_api_key(&self, key: &str) -> Result<(), ConfigError> {
		let mut settings = match self.load() {
			Ok(settings) => settings,
			Err(ConfigError::Json { source, .. }) => {
				warn!(path = %self.path.display(), error = %source, "replacing malformed settings file");
				Settings::default()
			}
			Err(error) => return Err(error),
		};
		settings.api_key = Some(key.trim().to_owned());
		self.save(&settings)?;
		debug!(path = %self.path.display(), "stored API key");
		Ok(())
	}

	fn load(&self) -> Result<Settings, ConfigError> {
		let raw = match fs::read(&self.path) {
			Ok(raw) => raw,
			Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
			Err(source) => return Err(self.io_error(source)),
		};
		serde_json::from_slice(&raw).map_err(|source| ConfigError::Json { path: self.path.clone(), source })
	}

	fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
		}
		let raw = serde_json::to_vec_pretty(settings)
			.map_err(|source| ConfigError::Json { path: self.path.clone(), source })?;
		fs::write(&self.path, raw).map_err(|source| self.io_error(source))
	}

	fn io_error(&self, source: io::Error) -> ConfigError {
		ConfigError::Io { path: self.path.clone(), source }
	}
}
