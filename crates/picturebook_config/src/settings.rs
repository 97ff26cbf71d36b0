//! Configuration structures.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use picturebook_core::PersonaSpec;
use picturebook_error::{ConfigError, PicturebookError, PicturebookResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../picturebook.toml");

/// Persona created once per session.
///
/// ```toml
/// [persona]
/// name = "Children's Author"
/// instructions = "You are a creative, illustrated children's book author ..."
/// model = "gpt-4-1106-preview"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct PersonaConfig {
    /// Display name
    name: String,
    /// System instructions
    instructions: String,
    /// Model identifier
    model: String,
}

impl PersonaConfig {
    /// Convert into the persona description handed to the assistant backend.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the persona cannot be built.
    pub fn to_spec(&self) -> PicturebookResult<PersonaSpec> {
        PersonaSpec::builder()
            .name(self.name.clone())
            .instructions(self.instructions.clone())
            .model(self.model.clone())
            .build()
            .map_err(|e| {
                PicturebookError::from(ConfigError::new(format!(
                    "Failed to build persona: {}",
                    e
                )))
            })
    }
}

/// Run polling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct SessionConfig {
    /// Delay between two run status polls
    poll_interval_ms: u64,
    /// Ceiling on the time spent waiting for one run
    max_wait_ms: u64,
}

impl SessionConfig {
    /// Create a session configuration.
    pub fn new(poll_interval_ms: u64, max_wait_ms: u64) -> Self {
        Self {
            poll_interval_ms,
            max_wait_ms,
        }
    }

    /// Poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Maximum wait as a duration.
    pub fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(1000, 600_000)
    }
}

/// Image generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct ImageConfig {
    /// Image model
    model: String,
    /// Image size, e.g. `1024x1024`
    size: String,
    /// Image quality, e.g. `standard`
    quality: String,
    /// Images requested per page
    count: u32,
}

impl ImageConfig {
    /// Create an image configuration.
    pub fn new(
        model: impl Into<String>,
        size: impl Into<String>,
        quality: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            model: model.into(),
            size: size.into(),
            quality: quality.into(),
            count,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self::new("dall-e-3", "1024x1024", "standard", 1)
    }
}

/// Storyboard persistence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storyboard
    path: PathBuf,
}

/// Remote API access.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct ApiConfig {
    /// Base URL of the API, without trailing slash
    base_url: String,
    /// Environment variable holding the API key
    api_key_env: String,
}

/// How the outline stage asks for its result.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutlineFormat {
    /// Free text outline, no extraction
    #[default]
    Text,
    /// JSON outline with `characters`, `setting`, `plot`
    Json,
}

/// Pipeline behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Getters)]
pub struct PipelineConfig {
    /// Outline stage result format
    #[serde(default)]
    outline_format: OutlineFormat,
    /// Fall back to bare `{...}`/`[...]` spans when no fenced JSON block exists
    #[serde(default)]
    lenient_extraction: bool,
}

impl PipelineConfig {
    /// Create a pipeline configuration.
    pub fn new(outline_format: OutlineFormat, lenient_extraction: bool) -> Self {
        Self {
            outline_format,
            lenient_extraction,
        }
    }
}

/// Top-level Picturebook configuration.
///
/// # Example
///
/// ```no_run
/// use picturebook_config::PicturebookConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PicturebookConfig::load()?;
/// println!("Persona model: {}", config.persona().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct PicturebookConfig {
    /// Persona settings
    persona: PersonaConfig,
    /// Session polling settings
    session: SessionConfig,
    /// Image generation settings
    images: ImageConfig,
    /// Storage settings
    storage: StorageConfig,
    /// API settings
    api: ApiConfig,
    /// Pipeline switches
    #[serde(default)]
    pipeline: PipelineConfig,
}

impl PicturebookConfig {
    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is invalid.
    pub fn defaults() -> PicturebookResult<Self> {
        Self::finish(Self::bundled())
    }

    /// Load one explicit file over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// merged values fail validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PicturebookResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::bundled().add_source(File::from(path.as_ref()).required(true));
        Self::finish(builder)
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// values fail validation.
    #[instrument]
    pub fn load() -> PicturebookResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/picturebook/picturebook.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("picturebook").required(false));
        Self::finish(builder)
    }

    /// Replace the session settings.
    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }

    /// Replace the pipeline switches.
    pub fn with_pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Replace the storage directory.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.path = path.into();
        self
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending field.
    pub fn validate(&self) -> PicturebookResult<()> {
        if self.session.poll_interval_ms == 0 {
            return Err(ConfigError::new("session.poll_interval_ms must be greater than 0").into());
        }
        if self.session.max_wait_ms < self.session.poll_interval_ms {
            return Err(ConfigError::new(format!(
                "session.max_wait_ms ({}) must not be less than session.poll_interval_ms ({})",
                self.session.max_wait_ms, self.session.poll_interval_ms
            ))
            .into());
        }
        if self.images.count == 0 {
            return Err(ConfigError::new("images.count must be at least 1").into());
        }
        if self.persona.model.trim().is_empty() {
            return Err(ConfigError::new("persona.model must not be empty").into());
        }
        Ok(())
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> PicturebookResult<Self> {
        let config: Self = builder
            .add_source(
                Environment::with_prefix("PICTUREBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                PicturebookError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PicturebookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }
}
