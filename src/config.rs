// Run configuration: fill formulas, array length, chunk size, display count,
// worker count.
// Values are validated once at construction so the adder never sees a zero
// chunk size or an empty worker pool.

use serde::Deserialize;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::error::ConfigError;
use crate::variant::Variant;

//==============================================================================
// Validated configuration
//==============================================================================

/// SumConfig: parameters of one summation run
/// `workers = None` means "use every available CPU".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumConfig {
    variant: Variant,
    len: usize,
    chunk_size: NonZeroUsize,
    display_count: usize,
    workers: Option<NonZeroUsize>,
}

impl SumConfig {
    /// Entry point for fluent builder API
    pub fn builder() -> SumConfigBuilder {
        SumConfigBuilder::new()
    }

    /// Built-in constants. A zero chunk size is bumped to 1.
    pub(crate) fn preset(
        variant: Variant,
        len: usize,
        chunk_size: usize,
        display_count: usize,
    ) -> Self {
        SumConfig {
            variant,
            len,
            chunk_size: NonZeroUsize::new(chunk_size).unwrap_or(NonZeroUsize::MIN),
            display_count,
            workers: None,
        }
    }

    /// Formulas used to fill the inputs
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn workers(&self) -> Option<NonZeroUsize> {
        self.workers
    }

    /// Configured worker count, or the number of logical CPUs
    pub fn resolved_workers(&self) -> NonZeroUsize {
        self.workers
            .or_else(|| NonZeroUsize::new(num_cpus::get()))
            .unwrap_or(NonZeroUsize::MIN)
    }

    /// Parses a TOML table on top of the primary preset
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_toml_str_with(content, Variant::Primary)
    }

    /// Parses a TOML table. Missing keys come from the preset of the table's
    /// `variant`, or of `fallback` when the table names none.
    pub fn from_toml_str_with(content: &str, fallback: Variant) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        raw.into_config(fallback)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, Variant::Primary)
    }

    pub fn load_with(path: impl AsRef<Path>, fallback: Variant) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str_with(&content, fallback)
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Variant::Primary.config()
    }
}

//==============================================================================
// File format
//==============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    variant: Option<String>,
    len: Option<usize>,
    chunk_size: Option<usize>,
    display_count: Option<usize>,
    workers: Option<usize>,
}

impl RawConfig {
    fn into_config(self, fallback: Variant) -> Result<SumConfig, ConfigError> {
        let variant = match self.variant.as_deref() {
            Some(name) => name.parse::<Variant>()?,
            None => fallback,
        };

        let mut builder = SumConfigBuilder::from(variant.config());
        if let Some(len) = self.len {
            builder = builder.len(len);
        }
        if let Some(chunk_size) = self.chunk_size {
            builder = builder.chunk_size(chunk_size);
        }
        if let Some(display_count) = self.display_count {
            builder = builder.display_count(display_count);
        }
        if let Some(workers) = self.workers {
            builder = builder.workers(workers);
        }
        builder.build()
    }
}

//==============================================================================
// Builder
//==============================================================================

/// SumConfigBuilder: collects raw values, validates on `build`
#[derive(Debug, Clone)]
pub struct SumConfigBuilder {
    variant: Variant,
    len: usize,
    chunk_size: usize,
    display_count: usize,
    workers: Option<usize>,
}

impl SumConfigBuilder {
    /// Starts from the primary preset
    pub fn new() -> Self {
        Self::from(Variant::Primary.config())
    }

    /// Switches the fill formulas only; sizes keep their current values
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn display_count(mut self, display_count: usize) -> Self {
        self.display_count = display_count;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn build(self) -> Result<SumConfig, ConfigError> {
        let chunk_size = NonZeroUsize::new(self.chunk_size).ok_or(ConfigError::ZeroChunkSize)?;
        let workers = match self.workers {
            Some(n) => Some(NonZeroUsize::new(n).ok_or(ConfigError::ZeroWorkers)?),
            None => None,
        };

        Ok(SumConfig {
            variant: self.variant,
            len: self.len,
            chunk_size,
            display_count: self.display_count,
            workers,
        })
    }
}

impl Default for SumConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SumConfig> for SumConfigBuilder {
    fn from(config: SumConfig) -> Self {
        SumConfigBuilder {
            variant: config.variant,
            len: config.len,
            chunk_size: config.chunk_size.get(),
            display_count: config.display_count,
            workers: config.workers.map(NonZeroUsize::get),
        }
    }
}
