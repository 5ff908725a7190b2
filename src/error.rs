use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chunk_size must be greater than 0")]
    ZeroChunkSize,

    #[error("workers must be greater than 0 when set")]
    ZeroWorkers,

    #[error("Unknown variant '{name}' (expected \"primary\" or \"secondary\")")]
    UnknownVariant { name: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Summation errors
// =============================================================================

#[derive(Error, Debug)]
pub enum SumError {
    #[error("Sequence lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SumError {
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let display = SumError::length_mismatch(4, 3).to_string();
        assert!(display.contains('4'));
        assert!(display.contains('3'));
    }

    #[test]
    fn test_config_error_converts_into_sum_error() {
        let err: SumError = ConfigError::ZeroChunkSize.into();
        assert!(matches!(err, SumError::Config(ConfigError::ZeroChunkSize)));
        assert_eq!(err.to_string(), "chunk_size must be greater than 0");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<SumError>();
        assert_sync::<SumError>();
    }
}
