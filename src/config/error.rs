/// Errors raised while loading a configuration file.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read the configuration file: {0}")]
    Io(String),
    /// The file is not valid YAML, or does not match the configuration layout.
    #[error("failed to parse the configuration: {0}")]
    Parse(String),
    /// The configuration parsed but describes an unusable setup.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
