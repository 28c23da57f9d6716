/*!
 * Error types for the subseeker crate.
 *
 * This module contains custom error types for different parts of the crate,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while building or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Credentials must be all-present or all-absent
    #[error("username, password and api key must be provided together")]
    PartialCredentials,

    /// Error reading the configuration file
    #[error("failed to read config file: {0}")]
    Read(String),

    /// Error parsing the configuration file
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Errors raised by language-code conversion
#[derive(Error, Debug)]
pub enum LanguageError {
    /// The three-letter code is not in the language registry
    #[error("unknown language code: {0}")]
    UnknownCode(String),

    /// The code is valid but has no ISO 639-1 equivalent
    #[error("no two-letter equivalent for language code: {0}")]
    NoTwoLetterCode(String),
}

/// Errors raised by candidate-subtitle handling
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// An episode movie name did not match the `"<series>" <title>` pattern
    #[error("malformed movie name, expected '\"<series>\" <episode title>': {0}")]
    MalformedMovieName(String),

    /// Subtitle content is set exactly once, by a successful download
    #[error("content already set for subtitle {0}")]
    ContentAlreadySet(String),
}

/// Errors that can occur when talking to the remote subtitle service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error in the provider configuration
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Error with authentication
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error when parsing an API response fails
    #[error("failed to parse API response: {0}")]
    ParseError(String),

    /// Error converting a language code
    #[error("language error: {0}")]
    Language(#[from] LanguageError),

    /// Error from candidate-subtitle handling
    #[error("subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
