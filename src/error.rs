use std::fmt;

/// Central error types for the SmartTracker app
#[derive(Debug)]
pub enum AppError {
    /// Database error (rusqlite)
    Database(rusqlite::Error),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Stored or received JSON could not be (de)serialized
    Serialization(serde_json::Error),
    /// HTTP transport error (reqwest)
    Network(String),
    /// Configuration file could not be parsed
    Config(String),
    /// Validation error (e.g. invalid form inputs)
    Validation(String),
    /// Resource not found
    NotFound(String),
    /// General error
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// User-friendly error messages for alerts
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "A storage error occurred. Please try again.".to_string(),
            AppError::Filesystem(_) => {
                "Error accessing files. Please check app permissions.".to_string()
            }
            AppError::Serialization(_) => "Stored data could not be read.".to_string(),
            AppError::Network(_) => "Network request failed. You may be offline.".to_string(),
            AppError::Config(_) => "The configuration file is invalid.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = AppError::Validation("Please enter activity title".to_string());
        assert_eq!(err.user_message(), "Please enter activity title");
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter activity title"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound("Activity".to_string());
        assert_eq!(err.user_message(), "Activity was not found.");
    }
}
