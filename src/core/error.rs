use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffusionError {
    #[error("Capacity error: {0}")]
    Capacity(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiffusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_names_counts() {
        let e = DiffusionError::Capacity("16 particles requested for 16 cells".into());
        let msg = e.to_string();
        assert!(msg.starts_with("Capacity error"));
        assert!(msg.contains("16 cells"));
    }

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(read_missing(), Err(DiffusionError::IoError(_))));
    }
}
