use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must carry an http(s) scheme
/// - At least one attempt per request
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    max_attempts: u32,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if max_attempts == 0 {
        return Err(AppError::config_error("max_attempts must be at least 1"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_configs() {
        assert!(validate_config("https://api.sportradar.com/nfl", 3, &None).is_ok());
        assert!(validate_config("http://localhost:8080", 1, &None).is_ok());

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("pool.log");
        let log_path = Some(log_path.to_string_lossy().to_string());
        assert!(validate_config("https://api.example.com", 3, &log_path).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            validate_config("", 3, &None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            validate_config("api.example.com", 3, &None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            validate_config("https://api.example.com", 0, &None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            validate_config("https://api.example.com", 3, &Some(String::new())),
            Err(AppError::Config(_))
        ));
    }
}
