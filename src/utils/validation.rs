use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if input == output {
        return Err(CalcError::ConfigValidationError {
            field: "output_path".to_string(),
            message: format!("Output path '{}' would overwrite the input file", output),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    if !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported log level. Valid levels: {}", LEVELS.join(", ")),
        });
    }
    Ok(())
}
