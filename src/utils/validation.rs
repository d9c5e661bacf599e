use crate::utils::error::{ExtractError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸出檔不能是既有目錄
pub fn validate_output_file(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if path.is_dir() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string_lossy().into_owned(),
            reason: "Output path is a directory".to_string(),
        });
    }

    Ok(())
}
