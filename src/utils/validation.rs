use crate::domain::model::Year;
use crate::utils::error::{Result, ScaffoldError};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 解析並驗證年份字串（需為四位數以上的非負整數，無上限）
pub fn validate_year(raw: &str) -> Result<Year> {
    raw.parse::<Year>().inspect_err(|e| match e {
        ScaffoldError::InvalidYearFormat { .. } => tracing::error!(
            "ValueError occurred while setting up year: value entered is not a number - {}",
            raw
        ),
        _ => tracing::error!("YearY2KError: {}", e),
    })
}

/// 驗證目標路徑存在且為目錄
pub fn validate_target_path(raw: &str) -> Result<PathBuf> {
    validate_path("path", raw)?;

    let path = PathBuf::from(raw);
    if !path.exists() {
        let err = ScaffoldError::PathNotFound { path };
        tracing::error!("OSError: {}", err);
        return Err(err);
    }
    if !path.is_dir() {
        let err = ScaffoldError::PathNotDirectory { path };
        tracing::error!("OSError: {}", err);
        return Err(err);
    }

    Ok(path)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScaffoldError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScaffoldError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A directory name that stays inside its parent: exactly one normal component.
pub fn validate_dir_component(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;
    validate_path(field_name, name)?;

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ScaffoldError::InvalidConfigValue {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Value must be a single directory name without separators".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScaffoldError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
