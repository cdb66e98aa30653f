use crate::utils::error::{DockError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// Any non-empty path
    Any,
    /// A single path component, so it cannot leave its base directory
    FileName,
}

pub fn invalid_value(field_name: &str, value: impl ToString, reason: impl Into<String>) -> DockError {
    DockError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 只接受 http / https
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid_value(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid_value(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str, rule: PathRule) -> Result<()> {
    let reason = if path.is_empty() {
        Some("Path cannot be empty")
    } else if path.contains('\0') {
        Some("Path contains null bytes")
    } else if rule == PathRule::FileName
        && (path.contains(['/', '\\']) || path == "." || path == "..")
    {
        Some("File name must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(invalid_value(field_name, path, reason)),
        None => Ok(()),
    }
}

pub fn validate_positive_number<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(invalid_value(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DockError::MissingConfigError {
        field: field_name.to_string(),
    })
}
