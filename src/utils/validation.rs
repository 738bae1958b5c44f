use crate::utils::error::{JobBoardError, Result};
use serde_json::{Map, Value};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(JobBoardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(JobBoardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Checks that every key in `keys` exists in `object`.
///
/// Presence is key existence: empty strings and non-string values pass.
/// `prefix` is prepended to the reported field name so nested objects report
/// e.g. `company.name`.
pub fn validate_required_keys(object: &Map<String, Value>, keys: &[&str], prefix: &str) -> Result<()> {
    for key in keys {
        if !object.contains_key(*key) {
            return Err(JobBoardError::ValidationError {
                field: format!("{}{}", prefix, key),
            });
        }
    }
    Ok(())
}

/// Text form of a present value: strings verbatim, `null` as empty, anything
/// else as its JSON rendering.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
