use crate::domain::model::Endpoint;
use crate::utils::error::{Result, SearchError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_endpoints(field_name: &str, endpoints: &[String]) -> Result<Vec<Endpoint>> {
    if endpoints.is_empty() {
        return Err(SearchError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    endpoints
        .iter()
        .map(|raw| {
            Endpoint::parse(raw).map_err(|e| SearchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
