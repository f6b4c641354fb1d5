use crate::utils::error::{ConsultaError, Result};
use url::Url;

/// Placeholder substituted with the normalized identifier in endpoint templates.
pub const ID_PLACEHOLDER: &str = "{id}";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Keeps only the ASCII digits of `raw`, in their original order.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True iff `value` is exactly `expected` ASCII digits.
pub fn has_expected_digits(value: &str, expected: usize) -> bool {
    value.len() == expected && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ConsultaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConsultaError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConsultaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// An endpoint template must carry the `{id}` placeholder and be a valid
/// http(s) URL once a sample identifier is substituted in.
pub fn validate_endpoint_template(field_name: &str, template: &str) -> Result<()> {
    if !template.contains(ID_PLACEHOLDER) {
        return Err(ConsultaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!("Endpoint template must contain {}", ID_PLACEHOLDER),
        });
    }
    validate_url(field_name, &template.replace(ID_PLACEHOLDER, "0"))
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConsultaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConsultaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
