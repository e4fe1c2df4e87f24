//! Shape checks applied to inbound payloads before any store access.

use super::domain::ApplicationSubmission;

const MAX_LOCAL_PART: usize = 64;
const MAX_DOMAIN: usize = 253;
const MAX_LABEL: usize = 63;
const LOCAL_PART_SYMBOLS: &str = "!#$%&'*+/=?^_`{|}~-.";

/// Rejections raised while checking request payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },
    #[error("value is not a valid email address: {reason}")]
    InvalidEmail { reason: &'static str },
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// Applicant fields after trimming and email normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub full_name: String,
    pub email: String,
    pub portfolio_url: Option<String>,
    pub cover_letter: String,
}

pub fn validate_submission(
    submission: ApplicationSubmission,
) -> Result<ValidatedSubmission, ValidationError> {
    let ApplicationSubmission {
        full_name,
        email,
        portfolio_url,
        cover_letter,
    } = submission;

    let full_name = required("full_name", &full_name)?;
    let email = normalize_email(&email)?;
    let cover_letter = required("cover_letter", &cover_letter)?;
    let portfolio_url = portfolio_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    Ok(ValidatedSubmission {
        full_name,
        email,
        portfolio_url,
        cover_letter,
    })
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Checks `local@domain` syntax and lowercases the domain.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    let invalid = |reason| ValidationError::InvalidEmail { reason };

    let candidate = raw.trim();
    if candidate.is_empty() {
        return Err(ValidationError::EmptyField { field: "email" });
    }
    if candidate.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }

    let (local, domain) = candidate
        .rsplit_once('@')
        .ok_or_else(|| invalid("missing '@' sign"))?;

    if local.is_empty() {
        return Err(invalid("empty local part"));
    }
    if local.len() > MAX_LOCAL_PART {
        return Err(invalid("local part too long"));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid("misplaced dot in local part"));
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
    {
        return Err(invalid("unsupported character in local part"));
    }

    let domain = domain.to_ascii_lowercase();
    if domain.is_empty() {
        return Err(invalid("empty domain"));
    }
    if domain.len() > MAX_DOMAIN {
        return Err(invalid("domain too long"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid("domain must contain a dot"));
    }
    for label in &labels {
        if label.is_empty() || label.len() > MAX_LABEL {
            return Err(invalid("invalid domain label length"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid("domain label starts or ends with '-'"));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("unsupported character in domain"));
        }
    }
    if labels
        .last()
        .is_some_and(|tld| tld.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid("top-level domain is numeric"));
    }

    Ok(format!("{local}@{domain}"))
}
