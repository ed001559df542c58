use crate::config::types::AuditConfig;
use crate::ConfigError;
use url::Url;

/// Longest per-request timeout accepted, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &AuditConfig) -> Result<(), ConfigError> {
    validate_site_url(&config.site_url)?;
    validate_timeout(config.timeout_secs)?;
    validate_user_agent(&config.user_agent)?;
    Ok(())
}

/// Validates the audited site URL
fn validate_site_url(site_url: &str) -> Result<(), ConfigError> {
    if site_url.is_empty() {
        return Err(ConfigError::Validation("site URL cannot be empty".to_string()));
    }

    let url = Url::parse(site_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site URL '{}': {}", site_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Site URL '{}' must use http or https, got '{}'",
            site_url,
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidUrl(format!(
            "Site URL '{}' has no host",
            site_url
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl(format!(
            "Site URL '{}' must not carry a query or fragment",
            site_url
        )));
    }

    Ok(())
}

/// Validates the per-request timeout
fn validate_timeout(timeout_secs: u64) -> Result<(), ConfigError> {
    if timeout_secs < 1 || timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout must be between 1 and {} seconds, got {}",
            MAX_TIMEOUT_SECS, timeout_secs
        )));
    }
    Ok(())
}

/// Validates the user agent string
fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user agent cannot be empty".to_string(),
        ));
    }

    if user_agent.chars().any(char::is_control) {
        return Err(ConfigError::Validation(
            "user agent must not contain control characters".to_string(),
        ));
    }

    Ok(())
}
