use crate::app_config::{AppConfig, Environment, DEFAULT_ENDPOINT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config pointed at the production matching endpoint.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let env = parse_environment(&or_default("VENDORHUB_ENV", "development"));
    let endpoint = or_default("VENDORHUB_ENDPOINT", DEFAULT_ENDPOINT);
    if endpoint.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "VENDORHUB_ENDPOINT".to_string(),
            reason: "endpoint must be non-empty".to_string(),
        });
    }
    let log_level = or_default("VENDORHUB_LOG_LEVEL", "info");
    let user_agent = or_default("VENDORHUB_USER_AGENT", "vendorhub/0.1 (supplier-search)");
    let request_timeout_secs = parse_optional_u64("VENDORHUB_REQUEST_TIMEOUT_SECS")?;

    Ok(AppConfig {
        env,
        endpoint,
        log_level,
        user_agent,
        request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
