//! Access checks run by the repository handlers.
//!
//! Handlers call these in a fixed order after input binding. On the
//! list endpoint the login check comes before the token check, so an
//! unknown login is reported as not found whatever the token.

use crate::api::extractors::AccessToken;
use crate::config::Config;
use crate::errors::AppError;

/// Require the path login to be the one recognised login.
pub fn require_known_login(config: &Config, login: &str) -> Result<(), AppError> {
    if login == config.known_login {
        Ok(())
    } else {
        tracing::warn!(login = %login, "Unknown login");
        Err(AppError::NotFound)
    }
}

/// Require the bound token to equal the shared secret.
pub fn require_valid_token(config: &Config, token: &AccessToken) -> Result<(), AppError> {
    if config.token_matches(token.as_str()) {
        Ok(())
    } else {
        tracing::warn!("Access token rejected");
        Err(AppError::Forbidden)
    }
}
