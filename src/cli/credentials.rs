use crate::constants::{FALLBACK_API_KEY_ENV, PRIMARY_API_KEY_ENV};

use super::CliError;

/// Lookup of named credential variables.
///
/// Abstracts the process environment so resolution can be tested against
/// fixed values instead of mutating real environment state.
pub trait CredentialSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// Credential source backed by the real process environment
pub struct ProcessEnv;

impl CredentialSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

/// Resolve the API key.
///
/// Priority, first match wins:
/// 1. The explicit --openai-api-key flag
/// 2. OAI_SEARCH_API_KEY
/// 3. OPENAI_API_KEY
///
/// The key is resolved at most once per process and is never logged.
pub fn resolve_api_key(
    cli_key: Option<&str>,
    source: &dyn CredentialSource,
) -> Result<String, CliError> {
    if let Some(key) = cli_key.filter(|key| !key.is_empty()) {
        return Ok(key.to_string());
    }
    source
        .var(PRIMARY_API_KEY_ENV)
        .or_else(|| source.var(FALLBACK_API_KEY_ENV))
        .ok_or(CliError::MissingApiKey)
}
