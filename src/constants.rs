/// Constants module to avoid magic values in the codebase

// Network Configuration
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const BASE_URL_ENV: &str = "OAI_SEARCH_BASE_URL";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 300; // Reasoning requests can take minutes

// Credential resolution (after the --openai-api-key flag, first match wins)
pub const PRIMARY_API_KEY_ENV: &str = "OAI_SEARCH_API_KEY";
pub const FALLBACK_API_KEY_ENV: &str = "OPENAI_API_KEY";

// Request Configuration
pub const SEARCH_MODEL: &str = "o3";
pub const WEB_SEARCH_INSTRUCTIONS: &str = "You are a helpful assistant specialized in web search. \
Your primary role is to search the web for the most relevant and up-to-date information based on \
the user's query. Provide accurate, comprehensive, and well-structured answers based on the \
search results. Always cite your sources when presenting information from the web.";
