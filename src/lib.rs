pub mod api;
pub mod cli;
pub mod constants;
pub mod logging;

pub use api::{ApiError, ResponsesClient};
pub use cli::{resolve_api_key, Cli, CliError, CredentialSource, Level, ProcessEnv};
pub use logging::init_logger;
