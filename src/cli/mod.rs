// Gateway module for the CLI surface - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod args;
mod credentials;

// Public re-exports - the ONLY way to access CLI functionality
pub use args::{Cli, CliError, Level};
pub use credentials::{resolve_api_key, CredentialSource, ProcessEnv};
