// Gateway module for the Responses API client - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod client;
mod errors;
mod types;

// Public re-exports - the ONLY way to access API functionality
pub use client::ResponsesClient;
pub use errors::ApiError;
pub use types::{ContentPart, OutputItem, Reasoning, Response, ResponseRequest, Tool};
