use anyhow::Result;
use clap::Parser;

use oai_websearch::{
    init_logger, resolve_api_key, ApiError, Cli, CliError, ProcessEnv, ResponsesClient,
};

#[tokio::main]
async fn main() {
    init_logger();

    // Parse CLI arguments (clap exits non-zero itself on usage errors)
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output_text) => println!("{output_text}"),
        Err(err) => {
            report(&err);
            std::process::exit(1);
        }
    }
}

/// Resolve arguments and credentials, then perform the single request.
///
/// Returns the aggregated output text; every failure bubbles up so only
/// main decides about process termination.
async fn run(cli: Cli) -> Result<String> {
    let query = cli.joined_query()?;
    let api_key = resolve_api_key(cli.openai_api_key.as_deref(), &ProcessEnv)?;

    let client = ResponsesClient::new(api_key)?;
    let output_text = client
        .search(&query, cli.reasoning_effort, cli.search_context_size)
        .await?;
    Ok(output_text)
}

/// Render a failure to stderr.
///
/// Dispatch failures get a generic line plus, for the recognized
/// statuses, one remediation hint; everything else that is not a
/// resolution failure is reported as unexpected.
fn report(err: &anyhow::Error) {
    if let Some(api_err) = err.downcast_ref::<ApiError>() {
        eprintln!("Request failed: {api_err}");
        if let Some(hint) = api_err.hint() {
            eprintln!("\n{hint}");
        }
    } else if let Some(cli_err) = err.downcast_ref::<CliError>() {
        eprintln!("Error: {cli_err}");
    } else {
        eprintln!("Unexpected error: {err:#}");
    }
}
