use clap::{Parser, ValueEnum};
use serde::Serialize;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "oai-websearch")]
#[command(version)]
#[command(about = "Search the web via the OpenAI Responses API", long_about = None)]
pub struct Cli {
    /// Search query
    #[arg(required = true, num_args = 1.., value_name = "QUERY")]
    pub query: Vec<String>,

    /// Reasoning effort level
    #[arg(short = 'r', long, value_enum, default_value_t = Level::Medium, ignore_case = true)]
    pub reasoning_effort: Level,

    /// Search context size
    #[arg(short = 'c', long, value_enum, default_value_t = Level::Medium, ignore_case = true)]
    pub search_context_size: Level,

    /// OpenAI API key (overrides environment variables)
    #[arg(short = 'k', long, value_name = "KEY")]
    pub openai_api_key: Option<String>,
}

impl Cli {
    /// Join the positional arguments into a single query string.
    ///
    /// Fails when the result is empty after trimming, before any
    /// network activity happens.
    pub fn joined_query(&self) -> Result<String, CliError> {
        let query = self.query.join(" ").trim().to_string();
        if query.is_empty() {
            return Err(CliError::EmptyQuery);
        }
        Ok(query)
    }
}

/// Qualitative level accepted by the reasoning and search-context knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Argument resolution failures.
///
/// These never terminate the process themselves; main translates them
/// into stderr output and a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error(
        "OpenAI API key is required. Pass with --openai-api-key or set OAI_SEARCH_API_KEY / OPENAI_API_KEY."
    )]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("arguments should parse")
    }

    #[test]
    fn test_levels_default_to_medium() {
        let cli = parse(&["oai-websearch", "weather", "in", "Paris"]);
        assert_eq!(cli.reasoning_effort, Level::Medium);
        assert_eq!(cli.search_context_size, Level::Medium);
    }

    #[test]
    fn test_level_flags_long_and_short() {
        let cli = parse(&[
            "oai-websearch",
            "latest",
            "news",
            "--reasoning-effort",
            "high",
            "-c",
            "low",
        ]);
        assert_eq!(cli.reasoning_effort, Level::High);
        assert_eq!(cli.search_context_size, Level::Low);
    }

    #[test]
    fn test_levels_accept_any_casing() {
        for value in ["LOW", "Low", "low", "lOw"] {
            let cli = parse(&["oai-websearch", "q", "-r", value]);
            assert_eq!(cli.reasoning_effort, Level::Low);
        }
        let cli = parse(&["oai-websearch", "q", "-r", "HIGH", "-c", "Medium"]);
        assert_eq!(cli.reasoning_effort, Level::High);
        assert_eq!(cli.search_context_size, Level::Medium);
    }

    #[test]
    fn test_invalid_level_names_the_flag() {
        let err = Cli::try_parse_from(["oai-websearch", "q", "-r", "extreme"])
            .expect_err("invalid level should be rejected");
        let rendered = err.to_string();
        assert!(rendered.contains("--reasoning-effort"), "{rendered}");
        assert!(rendered.contains("low"), "{rendered}");
        assert!(rendered.contains("medium"), "{rendered}");
        assert!(rendered.contains("high"), "{rendered}");
    }

    #[test]
    fn test_missing_query_is_a_parse_error() {
        assert!(Cli::try_parse_from(["oai-websearch"]).is_err());
    }

    #[test]
    fn test_query_words_join_with_single_spaces() {
        let cli = parse(&["oai-websearch", "weather", "in", "Paris"]);
        assert_eq!(cli.joined_query().unwrap(), "weather in Paris");
    }

    #[test]
    fn test_whitespace_only_query_is_rejected() {
        for args in [
            vec!["oai-websearch", ""],
            vec!["oai-websearch", "   "],
            vec!["oai-websearch", " ", "\t"],
        ] {
            let cli = parse(&args);
            assert!(matches!(cli.joined_query(), Err(CliError::EmptyQuery)));
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let cli = parse(&["oai-websearch", "  rust 1.80 release notes  "]);
        assert_eq!(cli.joined_query().unwrap(), "rust 1.80 release notes");
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Level::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Level::Medium).unwrap(), "\"medium\"");
    }
}
