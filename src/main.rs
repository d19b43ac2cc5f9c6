//! Prefix Matcher - Main entrypoint.
//!
//! Loads configuration and a dictionary, then answers longest-prefix queries
//! from the command line.

use clap::{Parser, Subcommand};
use prefix_matcher_lib::config::{ConfigLoader, MatcherConfig, ENV_PREFIX};
use prefix_matcher_lib::dictionary::Dictionary;
use prefix_matcher_lib::error::{
    report_error, set_error_reporter, ErrorContext, MatcherError, MatcherResult,
    TracingErrorReporter,
};
use prefix_matcher_lib::logging::init_logging;
use prefix_matcher_lib::{PrefixTrie, Segment};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

/// Marker printed when no registered word is a prefix of the input.
const NO_MATCH: &str = "<no match>";

/// Command line arguments for the prefix matcher.
#[derive(Parser, Debug)]
#[clap(name = "prefix_matcher", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value of the longest registered prefix of each input
    Seek {
        /// Dictionary file, overriding the configured one
        #[clap(short, long, value_parser)]
        dictionary: Option<PathBuf>,

        /// Inputs to look up
        #[clap(required = true)]
        inputs: Vec<String>,
    },

    /// Split each input greedily into longest matches
    Segment {
        /// Dictionary file, overriding the configured one
        #[clap(short, long, value_parser)]
        dictionary: Option<PathBuf>,

        /// Inputs to segment
        #[clap(required = true)]
        inputs: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Formats one `seek` result line: input, matched prefix and value.
fn render_seek(trie: &PrefixTrie<String>, input: &str) -> String {
    match trie.seek_match(input) {
        Some(found) => format!(
            "{input}\t{}\t{}",
            found.matched(input).unwrap_or_default(),
            found.value()
        ),
        None => format!("{input}\t-\t{NO_MATCH}"),
    }
}

/// Formats the segmentation of one input on a single line.
fn render_segments(trie: &PrefixTrie<String>, input: &str) -> String {
    trie.segment(input)
        .iter()
        .map(|segment| match segment {
            Segment::Matched { text, value } => format!("{text}={value}"),
            Segment::Unmatched { text } => text.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Loads the dictionary named on the command line or in the configuration.
fn load_dictionary(config: &MatcherConfig, path: Option<PathBuf>) -> MatcherResult<Dictionary> {
    let path = path
        .or_else(|| config.dictionary.path.clone())
        .ok_or_else(|| MatcherError::Custom("no dictionary configured".to_string()))?;

    Ok(config.dictionary.load(&path)?)
}

/// Writes one rendered line per input to standard output.
fn print_lines<F>(inputs: &[String], render: F) -> MatcherResult<()>
where
    F: Fn(&str) -> String,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for input in inputs {
        writeln!(out, "{}", render(input))?;
    }
    out.flush()?;
    Ok(())
}

/// Executes the selected command.
fn run(command: Command, config: &MatcherConfig) -> MatcherResult<()> {
    match command {
        Command::Seek { dictionary, inputs } => {
            let dictionary = load_dictionary(config, dictionary)?;
            print_lines(&inputs, |input| render_seek(dictionary.trie(), input))
        }
        Command::Segment { dictionary, inputs } => {
            let dictionary = load_dictionary(config, dictionary)?;
            print_lines(&inputs, |input| render_segments(dictionary.trie(), input))
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = MatcherConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MatcherError::Serialization(e.to_string()))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let result = loaded
        .map_err(MatcherError::from)
        .and_then(|config| run(args.command, &config));

    if let Err(error) = result {
        report_error(&ErrorContext::new(error, "prefix_matcher"));
        process::exit(1);
    }
}
