//! Command-line interface for Langsniff.
//!
//! This module handles argument parsing and output payloads only.
//! Detection itself lives in the library modules.

use crate::classifier::{FrequencyTable, NaiveBayes};
use crate::error::Result;
use crate::summary::{Mode, DEFAULT_LIMIT_KB};
use crate::{Catalog, Registry};
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Langsniff: detect the programming language of source files.
#[derive(Parser, Debug)]
#[command(name = "langsniff")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON payloads instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Language catalog to use instead of the built-in one (JSON).
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Token frequency table to use instead of the built-in one (JSON).
    #[arg(long, global = true, value_name = "FILE")]
    pub frequencies: Option<PathBuf>,
}

/// Available Langsniff commands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Detect the language of one or more files.
    Detect {
        /// Files to inspect.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show classifier scores for a file.
    Classify {
        /// File to score.
        file: PathBuf,

        /// Restrict scoring to these languages (repeatable).
        #[arg(short, long = "candidate", value_name = "LANG")]
        candidates: Vec<String>,

        /// Number of languages to show.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Summarize the languages of a directory, or describe a single file.
    Summary {
        /// Directory or file to inspect.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Aggregation unit for percentages.
        #[arg(long, value_enum, default_value_t = Mode::Byte)]
        mode: Mode,

        /// Include data and prose languages.
        #[arg(long)]
        all: bool,

        /// List the files of each language.
        #[arg(long)]
        breakdown: bool,

        /// Kilobytes read from each file (0 reads whole files).
        #[arg(long, value_name = "KB", default_value_t = DEFAULT_LIMIT_KB)]
        limit: u64,
    },

    /// Build a token frequency table from a samples directory.
    Frequencies {
        /// Directory laid out as `<Language>/<sample files>`.
        samples: PathBuf,

        /// Write the table here instead of standard output.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Parse command-line arguments.
///
/// Returns the parsed Cli struct or exits on error.
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Registry built from `--catalog` and `--frequencies`, if either is given.
///
/// `None` means the built-in registry should be used.
pub fn custom_registry(catalog: Option<&Path>, frequencies: Option<&Path>) -> Result<Option<Registry>> {
    if catalog.is_none() && frequencies.is_none() {
        return Ok(None);
    }

    let catalog = match catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    let registry = match frequencies {
        Some(path) => {
            let table = FrequencyTable::from_json_file(path)?;
            log::debug!("loaded frequencies for {} languages", table.languages.len());
            Registry::from_catalog_with(catalog, NaiveBayes::new(&table))?
        }
        None => Registry::from_catalog(catalog)?,
    };

    Ok(Some(registry))
}

/// JSON success payload for CLI responses.
#[derive(Serialize)]
pub struct CliSuccessPayload {
    /// Status indicator ("ok").
    pub status: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Optional structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CliSuccessPayload {
    /// Construct a payload containing only the message.
    pub fn message_only(message: String) -> Self {
        Self {
            status: "ok",
            message,
            data: None,
        }
    }

    /// Construct a payload with structured data.
    pub fn with_data(message: String, data: Value) -> Self {
        Self {
            status: "ok",
            message,
            data: Some(data),
        }
    }
}

/// JSON error payload for CLI responses.
#[derive(Serialize)]
pub struct CliErrorPayload {
    /// Status indicator ("error").
    pub status: &'static str,
    /// Structured error details.
    pub error: ErrorDetails,
}

/// Details for a CLI error payload.
#[derive(Serialize)]
pub struct ErrorDetails {
    /// Error kind identifier (InvalidCatalog, Io, etc.).
    pub kind: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Optional file context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Optional hint for remediation steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl CliErrorPayload {
    /// Build payload from a SniffError instance.
    pub fn from_error(error: &crate::SniffError) -> Self {
        CliErrorPayload {
            status: "error",
            error: ErrorDetails {
                kind: error.kind(),
                message: error.to_string(),
                file: error
                    .file_path()
                    .map(|path| path.to_string_lossy().to_string()),
                hint: error.hint().map(|h| h.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["langsniff", "detect", "a.rs", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        match cli.command {
            Commands::Detect { files } => assert_eq!(files, [PathBuf::from("a.rs")]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_summary_defaults() {
        let cli = Cli::try_parse_from(["langsniff", "summary"]).unwrap();
        match cli.command {
            Commands::Summary {
                path,
                mode,
                all,
                breakdown,
                limit,
            } => {
                assert_eq!(path, PathBuf::from("."));
                assert_eq!(mode, Mode::Byte);
                assert!(!all && !breakdown);
                assert_eq!(limit, DEFAULT_LIMIT_KB);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_repeated_candidates() {
        let cli =
            Cli::try_parse_from(["langsniff", "classify", "x", "-c", "C", "--candidate", "C++"]).unwrap();
        match cli.command {
            Commands::Classify { candidates, top, .. } => {
                assert_eq!(candidates, ["C", "C++"]);
                assert_eq!(top, 5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_error_payload_shape() {
        let error = crate::SniffError::io("missing.txt", std::io::Error::from(std::io::ErrorKind::NotFound));
        let json = serde_json::to_value(CliErrorPayload::from_error(&error)).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["kind"], "Io");
        assert_eq!(json["error"]["file"], "missing.txt");
    }

    #[test]
    fn test_no_overrides_means_builtin() {
        assert!(custom_registry(None, None).unwrap().is_none());
    }
}
