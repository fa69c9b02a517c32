//! Langsniff CLI binary
//!
//! This is the main entry point for the langsniff command-line interface.
//! The CLI is a thin adapter over the library APIs.

use langsniff::cli::{CliErrorPayload, CliSuccessPayload, Commands};
use langsniff::summary::{analyze_file, Summary, SummaryOptions};
use langsniff::{FrequencyTable, Registry, SniffError};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = langsniff::cli::parse_args();

    // Initialize logger if verbose
    if cli.verbose {
        env_logger::init();
    }

    let json = cli.json;
    let result = langsniff::cli::custom_registry(cli.catalog.as_deref(), cli.frequencies.as_deref())
        .and_then(|custom| {
            let registry = match &custom {
                Some(registry) => registry,
                None => Registry::builtin(),
            };
            execute(registry, cli.command, json)
        });

    // Handle result
    match result {
        Ok(msg) => {
            print!("{}", msg);
            if !msg.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if json {
                match serde_json::to_string_pretty(&CliErrorPayload::from_error(&e)) {
                    Ok(payload) => println!("{}", payload),
                    Err(_) => eprintln!("Error: {}", e),
                }
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn execute(registry: &Registry, command: Commands, json: bool) -> Result<String, SniffError> {
    match command {
        Commands::Detect { files } => execute_detect(registry, &files, json),
        Commands::Classify {
            file,
            candidates,
            top,
        } => execute_classify(registry, &file, &candidates, top, json),
        Commands::Summary {
            path,
            mode,
            all,
            breakdown,
            limit,
        } => {
            let options = SummaryOptions {
                mode,
                all,
                limit: limit.saturating_mul(1024),
            };
            execute_summary(registry, &path, options, breakdown, json)
        }
        Commands::Frequencies { samples, output } => {
            execute_frequencies(&samples, output.as_deref(), json)
        }
    }
}

/// Execute the detect command.
fn execute_detect(registry: &Registry, files: &[PathBuf], json: bool) -> Result<String, SniffError> {
    let mut lines = Vec::with_capacity(files.len());
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        let content = std::fs::read(file).map_err(|e| SniffError::io(file, e))?;
        let filename = file.to_string_lossy();
        let guess = registry.detect(&filename, &content);

        let strategy = guess.strategy.map_or("none", |s| s.as_str());
        lines.push(format!(
            "{}: {} ({}{})",
            filename,
            guess.language,
            strategy,
            if guess.safe { "" } else { ", guess" }
        ));
        results.push(json!({
            "file": filename,
            "language": guess.language,
            "strategy": guess.strategy,
            "safe": guess.safe,
        }));
    }

    if json {
        let message = format!("Detected {} file(s)", files.len());
        return to_json(&CliSuccessPayload::with_data(message, json!(results)));
    }
    Ok(lines.join("\n"))
}

/// Execute the classify command.
fn execute_classify(
    registry: &Registry,
    file: &Path,
    candidates: &[String],
    top: usize,
    json: bool,
) -> Result<String, SniffError> {
    let content = std::fs::read(file).map_err(|e| SniffError::io(file, e))?;
    let candidates: Vec<&str> = candidates.iter().map(String::as_str).collect();

    let scores = registry.classify(&content, &candidates);
    let ranked: Vec<(&str, f64)> = langsniff::classifier::ranked(&scores)
        .into_iter()
        .take(top)
        .collect();

    if json {
        let data: Vec<_> = ranked
            .iter()
            .map(|(language, score)| json!({ "language": language, "score": score }))
            .collect();
        let message = match ranked.first() {
            Some((language, _)) => format!("Best match: {}", language),
            None => "Nothing to score".to_string(),
        };
        return to_json(&CliSuccessPayload::with_data(message, json!(data)));
    }

    if ranked.is_empty() {
        return Ok(langsniff::OTHER_LANGUAGE.to_string());
    }
    Ok(ranked
        .iter()
        .map(|(language, score)| format!("{:>12.4}\t{}", score, language))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Execute the summary command.
///
/// A file argument gets a single-file report; a directory gets the
/// language breakdown.
fn execute_summary(
    registry: &Registry,
    path: &Path,
    options: SummaryOptions,
    breakdown: bool,
    json: bool,
) -> Result<String, SniffError> {
    if path.is_file() {
        let report = analyze_file(registry, path, options.limit)?;
        if json {
            let message = format!("{}: {}", report.filename, report.language);
            return to_json(&CliSuccessPayload::with_data(message, json!(report)));
        }
        return Ok(report.render());
    }

    let summary = Summary::scan(registry, path, options)?;
    if json {
        let message = format!("{} file(s) detected", summary.files.len());
        return to_json(&CliSuccessPayload::with_data(message, json!(summary.by_language())));
    }
    if breakdown {
        return Ok(summary.render_breakdown());
    }
    Ok(summary.render_percentages())
}

/// Execute the frequencies command.
fn execute_frequencies(samples: &Path, output: Option<&Path>, json: bool) -> Result<String, SniffError> {
    let table = FrequencyTable::from_samples_dir(samples)?;
    let rendered = table.to_json_pretty()?;

    let Some(output) = output else {
        return Ok(rendered);
    };

    std::fs::write(output, &rendered).map_err(|e| SniffError::io(output, e))?;
    let message = format!(
        "Wrote frequencies for {} languages ({} samples) to {}",
        table.languages.len(),
        table.languages_total,
        output.display()
    );
    if json {
        return to_json(&CliSuccessPayload::message_only(message));
    }
    Ok(message)
}

fn to_json(payload: &CliSuccessPayload) -> Result<String, SniffError> {
    Ok(serde_json::to_string_pretty(payload)?)
}
