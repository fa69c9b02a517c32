//! Language breakdown of a directory tree.
//!
//! [`Summary::scan`] walks a directory, skips everything that is not
//! first-party source (vendored or generated code, hidden paths,
//! documentation, configuration, binaries), detects the language of each remaining file and
//! aggregates by file count, line count or byte size. [`analyze_file`]
//! reports on a single file.

use crate::catalog::LanguageType;
use crate::error::{Result, SniffError};
use crate::files;
use crate::registry::Registry;
use crate::OTHER_LANGUAGE;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

/// Default read limit in kilobytes.
pub const DEFAULT_LIMIT_KB: u64 = 16 * 1024;

/// What each file contributes to its language's share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One per file.
    File,
    /// Number of lines.
    Line,
    /// Size in bytes.
    #[default]
    Byte,
}

/// Scan settings.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    /// Aggregation unit.
    pub mode: Mode,
    /// Keep data and prose languages too.
    pub all: bool,
    /// Bytes read from each file for detection; 0 reads everything.
    pub limit: u64,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            all: false,
            limit: DEFAULT_LIMIT_KB * 1024,
        }
    }
}

/// One detected file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    /// Path relative to the scanned root, `/`-separated.
    pub path: String,
    /// Detected language.
    pub language: String,
    /// Line count of the inspected content.
    pub lines: u64,
    /// File size on disk.
    pub bytes: u64,
}

/// Detected files of a directory tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Aggregation unit used for percentages.
    pub mode: Mode,
    /// Every kept file, sorted by path.
    pub files: Vec<FileEntry>,
}

impl Summary {
    /// Walk `root` and detect every first-party file.
    pub fn scan(registry: &Registry, root: &Path, options: SummaryOptions) -> Result<Self> {
        if !root.is_dir() {
            return Err(SniffError::io(
                root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            ));
        }

        let pattern = format!("{}/**/*", glob::Pattern::escape(&root.to_string_lossy()));
        let paths = glob::glob(&pattern).map_err(|e| SniffError::Glob {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }

            let Some(relative) = relative_path(root, &path) else {
                continue;
            };
            if skip_path(registry, &relative) {
                log::trace!("skipping {}", relative);
                continue;
            }

            let content = match read_prefix(&path, options.limit) {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("{}", e);
                    continue;
                }
            };
            if files::is_binary(&content) {
                continue;
            }
            if files::is_generated(&relative, &content) {
                log::trace!("skipping generated {}", relative);
                continue;
            }

            let language = registry.get_language(&relative, &content);
            if language == OTHER_LANGUAGE {
                continue;
            }
            if !options.all && !is_reported(registry.language_type(language)) {
                continue;
            }

            let bytes = path.metadata().map(|m| m.len()).unwrap_or(content.len() as u64);
            files.push(FileEntry {
                path: relative,
                language: language.to_string(),
                lines: count_lines(&content).0,
                bytes,
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("{}: {} files detected", root.display(), files.len());

        Ok(Self {
            mode: options.mode,
            files,
        })
    }

    /// Files grouped by language.
    pub fn by_language(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for file in &self.files {
            grouped
                .entry(file.language.as_str())
                .or_default()
                .push(file.path.as_str());
        }
        grouped
    }

    /// Per-language totals in the summary's [`Mode`].
    pub fn totals(&self) -> BTreeMap<&str, u64> {
        let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
        for file in &self.files {
            let amount = match self.mode {
                Mode::File => 1,
                Mode::Line => file.lines,
                Mode::Byte => file.bytes,
            };
            *totals.entry(file.language.as_str()).or_insert(0) += amount;
        }
        totals
    }

    /// Share of each language in percent, largest first.
    pub fn percentages(&self) -> Vec<(&str, f64)> {
        let totals = self.totals();
        let sum: u64 = totals.values().sum();
        if sum == 0 {
            return Vec::new();
        }

        let mut shares: Vec<(&str, f64)> = totals
            .into_iter()
            .map(|(language, amount)| (language, amount as f64 * 100.0 / sum as f64))
            .collect();
        shares.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        shares
    }

    /// One `NN.NN%<TAB>Language` line per language.
    pub fn render_percentages(&self) -> String {
        let mut out = String::new();
        for (language, share) in self.percentages() {
            let _ = writeln!(out, "{:.2}%\t{}", share, language);
        }
        out
    }

    /// Percentages followed by the file list of each language.
    pub fn render_breakdown(&self) -> String {
        let mut out = self.render_percentages();
        let grouped = self.by_language();
        for (language, _) in self.percentages() {
            let _ = writeln!(out, "\n{}", language);
            for path in grouped.get(language).into_iter().flatten() {
                let _ = writeln!(out, "{}", path);
            }
        }
        out
    }
}

/// Broad nature of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileKind {
    /// Raster image, by extension.
    Image,
    /// Contains NUL bytes.
    Binary,
    /// Anything else.
    Text,
}

/// Details about one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    /// Path as given.
    pub filename: String,
    /// Total lines.
    pub lines: u64,
    /// Non-blank lines.
    pub sloc: u64,
    /// Image, binary or text.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Detected language; empty for images and binaries.
    pub language: String,
    /// True for vendored paths.
    pub vendored: bool,
    /// True for tool output such as lock files or minified bundles.
    pub generated: bool,
}

impl FileReport {
    /// Human-readable multi-line rendering.
    pub fn render(&self) -> String {
        let kind = match self.kind {
            FileKind::Image => "Image",
            FileKind::Binary => "Binary",
            FileKind::Text => "Text",
        };
        let mut out = format!(
            "{}: {} lines ({} sloc)\n  type:      {}\n",
            self.filename, self.lines, self.sloc, kind
        );
        if !self.language.is_empty() {
            let _ = writeln!(out, "  language:  {}", self.language);
        }
        if self.vendored {
            out.push_str("  vendored:  true\n");
        }
        if self.generated {
            out.push_str("  generated: true\n");
        }
        out
    }
}

/// Inspect a single file.
pub fn analyze_file(registry: &Registry, path: &Path, limit: u64) -> Result<FileReport> {
    let content = read_prefix(path, limit)?;
    let filename = path.to_string_lossy().replace('\\', "/");
    let (lines, sloc) = count_lines(&content);

    let kind = if files::is_image(&filename) {
        FileKind::Image
    } else if files::is_binary(&content) {
        FileKind::Binary
    } else {
        FileKind::Text
    };

    let language = match kind {
        FileKind::Text => registry.get_language(&filename, &content).to_string(),
        FileKind::Image | FileKind::Binary => String::new(),
    };

    Ok(FileReport {
        vendored: files::is_vendor(&filename),
        generated: kind == FileKind::Text && files::is_generated(&filename, &content),
        filename,
        lines,
        sloc,
        kind,
        language,
    })
}

fn is_reported(kind: LanguageType) -> bool {
    matches!(kind, LanguageType::Programming | LanguageType::Markup)
}

fn skip_path(registry: &Registry, relative: &str) -> bool {
    relative.split('/').any(files::is_dot_file)
        || files::is_vendor(relative)
        || files::is_documentation(relative)
        || registry.is_configuration(relative)
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!parts.is_empty()).then(|| parts.join("/"))
}

fn read_prefix(path: &Path, limit: u64) -> Result<Vec<u8>> {
    let mut file = std::fs::File::open(path).map_err(|e| SniffError::io(path, e))?;
    let mut content = Vec::new();
    let result = if limit == 0 {
        file.read_to_end(&mut content)
    } else {
        file.take(limit).read_to_end(&mut content)
    };
    result.map_err(|e| SniffError::io(path, e))?;
    Ok(content)
}

/// `(lines, non-blank lines)` of `content`.
///
/// A final line without a trailing newline still counts.
pub fn count_lines(content: &[u8]) -> (u64, u64) {
    if content.is_empty() {
        return (0, 0);
    }

    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let mut lines = 0;
    let mut sloc = 0;
    for line in body.split(|&b| b == b'\n') {
        lines += 1;
        if line.iter().any(|b| !b.is_ascii_whitespace()) {
            sloc += 1;
        }
    }
    (lines, sloc)
}
