//! Integration tests for CLI wiring.
//!
//! The binary is driven through std::process::Command and checked for
//! exit codes, text output and JSON payloads.

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use std::path::{Path, PathBuf};
    use std::process::{Command, Output};
    use tempfile::TempDir;

    /// Get the path to the langsniff binary.
    fn get_langsniff_binary() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_langsniff"))
    }

    fn run(args: &[&str]) -> Output {
        Command::new(get_langsniff_binary())
            .args(args)
            .output()
            .expect("Failed to execute langsniff")
    }

    fn stdout_json(output: &Output) -> Value {
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().expect("temp path is not UTF-8")
    }

    fn workspace() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("main.rs"), "use std::env;\n\nfn main() {}\n").unwrap();
        std::fs::write(src.join("tool.py"), "import sys\nprint(sys.argv)\n").unwrap();
        std::fs::write(dir.path().join("Dockerfile"), "FROM alpine\n").unwrap();
        dir
    }

    #[test]
    fn test_detect_text_output() {
        let dir = workspace();
        let main_rs = dir.path().join("src/main.rs");
        let dockerfile = dir.path().join("Dockerfile");

        let output = run(&["detect", path_str(&main_rs), path_str(&dockerfile)]);
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<_> = stdout.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("main.rs: Rust (content)"), "{}", lines[0]);
        assert!(lines[1].ends_with("Dockerfile: Dockerfile (filename)"), "{}", lines[1]);
    }

    #[test]
    fn test_detect_json_output() {
        let dir = workspace();
        let tool = dir.path().join("src/tool.py");

        let output = run(&["detect", "--json", path_str(&tool)]);
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["data"][0]["language"], "Python");
        assert_eq!(json["data"][0]["strategy"], "extension");
        assert_eq!(json["data"][0]["safe"], true);
    }

    #[test]
    fn test_detect_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.rs");

        let output = run(&["--json", "detect", path_str(&missing)]);
        assert_eq!(output.status.code(), Some(1));

        let json = stdout_json(&output);
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["kind"], "Io");
        assert_eq!(json["error"]["file"], path_str(&missing));

        let output = run(&["detect", path_str(&missing)]);
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
    }

    #[test]
    fn test_detect_requires_files() {
        let output = run(&["detect"]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_classify_with_candidates() {
        let dir = workspace();
        let tool = dir.path().join("src/tool.py");

        let output = run(&[
            "classify",
            path_str(&tool),
            "-c",
            "Python",
            "-c",
            "Ruby",
            "--json",
        ]);
        assert!(output.status.success());

        let json = stdout_json(&output);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["language"], "Python");
        assert_eq!(json["message"], "Best match: Python");
    }

    #[test]
    fn test_classify_top_limits_output() {
        let dir = workspace();
        let tool = dir.path().join("src/tool.py");

        let output = run(&["classify", path_str(&tool), "--top", "3"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 3);
    }

    #[test]
    fn test_summary_directory() {
        let dir = workspace();

        let output = run(&["summary", path_str(dir.path()), "--json", "--mode", "file"]);
        assert!(output.status.success());

        let json = stdout_json(&output);
        assert_eq!(json["data"]["Rust"][0], "src/main.rs");
        assert_eq!(json["data"]["Python"][0], "src/tool.py");

        let output = run(&["summary", path_str(dir.path()), "--mode", "file", "--breakdown"]);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("33.33%\tDockerfile"), "{}", stdout);
        assert!(stdout.contains("\nRust\nsrc/main.rs\n"), "{}", stdout);
    }

    #[test]
    fn test_summary_single_file() {
        let dir = workspace();
        let main_rs = dir.path().join("src/main.rs");

        let output = run(&["summary", path_str(&main_rs)]);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("3 lines (2 sloc)"), "{}", stdout);
        assert!(stdout.contains("language:  Rust"), "{}", stdout);
    }

    #[test]
    fn test_frequencies_roundtrip_through_flag() {
        let dir = TempDir::new().unwrap();
        let samples = dir.path().join("samples");
        std::fs::create_dir_all(samples.join("Alpha")).unwrap();
        std::fs::create_dir_all(samples.join("Beta")).unwrap();
        std::fs::write(samples.join("Alpha/one.txt"), "zip zap zop\n").unwrap();
        std::fs::write(samples.join("Beta/two.txt"), "ping pong\n").unwrap();

        let table = dir.path().join("freq.json");
        let output = run(&["frequencies", path_str(&samples), "-o", path_str(&table)]);
        assert!(output.status.success());
        assert!(table.exists());

        let input = dir.path().join("input");
        std::fs::write(&input, "pong ping ping\n").unwrap();

        let output = run(&[
            "--frequencies",
            path_str(&table),
            "--json",
            "classify",
            path_str(&input),
        ]);
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json["data"][0]["language"], "Beta");
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_bad_catalog_reports_json_error() {
        let dir = workspace();
        let catalog = dir.path().join("catalog.json");
        std::fs::write(&catalog, "{ not json").unwrap();
        let main_rs = dir.path().join("src/main.rs");

        let output = run(&[
            "--json",
            "--catalog",
            path_str(&catalog),
            "detect",
            path_str(&main_rs),
        ]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout_json(&output)["error"]["kind"], "Json");
    }
}
