// ABOUTME: End-to-end tests for the relnum binary's library entry point
// ABOUTME: Each test writes a file and a config to a temp dir and checks the printed gutter

use clap::Parser;
use relnum::{Cli, run};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper for laying out a document and its configuration
struct Fixture {
    temp_dir: TempDir,
}

impl Fixture {
    fn new(text: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("doc.txt"), text).expect("Failed to write document");
        fs::write(temp_dir.path().join("relnum.toml"), "").expect("Failed to write config");
        Self { temp_dir }
    }

    fn with_config(self, config: &str) -> Self {
        fs::write(self.temp_dir.path().join("relnum.toml"), config)
            .expect("Failed to write config");
        self
    }

    fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    fn cli(&self, extra: &[&str]) -> Cli {
        let doc = self.path("doc.txt");
        let config = self.path("relnum.toml");
        let mut args = vec![
            "relnum".to_string(),
            doc.display().to_string(),
            "--config".to_string(),
            config.display().to_string(),
        ];
        args.extend(extra.iter().map(|arg| arg.to_string()));
        Cli::try_parse_from(args).expect("Failed to parse arguments")
    }

    fn output(&self, extra: &[&str]) -> String {
        let mut out = Vec::new();
        run(&self.cli(extra), &mut out).expect("relnum failed");
        String::from_utf8(out).expect("Output is not UTF-8")
    }
}

fn numbered_lines(count: usize) -> String {
    (1..=count)
        .map(|n| format!("line {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_small_file_gutter() {
    let fixture = Fixture::new("a\nb\nc\nd\ne");

    let output = fixture.output(&["--line", "3", "--no-color"]);

    assert_eq!(output, "2 │ a\n1 │ b\n3 │ c\n1 │ d\n2 │ e\n");
}

#[test]
fn test_hundred_line_viewport() {
    let fixture = Fixture::new(&numbered_lines(100));

    let output = fixture.output(&["-l", "50", "-t", "41", "-H", "20", "--no-color"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], " 9 │ line 41");
    assert_eq!(lines[5], " 4 │ line 46");
    assert_eq!(lines[9], "50 │ line 50");
    assert_eq!(lines[19], "10 │ line 60");
}

#[test]
fn test_html_prints_every_phantom() {
    let fixture = Fixture::new(&numbered_lines(100));

    let output = fixture.output(&["-l", "50", "-t", "41", "--html"]);

    assert_eq!(output.matches(r#"<body id="RelativeLineNumbers">"#).count(), 41);
    assert!(output.contains(r#"<div class="num50">50</div>"#));
    assert!(output.contains(r#"<div class="num20">20</div>"#));
}

#[test]
fn test_ansi_colors_follow_config() {
    let fixture = Fixture::new("a\nb\nc").with_config(
        r##"
[relative_line_numbers]
color = "#010203"
zero_color = "#0a0b0c"
"##,
    );

    let output = fixture.output(&["--line", "2"]);

    assert!(output.contains("\x1b[38;2;10;11;12m2\x1b[0m │ b"));
    assert!(output.contains("\x1b[38;2;1;2;3m1\x1b[0m │ a"));
}

#[test]
fn test_disabled_prints_blank_gutter() {
    let fixture = Fixture::new("a\nb").with_config("[relative_line_numbers]\nenabled = false\n");

    let output = fixture.output(&["--no-color"]);

    assert_eq!(output, "  │ a\n  │ b\n");
}

#[test]
fn test_maximum_height_shows_rest_of_file() {
    let fixture = Fixture::new(&numbered_lines(8));
    let max_height = u64::MAX.to_string();

    let output = fixture.output(&["-l", "6", "-t", "5", "-H", max_height.as_str(), "--no-color"]);

    assert_eq!(output, "1 │ line 5\n6 │ line 6\n1 │ line 7\n2 │ line 8\n");
}

#[test]
fn test_cursor_past_end_clamps_to_last_line() {
    let fixture = Fixture::new("a\nb\nc");

    let output = fixture.output(&["--line", "40", "--no-color"]);

    assert_eq!(output, "2 │ a\n1 │ b\n3 │ c\n");
}

#[test]
fn test_missing_document_is_an_error() {
    let fixture = Fixture::new("a");
    fs::remove_file(fixture.path("doc.txt")).expect("Failed to remove document");

    let mut out = Vec::new();
    let err = run(&fixture.cli(&[]), &mut out).unwrap_err();

    assert!(err.to_string().contains("doc.txt"));
    assert!(out.is_empty());
}
