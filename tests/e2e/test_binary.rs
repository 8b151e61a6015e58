//! Integration tests for the flowchart-ascii binary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_flowchart-ascii"))
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run the binary and return stdout, asserting success.
fn render(input: &str, extra_args: &[&str]) -> String {
    let output = run_binary(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

#[test]
fn test_renders_from_stdin() {
    let out = render("flowchart LR\nA[Start] --> B[End]\n", &[]);
    assert_eq!(
        out,
        "┌───────┐      ┌─────┐\n│ Start │─────►│ End │\n└───────┘      └─────┘\n"
    );
}

#[test]
fn test_ascii_flag() {
    let out = render("flowchart TB\n    A --> B\n", &["--ascii"]);
    assert!(!out.contains('┌'), "Unicode char found in --ascii output");
    assert!(!out.contains('│'), "Unicode char found in --ascii output");
    assert!(out.contains('+') && out.contains('v'));
}

#[test]
fn test_direction_override_lr() {
    let src = "flowchart TB\n    A --> B --> C\n";
    let out_tb = render(src, &[]);
    let out_lr = render(src, &["--direction", "lr"]);
    let width = |s: &str| s.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    assert!(width(&out_lr) > width(&out_tb), "LR output should be wider");
    assert!(out_lr.lines().count() < out_tb.lines().count());
    assert!(out_lr.contains('►'));
}

#[test]
fn test_direction_override_bt() {
    let out = render("flowchart TB\n    A --> B\n", &["-d", "BT"]);
    let lines: Vec<&str> = out.lines().collect();
    let a_line = lines.iter().position(|l| l.contains('A')).unwrap();
    let b_line = lines.iter().position(|l| l.contains('B')).unwrap();
    assert!(b_line < a_line, "In BT layout, B (target) should appear above A (source)");
}

#[test]
fn test_invalid_direction_rejected_by_cli() {
    let output = run_binary("flowchart TB\nA\n", &["--direction", "sideways"]);
    assert!(!output.status.success());
}

#[test]
fn test_padding_widens_boxes() {
    let narrow = render("flowchart LR\nA\n", &[]);
    let wide = render("flowchart LR\nA\n", &["--padding", "3"]);
    assert_eq!(narrow.lines().next(), Some("┌───┐"));
    assert_eq!(wide.lines().next(), Some("┌───────┐"));
}

#[test]
fn test_error_exits_nonzero() {
    let output = run_binary("flowchart LR\nA --> B\nB --> A\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cycles are not supported"), "{stderr}");
}

#[test]
fn test_syntax_error_names_line() {
    let output = run_binary("flowchart LR\n\nA -> B\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3"), "{stderr}");
}

#[test]
fn test_fallback_prints_source() {
    let src = "sequenceDiagram\nA->>B: hi\n";
    let out = render(src, &["--fallback"]);
    assert_eq!(out, src);
}

#[test]
fn test_reads_from_file() {
    let dir = std::env::temp_dir().join("flowchart_ascii_test_read");
    fs::create_dir_all(&dir).ok();
    let input_file = dir.join("input.mmd");
    fs::write(&input_file, "flowchart LR\n    X --> Y\n").unwrap();

    let output = Command::new(binary_path())
        .arg(&input_file)
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains('X'), "Output should contain X");
    assert!(stdout.contains('Y'), "Output should contain Y");

    fs::remove_file(&input_file).ok();
    fs::remove_dir(&dir).ok();
}

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join("flowchart_ascii_test_write");
    fs::create_dir_all(&dir).ok();
    let out_file = dir.join("out.txt");

    let out_arg = out_file.to_str().unwrap();
    let stdout = render("flowchart TB\n    A --> B\n", &["--output", out_arg]);
    assert!(stdout.is_empty());
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.contains('A') && content.contains('B'));
    assert!(content.contains('▼'));

    fs::remove_file(&out_file).ok();
    fs::remove_dir(&dir).ok();
}
