use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn softreg() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("softreg"))
}

#[test]
fn scan_reports_stats_as_jsonl() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("a.py"),
        "x = 1  # comment\n\ndef f():\n    return x\n",
    );
    write_file(&temp.path().join("node_modules/skip.js"), "ignored();\n");

    let mut cmd = softreg();
    cmd.arg("scan").arg(temp.path()).arg("--format").arg("jsonl");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 1);

    let stats = &items[0];
    assert_eq!(stats["file_count"], 1);
    assert_eq!(stats["effective_lines"], 3);
    assert_eq!(stats["total_pages"], 1);
    // the export set is always resized to the 60-page target
    assert_eq!(stats["selected_pages"], 60);
    assert!(stats["digest"].as_str().unwrap().len() == 16);
}

#[test]
fn scan_text_format_is_human_readable() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("main.rs"), "fn main() {}\n");

    softreg()
        .arg("scan")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: 1"))
        .stdout(predicate::str::contains("Effective lines: 1"))
        .stdout(predicate::str::contains("Export pages: 60"));
}

#[test]
fn scan_empty_project_fails() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("README.md"), "# not source material\n");

    softreg()
        .arg("scan")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable source files"));
}

#[test]
fn scan_comment_only_project_fails() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.rs"), "// only comments\n\n/* here */\n");

    softreg().arg("scan").arg(temp.path()).assert().failure();
}

#[test]
fn scan_is_deterministic_across_runs() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("b.py"), "y = 2\n");
    write_file(&temp.path().join("a.py"), "x = 1\n");
    write_file(&temp.path().join("sub/c.py"), "def h():\n    return 3\n");

    let run = || {
        let mut cmd = softreg();
        cmd.arg("scan").arg(temp.path()).arg("--format").arg("jsonl");
        let assert = cmd.assert().success();
        parse_jsonl(&assert.get_output().stdout)
    };

    assert_eq!(run(), run());
}

#[test]
fn config_file_overrides_targets() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.rs"), "fn main() {\n}\n");
    let config_path = temp.path().join("softreg.json");
    write_file(&config_path, r#"{"lines_per_page": 2, "target_pages": 3}"#);

    let mut cmd = softreg();
    cmd.arg("--config")
        .arg(&config_path)
        .arg("scan")
        .arg(temp.path())
        .arg("--format")
        .arg("jsonl");

    let assert = cmd.assert().success();
    let stats = &parse_jsonl(&assert.get_output().stdout)[0];
    assert_eq!(stats["selected_pages"], 3);
    assert_eq!(stats["total_pages"], 1);
}

#[test]
fn export_all_mode_lists_numbered_lines() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), "x = 1\ndef f():\n    return x\n");

    softreg()
        .arg("export")
        .arg(temp.path())
        .arg("--header")
        .arg("MyApp v1.0")
        .arg("--mode")
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MyApp v1.0\n"))
        .stdout(predicate::str::contains("Compiled: "))
        .stdout(predicate::str::contains("    1  x = 1"))
        .stdout(predicate::str::contains("    3      return x"));
}

#[test]
fn export_selected_mode_pads_to_target() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.rs"), "fn main() {\n}\n");
    let config_path = temp.path().join("softreg.json");
    write_file(&config_path, r#"{"lines_per_page": 2, "target_pages": 2}"#);

    let mut cmd = softreg();
    cmd.arg("--config")
        .arg(&config_path)
        .arg("export")
        .arg(temp.path())
        .arg("--header")
        .arg("h");

    let assert = cmd.assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    // 4 target lines: 2 cyclic pad lines prepended before the real content
    let numbered: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("    "))
        .collect();
    assert_eq!(numbered.len(), 4);
    assert_eq!(numbered[0], "    1  fn main() {");
    assert_eq!(numbered[1], "    2  }");
    assert_eq!(numbered[2], "    3  fn main() {");
    assert_eq!(numbered[3], "    4  }");
    // pages separated by a form feed, header repeated on each
    assert_eq!(out.matches('\u{000C}').count(), 1);
    assert_eq!(out.matches("h\n").count(), 2);
}

#[test]
fn export_writes_listing_file() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), "x = 1\n");
    let out_path = temp.path().join("listing.txt");

    softreg()
        .arg("export")
        .arg(temp.path())
        .arg("--header")
        .arg("MyApp v1.0")
        .arg("--mode")
        .arg("all")
        .arg("--out")
        .arg(&out_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote "));

    let listing = fs::read_to_string(&out_path).unwrap();
    assert!(listing.starts_with("MyApp v1.0\n"));
    assert!(listing.contains("    1  x = 1"));
}

#[test]
fn export_empty_project_fails() {
    let temp = tempdir().unwrap();

    softreg()
        .arg("export")
        .arg(temp.path())
        .arg("--header")
        .arg("h")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable source files"));
}

#[test]
fn export_rejects_unknown_mode() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), "x = 1\n");

    softreg()
        .arg("export")
        .arg(temp.path())
        .arg("--header")
        .arg("h")
        .arg("--mode")
        .arg("middle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export mode"));
}
