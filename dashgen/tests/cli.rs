//! End-to-end tests running the `dashgen` binary in a temporary project.

use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

const BOOKS: &str = r#"{
  "schema": { "title": "string", "pages": "number" },
  "namingConvention": {
    "Users_1_000___": "Books",
    "users_2_000___": "books",
    "User_3_000___": "Book",
    "user_4_000___": "book"
  }
}"#;

fn dashgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(PathBuf::from(env!("CARGO_BIN_EXE_dashgen")))
        .args(args)
        .current_dir(dir)
        .env("DASHGEN_STATE_DIR", dir.join(".state"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dashgen")
}

fn project(interface: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("interface.json"), interface).unwrap();
    temp
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn generate_writes_files_and_records_history() {
    let temp = project(BOOKS);
    let output = dashgen(temp.path(), &["generate"]);

    assert!(output.status.success(), "{:?}", output);
    assert!(
        temp.path()
            .join("src/app/dashboard/books/components/HomeButton.tsx")
            .exists()
    );
    assert!(temp.path().join("src/models/Book.ts").exists());
    assert!(temp.path().join(".state/interfaces.json").exists());

    let history = dashgen(temp.path(), &["history", "list"]);
    assert!(stdout(&history).contains("History (1 of at most 20)"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = project(BOOKS);
    let output = dashgen(temp.path(), &["generate", "--dry-run", "--only", "home-button"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(r#"href="/dashboard/books/all""#));
    assert!(!temp.path().join("src").exists());
}

#[test]
fn check_rejects_malformed_json() {
    let temp = project("{not valid json");
    let output = dashgen(temp.path(), &["check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse interface JSON"));
}

#[test]
fn check_lists_missing_naming_fields() {
    let temp = project(r#"{"schema":{"title":"string"}}"#);
    let output = dashgen(temp.path(), &["check", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let locations: Vec<_> = report["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["location"].as_str())
        .collect();
    assert!(locations.contains(&"namingConvention.User_3_000___"));
}

#[test]
fn emit_prints_custom_link() {
    let temp = project(BOOKS);
    let output = dashgen(temp.path(), &["emit", "custom-link"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("export default function CustomLink"));
}

#[test]
fn emit_refuses_invalid_naming() {
    let temp = project(
        r#"{
  "schema": { "title": "string" },
  "namingConvention": {
    "Users_1_000___": "Posts",
    "users_2_000___": "../posts",
    "User_3_000___": "Blog Post",
    "user_4_000___": "post"
  }
}"#,
    );
    let output = dashgen(temp.path(), &["emit", "types"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'Blog Post' is not a valid TypeScript identifier"));
}

#[test]
fn emit_reports_errors_against_input_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("other.json"), "{not valid json").unwrap();
    let output = dashgen(temp.path(), &["emit", "types", "-i", "other.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("other.json"));
    assert!(!stderr.contains("interface.json"));
}

#[test]
fn init_then_generate() {
    let temp = TempDir::new().unwrap();
    let init = dashgen(temp.path(), &["init", "author"]);
    assert!(init.status.success(), "{:?}", init);
    assert!(temp.path().join("dashgen.toml").exists());

    let generate = dashgen(temp.path(), &["generate"]);
    assert!(generate.status.success(), "{:?}", generate);
    assert!(temp.path().join("src/models/Author.ts").exists());
}

#[test]
fn history_save_show_remove() {
    let temp = project(BOOKS);
    assert!(dashgen(temp.path(), &["history", "save", "shelf"]).status.success());

    let show = dashgen(temp.path(), &["history", "show", "shelf"]);
    assert!(stdout(&show).contains("\"users_2_000___\": \"books\""));

    assert!(dashgen(temp.path(), &["history", "remove", "shelf"]).status.success());
    assert!(!dashgen(temp.path(), &["history", "show", "shelf"]).status.success());
}
