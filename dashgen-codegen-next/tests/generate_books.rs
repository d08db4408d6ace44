//! End-to-end generation of the books example.

use std::fs;

use dashgen_codegen::schema::ResolvedInterface;
use dashgen_codegen_next::{Artifact, EmitError, Generator, LanguageCodegen, emit};
use dashgen_manifest::Interface;
use tempfile::TempDir;

const BOOKS: &str = r#"{"schema":{"title":"string"},"namingConvention":{"Users_1_000___":"Books","users_2_000___":"books","User_3_000___":"Book","user_4_000___":"book"}}"#;

const AUTHORS: &str = r#"{"schema":{"name":"string","born":"date"},"namingConvention":{"Users_1_000___":"Authors","users_2_000___":"authors","User_3_000___":"Author","user_4_000___":"author"}}"#;

#[test]
fn test_emitters_are_deterministic() {
    for artifact in Artifact::ALL {
        let first = emit(artifact, BOOKS).unwrap();
        let second = emit(artifact, BOOKS).unwrap();
        assert_eq!(first, second, "{} output changed between runs", artifact);
    }
}

#[test]
fn test_missing_resource_name_falls_back_to_example() {
    let json = r#"{"schema":{"title":"string"},"namingConvention":{"Users_1_000___":"Books","User_3_000___":"Book","user_4_000___":"book"}}"#;
    let interface: Interface = json.parse().unwrap();
    assert_eq!(interface.resource(), "example");

    let code = emit(Artifact::HomeButton, json).unwrap();
    assert!(code.contains("/dashboard/example/all"));
}

#[test]
fn test_home_button_links_to_resource() {
    let code = emit(Artifact::HomeButton, BOOKS).unwrap();
    assert!(code.contains(r#"href="/dashboard/books/all""#));

    let code = emit(Artifact::HomeButton, AUTHORS).unwrap();
    assert!(code.contains("/dashboard/authors/all"));
}

#[test]
fn test_custom_link_ignores_input() {
    assert_eq!(
        emit(Artifact::CustomLink, BOOKS).unwrap(),
        emit(Artifact::CustomLink, AUTHORS).unwrap()
    );
}

#[test]
fn test_malformed_json_is_an_error() {
    for artifact in Artifact::ALL {
        match emit(artifact, "{not valid json") {
            Err(EmitError::Input(err)) => assert!(err.is_parse()),
            other => panic!("expected parse error for {}, got {:?}", artifact, other),
        }
    }
}

#[test]
fn test_missing_naming_fields_are_listed() {
    let json = r#"{"schema":{},"namingConvention":{"users_2_000___":"books","User_3_000___":"Book"}}"#;
    let Err(EmitError::Rejected(errors)) = emit(Artifact::Types, json) else {
        panic!("expected rejection");
    };
    let missing: Vec<&str> = errors
        .iter()
        .filter(|d| d.message.starts_with("missing naming field"))
        .filter_map(|d| d.location.as_deref())
        .collect();
    assert_eq!(
        missing,
        vec![
            "namingConvention.Users_1_000___",
            "namingConvention.user_4_000___",
        ]
    );
    assert!(errors.iter().all(|d| !d.message.contains("undefined")));
}

#[test]
fn test_rejected_naming_renders_nothing() {
    let json = r#"{"schema":{"title":"string"},"namingConvention":{"Users_1_000___":"Posts","users_2_000___":"../posts","User_3_000___":"Blog Post","user_4_000___":"post"}}"#;
    for artifact in Artifact::ALL {
        assert!(
            matches!(emit(artifact, json), Err(EmitError::Rejected(_))),
            "{} rendered an interface the pipeline rejects",
            artifact
        );
    }
}

#[test]
fn test_generate_folder_moves_dashboard_files() {
    let json = r#"{"schema":{"title":"string"},"namingConvention":{"Users_1_000___":"Books","users_2_000___":"books","User_3_000___":"Book","user_4_000___":"book","use_generate_folder":true}}"#;
    let interface: Interface = json.parse().unwrap();
    let resolved = ResolvedInterface::resolve(&interface).unwrap();
    let paths: Vec<_> = Generator::new(&resolved)
        .preview()
        .into_iter()
        .map(|f| f.path)
        .collect();

    assert!(paths.contains(&"src/app/generate/books/components/HomeButton.tsx".to_string()));
    assert!(paths.contains(&"src/app/generate/books/all/page.tsx".to_string()));
    assert!(!paths.iter().any(|p| p.starts_with("src/app/dashboard")));
    assert!(paths.contains(&"src/models/Book.ts".to_string()));
}

#[test]
fn test_generate_writes_project_files() {
    let temp = TempDir::new().unwrap();
    let interface: Interface = BOOKS.parse().unwrap();
    let resolved = ResolvedInterface::resolve(&interface).unwrap();

    let result = Generator::new(&resolved).generate(temp.path()).unwrap();
    assert_eq!(result.written.len(), Artifact::ALL.len());
    assert!(result.skipped.is_empty());

    let page = fs::read_to_string(temp.path().join("src/app/dashboard/books/all/page.tsx")).unwrap();
    assert!(page.contains("export default async function BooksPage"));
}

#[test]
fn test_regenerate_keeps_db_helper_and_overwrites_the_rest() {
    let temp = TempDir::new().unwrap();
    let interface: Interface = BOOKS.parse().unwrap();
    let resolved = ResolvedInterface::resolve(&interface).unwrap();
    let generator = Generator::new(&resolved);
    generator.generate(temp.path()).unwrap();

    let db = temp.path().join("src/lib/db.ts");
    let types = temp.path().join("src/app/dashboard/books/types.ts");
    fs::write(&db, "// customised\n").unwrap();
    fs::write(&types, "// stale\n").unwrap();

    let result = generator.generate(temp.path()).unwrap();
    assert_eq!(result.skipped, vec!["src/lib/db.ts".to_string()]);
    assert_eq!(fs::read_to_string(&db).unwrap(), "// customised\n");
    assert!(fs::read_to_string(&types).unwrap().contains("export interface Book {"));
}
