//! End-to-end generation over a temporary crate.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use arb_i18n_codegen::config::GeneratorSettings;
use arb_i18n_codegen::{
    ErrorKind,
    RunError,
    run,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn crate_with(name: &str, resources: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("Cargo.toml"),
        format!("[package]\nname = \"{name}\"\nversion = \"0.1.0\"\n"),
    )
    .unwrap();
    for (file, content) in resources {
        let path = temp_dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp_dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn test_generates_sorted_table_for_locale() {
    let project = crate_with(
        "app",
        &[(
            "fr.arb",
            r#"{
                "@@locale": "fr",
                "hello": "Bonjour",
                "@hello": {"description": "Greeting"},
                "bye": "Au revoir"
            }"#,
        )],
    );

    let summary = run(&GeneratorSettings::default(), project.path()).await.unwrap();

    assert_eq!(summary.generated.len(), 1);
    let text = read(&project.path().join("fr_i18n.rs"));
    assert!(text.starts_with("// Code generated by arb-i18n-codegen. DO NOT EDIT.\n"));
    assert!(text.contains(r#"pub const FR_LOCALE: &str = "fr";"#));
    assert!(text.contains(r#"pub const FR_MODULE: &str = "app";"#));
    assert!(!text.contains("Greeting"));
    assert!(!text.contains("@@locale"));
    let bye = text.find(r#"("bye", "Au revoir")"#).unwrap();
    let hello = text.find(r#"("hello", "Bonjour")"#).unwrap();
    assert!(bye < hello);
}

#[tokio::test]
async fn test_regeneration_is_byte_identical() {
    let project = crate_with("app", &[("en.arb", r#"{"b": "B", "a": "A"}"#)]);
    let output = project.path().join("en_i18n.rs");

    run(&GeneratorSettings::default(), project.path()).await.unwrap();
    let first = fs::read(&output).unwrap();
    run(&GeneratorSettings::default(), project.path()).await.unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_key_order_does_not_change_output() {
    let forward = crate_with("app", &[("de.arb", r#"{"a": "1", "b": "2", "c": "3"}"#)]);
    let backward = crate_with("app", &[("de.arb", r#"{"c": "3", "a": "1", "b": "2"}"#)]);

    run(&GeneratorSettings::default(), forward.path()).await.unwrap();
    run(&GeneratorSettings::default(), backward.path()).await.unwrap();

    assert_eq!(read(&forward.path().join("de_i18n.rs")), read(&backward.path().join("de_i18n.rs")));
}

#[tokio::test]
async fn test_metadata_only_file_yields_empty_table() {
    let project = crate_with("app", &[("ja.arb", r#"{"@@locale": "ja", "@title": {}}"#)]);

    run(&GeneratorSettings::default(), project.path()).await.unwrap();

    let text = read(&project.path().join("ja_i18n.rs"));
    assert!(text.contains("pub static JA: &[(&str, &str)] = &[];"));
}

#[tokio::test]
async fn test_region_subtag_and_lib_name() {
    let project = crate_with("ignored-name", &[("l10n/pt-BR.arb", r#"{"yes": "Sim"}"#)]);
    fs::write(
        project.path().join("Cargo.toml"),
        "[package]\nname = \"ignored-name\"\n\n[lib]\nname = \"portal_core\"\n",
    )
    .unwrap();
    let settings = GeneratorSettings {
        file_pattern: "l10n/*.arb".to_string(),
        output_dir: "src/generated".into(),
        ..Default::default()
    };

    run(&settings, project.path()).await.unwrap();

    let text = read(&project.path().join("src/generated/pt-BR_i18n.rs"));
    assert!(text.contains(r#"pub const PT_BR_LOCALE: &str = "pt-BR";"#));
    assert!(text.contains(r#"pub const PT_BR_MODULE: &str = "portal_core";"#));
}

#[tokio::test]
async fn test_crate_name_comes_from_parent_manifest() {
    let project = crate_with("my-app", &[("assets/i18n/en.arb", r#"{"a": "b"}"#)]);
    let resources_dir = project.path().join("assets/i18n");

    run(&GeneratorSettings::default(), &resources_dir).await.unwrap();

    let text = read(&resources_dir.join("en_i18n.rs"));
    assert!(text.contains(r#"pub const EN_MODULE: &str = "my_app";"#));
}

#[tokio::test]
async fn test_invalid_locale_tag_writes_nothing() {
    let project = crate_with("app", &[("not-a-locale.arb", r#"{"a": "b"}"#)]);

    let err = run(&GeneratorSettings::default(), project.path()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidLocaleTag);
    assert!(err.to_string().contains("not-a-locale.arb"));
    assert!(!project.path().join("not-a-locale_i18n.rs").exists());
}

#[tokio::test]
async fn test_malformed_file_keeps_previous_output() {
    let project = crate_with("app", &[("fr.arb", r#"{"a": "b"}"#)]);
    run(&GeneratorSettings::default(), project.path()).await.unwrap();
    let before = read(&project.path().join("fr_i18n.rs"));

    fs::write(project.path().join("fr.arb"), r#"{"a": ["b"]}"#).unwrap();
    let err = run(&GeneratorSettings::default(), project.path()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedResourceFile);
    assert_eq!(read(&project.path().join("fr_i18n.rs")), before);
}

#[tokio::test]
async fn test_keep_going_reports_incomplete_run() {
    let project = crate_with(
        "app",
        &[("en.arb", r#"{"a": "b"}"#), ("fr.arb", "[]"), ("it.arb", r#"{"a": "c"}"#)],
    );
    let settings = GeneratorSettings { keep_going: true, jobs: Some(0), ..Default::default() };

    let err = run(&settings, project.path()).await.unwrap_err();

    match err {
        RunError::Incomplete { failed, total } => {
            assert_eq!((failed, total), (1, 3));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(project.path().join("en_i18n.rs").is_file());
    assert!(project.path().join("it_i18n.rs").is_file());
    assert!(!project.path().join("fr_i18n.rs").exists());
}

#[tokio::test]
async fn test_escaped_values_survive_round_trip() {
    let project = crate_with(
        "app",
        &[("en.arb", r#"{"quote": "Say \"hi\"\n", "path": "C:\\temp", "brace": "{name}"}"#)],
    );

    run(&GeneratorSettings::default(), project.path()).await.unwrap();

    let text = read(&project.path().join("en_i18n.rs"));
    assert!(text.contains(r#""Say \"hi\"\n""#));
    assert!(text.contains(r#""C:\\temp""#));
    assert!(text.contains(r#""{name}""#));
}

#[tokio::test]
async fn test_invalid_glob_is_a_glob_pattern_error() {
    let project = crate_with("app", &[("en.arb", r#"{"a": "b"}"#)]);
    let settings = GeneratorSettings { file_pattern: "l10n/[*.arb".to_string(), ..Default::default() };

    let err = run(&settings, project.path()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GlobPattern);
    assert!(err.to_string().contains("l10n/[*.arb"));
}

#[tokio::test]
async fn test_same_locale_in_two_directories_is_rejected() {
    let project = crate_with(
        "app",
        &[("a/fr.arb", r#"{"a": "1"}"#), ("b/fr.arb", r#"{"a": "2"}"#)],
    );
    let settings = GeneratorSettings { file_pattern: "*/fr.arb".to_string(), ..Default::default() };

    let err = run(&settings, project.path()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateOutput);
    assert!(!project.path().join("fr_i18n.rs").exists());
}

#[tokio::test]
async fn test_unknown_language_file_is_rejected() {
    let project = crate_with("app", &[("messages.arb", r#"{"a": "b"}"#)]);

    let err = run(&GeneratorSettings::default(), project.path()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidLocaleTag);
    assert!(!project.path().join("messages_i18n.rs").exists());
}
