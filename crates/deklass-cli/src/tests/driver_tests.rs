use crate::args::CliArgs;
use crate::driver::*;
use clap::Parser;
use deklass::diagnostics::diagnostic_codes;
use std::path::{Path, PathBuf};

const BOOK: &str = "class Book {\n  addBook() { }\n  static getBook() { return 1; }\n}\n";

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["deklass"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn output_path_inserts_suffix_before_extension() {
    assert_eq!(output_path(Path::new("code.js"), "v2"), PathBuf::from("codev2.js"));
    assert_eq!(
        output_path(Path::new("dir/a.b.js"), "v2"),
        PathBuf::from("dir/a.bv2.js")
    );
    assert_eq!(output_path(Path::new("noext"), "v2"), PathBuf::from("noextv2"));
    assert_eq!(
        output_path(Path::new("../example/code.js"), "v2"),
        PathBuf::from("../example/codev2.js")
    );
}

#[test]
fn run_writes_sibling_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), BOOK).unwrap();

    let result = run(&args(&[]), dir.path()).unwrap();
    let expected_path = dir.path().join("codev2.js");
    assert_eq!(
        result.outcome,
        RunOutcome::Written {
            path: expected_path.clone(),
            classes: 1
        }
    );
    assert!(result.diagnostics.is_empty());
    assert_eq!(
        std::fs::read_to_string(expected_path).unwrap(),
        "function Book() {}\nBook.prototype.addBook = function() {  }\nBook.getBook = function() { return 1; }\n"
    );
}

#[test]
fn run_prints_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("book.js"), BOOK).unwrap();

    let result = run(&args(&["book.js", "--stdout"]), dir.path()).unwrap();
    match result.outcome {
        RunOutcome::Printed(text) => assert!(text.starts_with("function Book() {}\n")),
        other => panic!("expected printed output, got {other:?}"),
    }
    assert!(!dir.path().join("bookv2.js").exists());
}

#[test]
fn run_without_class_reports_no_class() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), "let x = 1;").unwrap();

    let result = run(&args(&[]), dir.path()).unwrap();
    assert_eq!(result.outcome, RunOutcome::NoClass);
    assert!(!dir.path().join("codev2.js").exists());
}

#[test]
fn run_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&args(&["absent.js"]), dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}

#[test]
fn run_refuses_to_overwrite_input() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), BOOK).unwrap();

    let err = run(&args(&["-o", "code.js"]), dir.path()).unwrap_err();
    assert!(err.to_string().contains("would overwrite the input"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("code.js")).unwrap(),
        BOOK
    );
}

#[test]
fn run_uses_config_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), "class A { } class B { }").unwrap();
    std::fs::write(
        dir.path().join("deklass.json"),
        r#"{ "outputSuffix": ".out", "emitAll": true }"#,
    )
    .unwrap();

    let result = run(&args(&[]), dir.path()).unwrap();
    let path = dir.path().join("code.out.js");
    assert_eq!(
        result.outcome,
        RunOutcome::Written {
            path: path.clone(),
            classes: 2
        }
    );
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "function A() {}\n\nfunction B() {}\n"
    );
}

#[test]
fn run_with_invalid_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), BOOK).unwrap();
    std::fs::write(dir.path().join("custom.json"), "{ not json").unwrap();

    let err = run(&args(&["-p", "custom.json"]), dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse"));
}

#[test]
fn run_lists_tokens_as_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), "class A { }").unwrap();

    let result = run(&args(&["--listTokens"]), dir.path()).unwrap();
    let RunOutcome::Printed(text) = result.outcome else {
        panic!("expected printed tokens");
    };
    let tokens: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(tokens.as_array().map(Vec::len), Some(5));
    assert_eq!(tokens[0]["kind"], "KEYWORD");
    assert_eq!(tokens[0]["value"], "class");
}

#[test]
fn run_shows_ast_even_without_class() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), "x;").unwrap();

    let result = run(&args(&["--showAst"]), dir.path()).unwrap();
    assert_eq!(result.outcome, RunOutcome::Printed("[]\n".to_string()));
}

#[test]
fn run_surfaces_parser_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("code.js"), "class A { m() { x; }").unwrap();

    let result = run(&args(&["--stdout"]), dir.path()).unwrap();
    let codes: Vec<u32> = result.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![diagnostic_codes::CLASS_BODY_NOT_CLOSED]);
    assert_eq!(
        result.outcome,
        RunOutcome::Printed("function A() {}\nA.prototype.m = function() { x; }\n".to_string())
    );
}
