use crate::args::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn defaults_to_code_js() {
    let args = CliArgs::try_parse_from(["deklass"]).unwrap();
    assert_eq!(args.file, PathBuf::from("code.js"));
    assert!(args.out.is_none());
    assert!(!args.stdout);
    assert!(!args.all);
    assert!(args.new_line.is_none());
    assert!(args.pretty.is_none());
}

#[test]
fn parses_camel_case_and_kebab_aliases() {
    let args = CliArgs::try_parse_from([
        "deklass",
        "lib/book.js",
        "--newLine",
        "CRLF",
        "--body-layout",
        "block",
        "--listTokens",
    ])
    .unwrap();
    assert_eq!(args.file, PathBuf::from("lib/book.js"));
    assert_eq!(args.new_line, Some(NewLine::Crlf));
    assert_eq!(args.body_layout, Some(Layout::Block));
    assert!(args.list_tokens);
    assert!(!args.show_ast);
}

#[test]
fn parses_output_flags() {
    let args =
        CliArgs::try_parse_from(["deklass", "a.js", "-o", "b.js", "-p", "cfg.json", "--all"])
            .unwrap();
    assert_eq!(args.out, Some(PathBuf::from("b.js")));
    assert_eq!(args.project, Some(PathBuf::from("cfg.json")));
    assert!(args.all);
}

#[test]
fn rejects_unknown_new_line() {
    assert!(CliArgs::try_parse_from(["deklass", "--newLine", "cr"]).is_err());
}

#[test]
fn value_enums_convert() {
    assert_eq!(
        deklass::NewLineKind::from(NewLine::Crlf),
        deklass::NewLineKind::CarriageReturnLineFeed
    );
    assert_eq!(
        deklass::BodyLayout::from(Layout::Inline),
        deklass::BodyLayout::Inline
    );
}
