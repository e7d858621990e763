//! Pipeline tests through the `deklass` facade.

use deklass::diagnostics::diagnostic_codes;
use deklass::{BodyLayout, EmitOptions, NewLineKind, TokenKind, analyze, transpile};

const BOOK: &str = r#"
class Book {
  addBook() { console.log("addBook"); }
  removeBook() { console.log("removeBook"); }
  static getBook() { return "getBook"; }
}
"#;

#[test]
fn transpile_book() {
    let output = transpile(BOOK, &EmitOptions::default()).unwrap();
    assert_eq!(
        output,
        concat!(
            "function Book() {}\n",
            "Book.prototype.addBook = function() { console.log(\"addBook\"); }\n",
            "Book.prototype.removeBook = function() { console.log(\"removeBook\"); }\n",
            "Book.getBook = function() { return \"getBook\"; }\n",
        )
    );
}

#[test]
fn transpile_copies_number_literals_verbatim() {
    let nines = "9".repeat(400);
    let source = format!("class A {{ m() {{ x = 007; y = {nines}; z = 1234567890123456789012; }} }}");
    let output = transpile(&source, &EmitOptions::default()).unwrap();
    assert_eq!(
        output,
        format!(
            "function A() {{}}\nA.prototype.m = function() {{ x=007;y={nines};z=1234567890123456789012; }}\n"
        )
    );
}

#[test]
fn transpile_without_class_is_none() {
    assert_eq!(transpile("let x = 1;", &EmitOptions::default()), None);
    assert_eq!(transpile("", &EmitOptions::default()), None);
}

#[test]
fn transpile_output_shape() {
    let output = transpile(BOOK, &EmitOptions::default()).unwrap();
    assert!(output.starts_with("function Book() {}\n"));
    let assignments: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(assignments.len(), 3);
    assert!(assignments[0].contains(".prototype."));
    assert!(assignments[1].contains(".prototype."));
    assert!(assignments[2].starts_with("Book.getBook"));
}

#[test]
fn transpile_with_block_layout_and_crlf() {
    let options = EmitOptions {
        new_line: NewLineKind::CarriageReturnLineFeed,
        body_layout: BodyLayout::Block,
    };
    let output = transpile("class A { static s() { go(); } }", &options).unwrap();
    assert_eq!(
        output,
        "function A() {}\r\nA.s = function() {\r\ngo();\r\n}\r\n"
    );
}

#[test]
fn analyze_collects_scanner_and_parser_diagnostics() {
    let result = analyze("class A { m() { say(\"hi");
    let codes: Vec<u32> = result.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            diagnostic_codes::UNTERMINATED_STRING_LITERAL,
            diagnostic_codes::METHOD_BODY_NOT_CLOSED,
            diagnostic_codes::CLASS_BODY_NOT_CLOSED,
        ]
    );
    assert_eq!(result.declarations[0].methods[0].body, "say(\"hi");
}

#[test]
fn analyze_keeps_tokens() {
    let result = analyze("class A { }");
    assert_eq!(
        result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn emit_all_covers_every_class() {
    let result = analyze("class A { a() { } } class B { static b() { } }");
    let output = result.emit_all(EmitOptions::default());
    assert_eq!(
        output,
        "function A() {}\nA.prototype.a = function() {  }\n\nfunction B() {}\nB.b = function() {  }\n"
    );
    assert_eq!(
        result.emit_first(EmitOptions::default()).as_deref(),
        Some("function A() {}\nA.prototype.a = function() {  }\n")
    );
}
