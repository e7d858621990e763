use super::*;

#[test]
fn test_format_message_substitutes_in_order() {
    assert_eq!(
        format_message(diagnostic_messages::DUPLICATE_METHOD, &["add", "Book"]),
        "Duplicate method 'add' in class 'Book'."
    );
}

#[test]
fn test_from_code_uses_table_category() {
    let diag = Diagnostic::from_code(diagnostic_codes::METHOD_WITHOUT_BODY, &["getBook"]);
    assert_eq!(diag.category, DiagnosticCategory::Warning);
    assert_eq!(diag.code, 2004);
    assert_eq!(diag.message_text, "Method 'getBook' has no body.");
}

#[test]
fn test_unknown_code_is_an_error() {
    let diag = Diagnostic::from_code(9999, &[]);
    assert_eq!(diag.category, DiagnosticCategory::Error);
    assert!(get_message_template(9999).is_none());
}

#[test]
fn test_every_code_has_a_template() {
    for code in [
        diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        diagnostic_codes::UNMATCHED_CLOSING_BRACE,
        diagnostic_codes::CLASS_BODY_NOT_CLOSED,
        diagnostic_codes::METHOD_BODY_NOT_CLOSED,
        diagnostic_codes::METHOD_WITHOUT_BODY,
        diagnostic_codes::DUPLICATE_METHOD,
        diagnostic_codes::CLASS_WITHOUT_BODY,
    ] {
        assert!(get_message_template(code).is_some(), "missing template for {code}");
    }
}
