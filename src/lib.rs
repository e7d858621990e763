//! deklass: lower class declarations into constructor functions with
//! prototype assignments.
//!
//! The pipeline has three stages, each consuming the previous stage's output
//! in full:
//!
//! 1. [`tokenize`] - text to tokens
//! 2. [`parse`] - tokens to class declarations
//! 3. [`visit`] - one class declaration to output text
//!
//! ```
//! let out = deklass::transpile("class Book { addBook() { } }", &Default::default());
//! assert_eq!(
//!     out.as_deref(),
//!     Some("function Book() {}\nBook.prototype.addBook = function() {  }\n")
//! );
//! ```

pub mod tracing_config;

pub use deklass_common::{Diagnostic, DiagnosticCategory, NewLineKind, diagnostics};
pub use deklass_emitter::{
    BodyLayout, EmitOptions, PrototypeEmitter, Visitor, emit_all, visit,
};
pub use deklass_parser::{ClassDecl, MethodDecl, ParserContext, ParserState, parse};
pub use deklass_scanner::{Keyword, ScannerState, Token, TokenKind, TokenValue, tokenize};

use tracing::debug_span;

/// Everything one pipeline run produced.
#[derive(Debug, Default)]
pub struct Transpiled {
    pub tokens: Vec<Token>,
    pub declarations: Vec<ClassDecl>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Transpiled {
    /// Emit the first declaration, or `None` when the source had no class.
    pub fn emit_first(&self, options: EmitOptions) -> Option<String> {
        let decl = self.declarations.first()?;
        Some(PrototypeEmitter::new(options).visit_class_decl(decl))
    }

    pub fn emit_all(&self, options: EmitOptions) -> String {
        emit_all(&self.declarations, options)
    }
}

/// Scan and parse `source`, keeping the tokens and all diagnostics.
pub fn analyze(source: &str) -> Transpiled {
    let _span = debug_span!("analyze", len = source.len()).entered();

    let mut scanner = ScannerState::new(source);
    let tokens = scanner.scan();
    let mut diagnostics = scanner.get_diagnostics().to_vec();

    let mut parser = ParserState::new(tokens.clone());
    let declarations = parser.parse_declarations();
    diagnostics.extend_from_slice(parser.get_diagnostics());

    Transpiled {
        tokens,
        declarations,
        diagnostics,
    }
}

/// Run the whole pipeline on the first class of `source`.
///
/// Returns `None` when the source declares no class.
pub fn transpile(source: &str, options: &EmitOptions) -> Option<String> {
    let _span = debug_span!("transpile").entered();
    let decls = parse(tokenize(source));
    let decl = decls.first()?;
    Some(PrototypeEmitter::new(*options).visit_class_decl(decl))
}
