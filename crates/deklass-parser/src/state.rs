//! Parser state - scope stack and token transitions.
//!
//! The parser keeps a stack of open brace scopes. Class and method scopes own
//! the declaration being built, so a class is only appended to the result once
//! its closing brace is reached. Plain blocks get their own scope, which keeps
//! an inner `}` from closing the method around it.
//!
//! Transitions, keyed on the current token and the innermost class/method
//! scope:
//!
//! | token | context | action |
//! |---|---|---|
//! | `class` + identifier | any | open class scope |
//! | `static` + identifier | class | open static method |
//! | other keyword | method | append `"<keyword> <next>"` to the body |
//! | identifier | class | open method |
//! | identifier | method | append to the body |
//! | `{` | any | push block (appended inside a method) |
//! | `}` | any | pop one scope |
//! | anything else | method | append to the body |

use crate::decl::{ClassDecl, MethodDecl, STATIC_MODIFIER};
use deklass_common::Diagnostic;
use deklass_common::diagnostics::diagnostic_codes;
use deklass_scanner::{Keyword, Token, TokenKind};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

/// Parse a token sequence into class declarations.
pub fn parse(tokens: Vec<Token>) -> Vec<ClassDecl> {
    ParserState::new(tokens).parse_declarations()
}

/// The structural scope the parser is inside, ignoring plain blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserContext {
    None,
    Class,
    Method,
}

struct ClassBuilder {
    decl: ClassDecl,
    seen: FxHashSet<(String, bool)>,
}

impl ClassBuilder {
    fn new(name: String) -> Self {
        Self {
            decl: ClassDecl::new(name),
            seen: FxHashSet::default(),
        }
    }

    /// Returns `(method, class)` names when the method was already declared.
    fn add_method(&mut self, method: MethodDecl) -> Option<(String, String)> {
        let fresh = self.seen.insert((method.name.clone(), method.is_static()));
        let duplicate = (!fresh).then(|| (method.name.clone(), self.decl.name.clone()));
        self.decl.methods.push(method);
        duplicate
    }
}

enum Scope {
    Class(ClassBuilder),
    Method(MethodDecl),
    Block,
}

pub struct ParserState {
    tokens: Vec<Token>,
    pos: usize,
    scopes: SmallVec<[Scope; 4]>,
    declarations: Vec<ClassDecl>,
    diagnostics: Vec<Diagnostic>,
}

impl ParserState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            scopes: SmallVec::new(),
            declarations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Current structural context: the innermost class or method scope.
    pub fn context(&self) -> ParserContext {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| match scope {
                Scope::Class(_) => Some(ParserContext::Class),
                Scope::Method(_) => Some(ParserContext::Method),
                Scope::Block => None,
            })
            .unwrap_or(ParserContext::None)
    }

    /// Run the parser to the end of input and hand over the declarations.
    ///
    /// Scopes still open at end of input are closed innermost first, so a
    /// truncated class yields a partial declaration.
    pub fn parse_declarations(&mut self) -> Vec<ClassDecl> {
        while self.parse_next() {}
        self.close_unclosed_scopes();
        debug!(
            classes = self.declarations.len(),
            diagnostics = self.diagnostics.len(),
            "parsed declarations"
        );
        std::mem::take(&mut self.declarations)
    }

    /// Consume one token and apply its transition.
    ///
    /// Returns `false` once `EndOfInput` (or the end of the token vector) is
    /// reached.
    pub fn parse_next(&mut self) -> bool {
        let Some(token) = self.advance() else {
            return false;
        };

        match token.kind {
            TokenKind::EndOfInput => return false,
            TokenKind::Keyword => self.parse_keyword(&token),
            TokenKind::Identifier => self.parse_identifier(&token),
            TokenKind::LBrace => self.open_block(),
            TokenKind::RBrace => self.close_scope(),
            _ => {
                if self.context() == ParserContext::Method {
                    self.append_to_body(&token.text());
                }
            }
        }
        true
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let slot = self.tokens.get_mut(self.pos)?;
        self.pos += 1;
        Some(std::mem::replace(slot, Token::end_of_input()))
    }

    /// Whether the lookahead may be consumed as part of a keyword pair.
    /// Braces and end of input always stay in the stream.
    fn lookahead_is_consumable(&self) -> bool {
        self.peek_kind()
            .is_some_and(|kind| !kind.is_brace() && kind != TokenKind::EndOfInput)
    }

    /// Consume tokens up to and including the next `{`.
    ///
    /// Returns `false` if end of input came first; `EndOfInput` itself is left
    /// in the stream.
    fn skip_past_open_brace(&mut self) -> bool {
        while let Some(kind) = self.peek_kind() {
            if kind == TokenKind::EndOfInput {
                return false;
            }
            self.pos += 1;
            if kind == TokenKind::LBrace {
                return true;
            }
        }
        false
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn parse_keyword(&mut self, token: &Token) {
        let keyword = token.keyword();
        let next_is_identifier = self.peek_kind() == Some(TokenKind::Identifier);
        let context = self.context();

        match keyword {
            Some(Keyword::Class) if next_is_identifier => {
                if let Some(name) = self.advance() {
                    self.open_class(name.text().into_owned());
                }
            }
            Some(Keyword::Static) if next_is_identifier && context == ParserContext::Class => {
                if let Some(name) = self.advance() {
                    self.open_method(name.text().into_owned(), Some(STATIC_MODIFIER));
                }
            }
            _ if context == ParserContext::Method => {
                // A brace stays in the stream; the separating space does not.
                let next = if self.lookahead_is_consumable() {
                    self.advance()
                } else {
                    None
                };
                let text = match next {
                    Some(next) => format!("{} {}", token.text(), next.text()),
                    None => format!("{} ", token.text()),
                };
                self.append_to_body(&text);
            }
            _ => {
                if self.lookahead_is_consumable() {
                    let discarded = self.advance();
                    trace!(
                        keyword = %token.text(),
                        next = ?discarded.as_ref().map(|t| t.text().into_owned()),
                        "discarded keyword pair"
                    );
                } else {
                    trace!(keyword = %token.text(), "discarded keyword");
                }
            }
        }
    }

    fn parse_identifier(&mut self, token: &Token) {
        match self.context() {
            ParserContext::Class => self.open_method(token.text().into_owned(), None),
            ParserContext::Method => self.append_to_body(&token.text()),
            ParserContext::None => {}
        }
    }

    fn open_class(&mut self, name: String) {
        trace!(%name, "open class");
        if self.skip_past_open_brace() {
            self.scopes.push(Scope::Class(ClassBuilder::new(name)));
        } else {
            self.report(diagnostic_codes::CLASS_WITHOUT_BODY, &[&name]);
            self.declarations.push(ClassDecl::new(name));
        }
    }

    /// Record a method and skip its parameter list.
    fn open_method(&mut self, name: String, modifier: Option<&str>) {
        trace!(%name, ?modifier, "open method");
        let method = MethodDecl::new(name, modifier);
        if self.skip_past_open_brace() {
            self.scopes.push(Scope::Method(method));
        } else {
            self.report(diagnostic_codes::METHOD_WITHOUT_BODY, &[&method.name]);
            self.finish_method(method);
        }
    }

    fn open_block(&mut self) {
        if self.context() == ParserContext::Method {
            self.append_to_body("{");
        }
        self.scopes.push(Scope::Block);
    }

    fn close_scope(&mut self) {
        match self.scopes.pop() {
            Some(Scope::Block) => {
                if self.context() == ParserContext::Method {
                    self.append_to_body("}");
                }
            }
            Some(Scope::Method(method)) => {
                trace!(name = %method.name, "close method");
                self.finish_method(method);
            }
            Some(Scope::Class(builder)) => {
                trace!(name = %builder.decl.name, "close class");
                self.declarations.push(builder.decl);
            }
            None => self.report(diagnostic_codes::UNMATCHED_CLOSING_BRACE, &[]),
        }
    }

    fn close_unclosed_scopes(&mut self) {
        while let Some(scope) = self.scopes.pop() {
            match scope {
                Scope::Block => {}
                Scope::Method(method) => {
                    self.report(diagnostic_codes::METHOD_BODY_NOT_CLOSED, &[&method.name]);
                    self.finish_method(method);
                }
                Scope::Class(builder) => {
                    self.report(
                        diagnostic_codes::CLASS_BODY_NOT_CLOSED,
                        &[&builder.decl.name],
                    );
                    self.declarations.push(builder.decl);
                }
            }
        }
    }

    /// Hand a finished method to the nearest enclosing class.
    fn finish_method(&mut self, method: MethodDecl) {
        let class = self.scopes.iter_mut().rev().find_map(|scope| match scope {
            Scope::Class(builder) => Some(builder),
            _ => None,
        });
        let Some(class) = class else {
            trace!(name = %method.name, "method outside of a class dropped");
            return;
        };

        if let Some((method_name, class_name)) = class.add_method(method) {
            self.report(
                diagnostic_codes::DUPLICATE_METHOD,
                &[&method_name, &class_name],
            );
        }
    }

    /// Append text to the method owning the innermost class/method scope.
    fn append_to_body(&mut self, text: &str) {
        let method = self.scopes.iter_mut().rev().find_map(|scope| match scope {
            Scope::Method(method) => Some(Some(method)),
            Scope::Class(_) => Some(None),
            Scope::Block => None,
        });
        if let Some(Some(method)) = method {
            method.body.push_str(text);
        }
    }

    fn report(&mut self, code: u32, args: &[&str]) {
        let diagnostic = Diagnostic::from_code(code, args);
        warn!(code, message = %diagnostic.message_text, "parse diagnostic");
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
#[path = "../tests/state_tests.rs"]
mod tests;
