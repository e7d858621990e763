//! Structural parser for the deklass pipeline.
//!
//! Turns a token sequence into class declarations. Method bodies are not
//! parsed; their tokens are replayed as flat text.
//!
//! - `ClassDecl`, `MethodDecl` - Declaration model handed to the emitter
//! - `ParserState` - Scope-stack state machine with one token of lookahead
//! - `ParserContext` - The structural scope the parser is currently inside

pub mod decl;
pub use decl::{ClassDecl, MethodDecl, STATIC_MODIFIER};

pub mod state;
pub use state::{ParserContext, ParserState, parse};
