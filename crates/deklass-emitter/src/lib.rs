//! Code generation for the deklass pipeline.
//!
//! Serializes a `ClassDecl` into a constructor function followed by one
//! assignment per method:
//!
//! ```javascript
//! function Book() {}
//! Book.prototype.addBook = function() { console.log("add"); }
//! Book.getBook = function() { return 1; }
//! ```

pub mod visitor;
pub use visitor::Visitor;

pub mod prototype_emitter;
pub use prototype_emitter::{BodyLayout, EmitOptions, PrototypeEmitter, emit_all, visit};
