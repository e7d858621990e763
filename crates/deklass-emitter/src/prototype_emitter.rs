//! Prototype-assignment emitter.
//!
//! Static methods are assigned onto the constructor itself, everything else
//! onto its prototype. Method bodies are copied verbatim.

use crate::visitor::Visitor;
use deklass_common::NewLineKind;
use deklass_parser::{ClassDecl, MethodDecl};
use serde::Deserialize;
use tracing::debug;

/// How a method body is placed inside its function braces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyLayout {
    /// `function() { body }` on a single line.
    #[default]
    Inline,
    /// Braces and body on separate lines.
    Block,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub new_line: NewLineKind,
    pub body_layout: BodyLayout,
}

/// Emit `decl` with default options.
pub fn visit(decl: &ClassDecl) -> String {
    PrototypeEmitter::default().visit_class_decl(decl)
}

/// Emit every declaration in order, separated by an empty line.
pub fn emit_all(decls: &[ClassDecl], options: EmitOptions) -> String {
    let mut emitter = PrototypeEmitter::new(options);
    let newline = options.new_line.as_str();
    decls
        .iter()
        .map(|decl| emitter.visit_class_decl(decl))
        .collect::<Vec<_>>()
        .join(newline)
}

#[derive(Debug, Default)]
pub struct PrototypeEmitter {
    options: EmitOptions,
}

impl PrototypeEmitter {
    pub const fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> EmitOptions {
        self.options
    }

    fn assignment_target(class: &ClassDecl, method: &MethodDecl) -> String {
        if method.is_static() {
            format!("{}.{}", class.name, method.name)
        } else {
            format!("{}.prototype.{}", class.name, method.name)
        }
    }
}

impl Visitor for PrototypeEmitter {
    type Output = String;

    fn visit_class_decl(&mut self, decl: &ClassDecl) -> String {
        let newline = self.options.new_line.as_str();
        let mut out = format!("function {}() {{}}{newline}", decl.name);
        for method in &decl.methods {
            out.push_str(&self.visit_method_decl(decl, method));
        }
        debug!(class = %decl.name, methods = decl.methods.len(), "emitted class");
        out
    }

    fn visit_method_decl(&mut self, class: &ClassDecl, method: &MethodDecl) -> String {
        let newline = self.options.new_line.as_str();
        let target = Self::assignment_target(class, method);
        match self.options.body_layout {
            BodyLayout::Inline => {
                format!("{target} = function() {{ {} }}{newline}", method.body)
            }
            BodyLayout::Block => format!(
                "{target} = function() {{{newline}{}{newline}}}{newline}",
                method.body
            ),
        }
    }
}

#[cfg(test)]
#[path = "../tests/prototype_emitter_tests.rs"]
mod tests;
