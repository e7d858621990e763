//! Visitor over the declaration model.

use deklass_parser::{ClassDecl, MethodDecl};

/// A pass over one class declaration and its methods.
pub trait Visitor {
    type Output;

    fn visit_class_decl(&mut self, decl: &ClassDecl) -> Self::Output;

    fn visit_method_decl(&mut self, class: &ClassDecl, method: &MethodDecl) -> Self::Output;
}
