//! Declaration model built by the parser.

use serde::Serialize;

pub const STATIC_MODIFIER: &str = "static";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    /// Flat text of every token between the method's braces.
    pub body: String,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, modifier: Option<&str>) -> Self {
        Self {
            name: name.into(),
            modifier: modifier.map(str::to_string),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifier.as_deref() == Some(STATIC_MODIFIER)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassDecl {
    pub name: String,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_methods(mut self, methods: Vec<MethodDecl>) -> Self {
        self.methods = methods;
        self
    }
}
