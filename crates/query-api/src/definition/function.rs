use super::AttributeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Script function declaration
/// Syntax: define function concat[javascript] return string { ... }
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionDefinition {
    #[serde(default)]
    pub id: Option<String>,
    pub language: String,
    pub return_type: Option<AttributeType>,
    #[serde(default)]
    pub body: String,
}

impl FunctionDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        FunctionDefinition {
            id: Some(id.into()),
            ..FunctionDefinition::default()
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn return_type(mut self, return_type: AttributeType) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn function_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "define function {}[{}]",
            self.function_id().unwrap_or("<unnamed>"),
            self.language
        )?;
        if let Some(return_type) = self.return_type {
            write!(f, " return {}", return_type)?;
        }
        write!(f, " {{{}}}", self.body)
    }
}
