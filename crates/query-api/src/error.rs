use crate::definition::DefinitionKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    /// A required identifier is missing, or a declared element name is already taken.
    #[error("Execution plan validation failed: {0}")]
    Validation(String),

    #[error(
        "{existing_kind} definition with same id '{id}' already exists: {existing}, hence cannot add {incoming}"
    )]
    DuplicateDefinition {
        id: String,
        existing_kind: DefinitionKind,
        existing: String,
        incoming: String,
    },

    #[error("Function definition with the same id '{0}' already exists")]
    FunctionAlreadyExists(String),

    #[error("Attribute '{attribute}' is already defined in '{definition}'")]
    DuplicateAttribute {
        definition: String,
        attribute: String,
    },

    #[error("Failed to serialize execution plan: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        PlanError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
