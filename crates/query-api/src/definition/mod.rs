use crate::{
    annotation::Annotation,
    error::{PlanError, Result},
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod function;
pub mod stream;
pub mod table;

pub use function::FunctionDefinition;
pub use stream::StreamDefinition;
pub use table::TableDefinition;

/// Attribute types available to stream and table schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Object,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::String => write!(f, "string"),
            AttributeType::Int => write!(f, "int"),
            AttributeType::Long => write!(f, "long"),
            AttributeType::Float => write!(f, "float"),
            AttributeType::Double => write!(f, "double"),
            AttributeType::Bool => write!(f, "bool"),
            AttributeType::Object => write!(f, "object"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
}

impl Attribute {
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Attribute {
            name: name.into(),
            attribute_type,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.attribute_type)
    }
}

/// Structural content shared by stream and table definitions.
///
/// Two definitions of different kinds compare equal at the schema level when
/// their ids, attributes and annotations match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Schema {
    pub fn new(id: impl Into<String>) -> Self {
        Schema {
            id: Some(id.into()),
            ..Schema::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attribute(
        mut self,
        name: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Result<Self> {
        let name = name.into();
        if self.attributes.iter().any(|attr| attr.name == name) {
            return Err(PlanError::DuplicateAttribute {
                definition: self.id().unwrap_or_default().to_string(),
                attribute: name,
            });
        }
        self.attributes.push(Attribute::new(name, attribute_type));
        Ok(self)
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn attribute_type(&self, name: &str) -> Option<AttributeType> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.attribute_type)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{} ", annotation)?;
        }
        write!(f, "{} (", self.id().unwrap_or("<unnamed>"))?;
        for (i, attr) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", attr)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefinitionKind {
    Stream,
    Table,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionKind::Stream => write!(f, "Stream"),
            DefinitionKind::Table => write!(f, "Table"),
        }
    }
}

/// A schema-backed declaration that lives in the stream or table namespace.
pub trait Definition: fmt::Display {
    fn schema(&self) -> &Schema;

    fn kind(&self) -> DefinitionKind;

    fn id(&self) -> Option<&str> {
        self.schema().id()
    }
}
