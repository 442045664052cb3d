use super::{AttributeType, Definition, DefinitionKind, Schema};
use crate::{annotation::Annotation, error::Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration of an unbounded event flow.
/// Syntax: define stream StockStream (symbol string, price double)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamDefinition {
    pub schema: Schema,
}

impl StreamDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        StreamDefinition {
            schema: Schema::new(id),
        }
    }

    pub fn from_schema(schema: Schema) -> Self {
        StreamDefinition { schema }
    }

    pub fn attribute(
        mut self,
        name: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Result<Self> {
        self.schema = self.schema.attribute(name, attribute_type)?;
        Ok(self)
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.schema = self.schema.annotation(annotation);
        self
    }
}

impl Definition for StreamDefinition {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Stream
    }
}

impl fmt::Display for StreamDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "define stream {}", self.schema)
    }
}
