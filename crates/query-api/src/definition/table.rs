use super::{AttributeType, Definition, DefinitionKind, Schema};
use crate::{annotation::Annotation, error::Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration of queryable state.
/// Syntax: define table StockTable (symbol string, volume long)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableDefinition {
    pub schema: Schema,
}

impl TableDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        TableDefinition {
            schema: Schema::new(id),
        }
    }

    pub fn from_schema(schema: Schema) -> Self {
        TableDefinition { schema }
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

impl Definition for TableDefinition {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn kind(&self) -> DefinitionKind {
        DefinitionKind::Table
    }
}

impl fmt::Display for TableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "define table {}", self.schema)
    }
}
