use crate::annotation::Annotation;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod partition;
pub mod query;

pub use partition::{Partition, PartitionKey};
pub use query::Query;

/// A statement registered in an execution plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "element", rename_all = "lowercase")]
pub enum ExecutionElement {
    Query(Query),
    Partition(Partition),
}

impl ExecutionElement {
    pub fn annotations(&self) -> &[Annotation] {
        match self {
            ExecutionElement::Query(query) => &query.annotations,
            ExecutionElement::Partition(partition) => &partition.annotations,
        }
    }

    /// Name declared through `@info(name = '...')`, if any.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            ExecutionElement::Query(query) => query.declared_name(),
            ExecutionElement::Partition(partition) => partition.declared_name(),
        }
    }

    pub fn as_query(&self) -> Option<&Query> {
        match self {
            ExecutionElement::Query(query) => Some(query),
            ExecutionElement::Partition(_) => None,
        }
    }

    pub fn as_partition(&self) -> Option<&Partition> {
        match self {
            ExecutionElement::Partition(partition) => Some(partition),
            ExecutionElement::Query(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ExecutionElement::Query(_) => "Query",
            ExecutionElement::Partition(_) => "Partition",
        }
    }
}

impl From<Query> for ExecutionElement {
    fn from(query: Query) -> Self {
        ExecutionElement::Query(query)
    }
}

impl From<Partition> for ExecutionElement {
    fn from(partition: Partition) -> Self {
        ExecutionElement::Partition(partition)
    }
}

impl fmt::Display for ExecutionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionElement::Query(query) => write!(f, "{}", query),
            ExecutionElement::Partition(partition) => write!(f, "{}", partition),
        }
    }
}
