use super::query::Query;
use crate::annotation::{self, Annotation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute a stream is partitioned by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionKey {
    pub stream_id: String,
    pub attribute: String,
}

/// A group of queries evaluated per partition key value.
/// Syntax: partition with (symbol of StockStream) begin ... end
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub partition_keys: Vec<PartitionKey>,
    #[serde(default)]
    pub queries: Vec<Query>,
}

impl Partition {
    pub fn new() -> Self {
        Partition::default()
    }

    pub fn with(mut self, stream_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.partition_keys.push(PartitionKey {
            stream_id: stream_id.into(),
            attribute: attribute.into(),
        });
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.queries.push(query);
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn declared_name(&self) -> Option<&str> {
        annotation::declared_name(&self.annotations)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{} ", annotation)?;
        }
        let keys: Vec<String> = self
            .partition_keys
            .iter()
            .map(|key| format!("{} of {}", key.attribute, key.stream_id))
            .collect();
        write!(f, "partition with ({}) begin", keys.join(", "))?;
        for query in &self.queries {
            write!(f, " {};", query)?;
        }
        write!(f, " end")
    }
}
