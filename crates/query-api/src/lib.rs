pub mod annotation;
pub mod definition;
pub mod error;
pub mod execution;
pub mod plan;

pub use annotation::{Annotation, Element};
pub use definition::{
    Attribute, AttributeType, Definition, DefinitionKind, FunctionDefinition, Schema,
    StreamDefinition, TableDefinition,
};
pub use error::{PlanError, Result};
pub use execution::{ExecutionElement, Partition, PartitionKey, Query};
pub use plan::ExecutionPlan;
