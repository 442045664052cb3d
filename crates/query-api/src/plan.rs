use crate::{
    annotation::{self, Annotation},
    definition::{Definition, DefinitionKind, FunctionDefinition, StreamDefinition, TableDefinition},
    error::{PlanError, Result},
    execution::{ExecutionElement, Partition, Query},
};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};
use tracing::{debug, trace};

/// Validated container of declarations and statements handed to the compiler.
///
/// Stream and table ids share one namespace, declared statement names are
/// unique, and a rejected mutation leaves the plan untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionPlan {
    streams: BTreeMap<String, StreamDefinition>,
    tables: BTreeMap<String, TableDefinition>,
    functions: BTreeMap<String, FunctionDefinition>,
    execution_elements: Vec<ExecutionElement>,
    execution_element_names: Vec<Option<String>>,
    annotations: Vec<Annotation>,
}

/// The parts of a plan that take part in equality.
#[derive(Serialize)]
struct PlanIdentity<'a> {
    streams: &'a BTreeMap<String, StreamDefinition>,
    tables: &'a BTreeMap<String, TableDefinition>,
    execution_elements: &'a [ExecutionElement],
    execution_element_names: &'a [Option<String>],
    annotations: &'a [Annotation],
}

impl ExecutionPlan {
    pub fn new() -> Self {
        ExecutionPlan::default()
    }

    /// Creates a plan carrying `@info(name = '<name>')`.
    pub fn named(name: impl Into<String>) -> Self {
        ExecutionPlan::with_annotations(vec![Annotation::info_name(name)])
    }

    pub fn with_annotations(annotations: Vec<Annotation>) -> Self {
        ExecutionPlan {
            annotations,
            ..ExecutionPlan::default()
        }
    }

    /// The plan's own name, taken from its `@info` annotation.
    pub fn name(&self) -> Option<&str> {
        annotation::declared_name(&self.annotations)
    }

    pub fn define_stream(&mut self, definition: StreamDefinition) -> Result<&mut Self> {
        let id = required_id(&definition, "Stream")?;
        self.check_duplicate_definition(&id, &definition)?;

        debug!("Defined stream '{}'", id);
        self.streams.insert(id, definition);
        Ok(self)
    }

    /// Removing an id that is not defined is a no-op.
    pub fn remove_stream(&mut self, stream_id: &str) -> Result<&mut Self> {
        match self.streams.remove(stream_id) {
            Some(_) => debug!("Removed stream '{}'", stream_id),
            None => trace!("Stream '{}' is not defined, nothing to remove", stream_id),
        }
        Ok(self)
    }

    pub fn define_table(&mut self, definition: TableDefinition) -> Result<&mut Self> {
        let id = required_id(&definition, "Table")?;
        self.check_duplicate_definition(&id, &definition)?;

        debug!("Defined table '{}'", id);
        self.tables.insert(id, definition);
        Ok(self)
    }

    /// Rejects an id already used by a definition of the other kind or with
    /// different content. Redefining an identical definition is allowed.
    fn check_duplicate_definition<D: Definition>(&self, id: &str, definition: &D) -> Result<()> {
        if let Some(existing) = self.tables.get(id)
            && (existing.schema() != definition.schema()
                || definition.kind() == DefinitionKind::Stream)
        {
            return Err(duplicate_definition(id, existing, definition));
        }

        if let Some(existing) = self.streams.get(id)
            && (existing.schema() != definition.schema()
                || definition.kind() == DefinitionKind::Table)
        {
            return Err(duplicate_definition(id, existing, definition));
        }

        Ok(())
    }

    pub fn define_function(&mut self, definition: FunctionDefinition) -> Result<&mut Self> {
        let id = definition
            .function_id()
            .ok_or_else(|| PlanError::validation("Function id should not be null"))?
            .to_string();

        if self.functions.contains_key(&id) {
            return Err(PlanError::FunctionAlreadyExists(id));
        }

        debug!("Defined function '{}'", id);
        self.functions.insert(id, definition);
        Ok(self)
    }

    pub fn add_query(&mut self, query: Query) -> Result<&mut Self> {
        self.add_execution_element(ExecutionElement::Query(query))
    }

    pub fn add_partition(&mut self, partition: Partition) -> Result<&mut Self> {
        self.add_execution_element(ExecutionElement::Partition(partition))
    }

    fn add_execution_element(&mut self, element: ExecutionElement) -> Result<&mut Self> {
        let name = element.declared_name().map(str::to_string);

        if let Some(name) = &name
            && self
                .execution_element_names
                .iter()
                .flatten()
                .any(|existing| existing == name)
        {
            return Err(PlanError::validation(format!(
                "Cannot add {} as another execution element already uses its name '{}'",
                element.kind_name(),
                name
            )));
        }

        debug!(
            "Added {} '{}' at position {}",
            element.kind_name(),
            name.as_deref().unwrap_or("<anonymous>"),
            self.execution_elements.len()
        );
        self.execution_element_names.push(name);
        self.execution_elements.push(element);
        Ok(self)
    }

    pub fn annotation(&mut self, annotation: Annotation) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn execution_elements(&self) -> &[ExecutionElement] {
        &self.execution_elements
    }

    /// Declared names, index-aligned with [`Self::execution_elements`].
    pub fn execution_element_names(&self) -> &[Option<String>] {
        &self.execution_element_names
    }

    pub fn stream_definitions(&self) -> &BTreeMap<String, StreamDefinition> {
        &self.streams
    }

    pub fn table_definitions(&self) -> &BTreeMap<String, TableDefinition> {
        &self.tables
    }

    pub fn function_definitions(&self) -> &BTreeMap<String, FunctionDefinition> {
        &self.functions
    }

    pub fn stream_definition(&self, id: &str) -> Option<&StreamDefinition> {
        self.streams.get(id)
    }

    pub fn table_definition(&self, id: &str) -> Option<&TableDefinition> {
        self.tables.get(id)
    }

    pub fn function_definition(&self, id: &str) -> Option<&FunctionDefinition> {
        self.functions.get(id)
    }

    fn identity(&self) -> PlanIdentity<'_> {
        PlanIdentity {
            streams: &self.streams,
            tables: &self.tables,
            execution_elements: &self.execution_elements,
            execution_element_names: &self.execution_element_names,
            annotations: &self.annotations,
        }
    }

    /// md5 digest of everything that takes part in equality, so equal plans
    /// share a fingerprint. Function definitions are not included.
    pub fn fingerprint(&self) -> Result<String> {
        let serialized = serde_json::to_string(&self.identity())?;
        Ok(format!("{:x}", md5::compute(serialized)))
    }
}

fn required_id<D: Definition>(definition: &D, kind: &str) -> Result<String> {
    definition
        .id()
        .map(str::to_string)
        .ok_or_else(|| {
            PlanError::validation(format!(
                "{kind} id should not be null for {kind} definition"
            ))
        })
}

fn duplicate_definition<E: Definition, D: Definition>(
    id: &str,
    existing: &E,
    incoming: &D,
) -> PlanError {
    PlanError::DuplicateDefinition {
        id: id.to_string(),
        existing_kind: existing.kind(),
        existing: existing.to_string(),
        incoming: incoming.to_string(),
    }
}

// Function definitions are excluded from equality and hashing.
impl PartialEq for ExecutionPlan {
    fn eq(&self, other: &Self) -> bool {
        self.streams == other.streams
            && self.tables == other.tables
            && self.execution_elements == other.execution_elements
            && self.execution_element_names == other.execution_element_names
            && self.annotations == other.annotations
    }
}

impl Eq for ExecutionPlan {}

impl Hash for ExecutionPlan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.streams.hash(state);
        self.tables.hash(state);
        self.execution_elements.hash(state);
        self.execution_element_names.hash(state);
        self.annotations.hash(state);
    }
}

impl fmt::Display for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let streams: Vec<String> = self.streams.values().map(|d| d.to_string()).collect();
        let tables: Vec<String> = self.tables.values().map(|d| d.to_string()).collect();
        let functions: Vec<String> = self.functions.values().map(|d| d.to_string()).collect();
        let elements: Vec<String> = self.execution_elements.iter().map(|e| e.to_string()).collect();
        let names: Vec<&str> = self
            .execution_element_names
            .iter()
            .map(|name| name.as_deref().unwrap_or("-"))
            .collect();
        let annotations: Vec<String> = self.annotations.iter().map(|a| a.to_string()).collect();

        write!(
            f,
            "ExecutionPlan {{ streams: [{}], tables: [{}], functions: [{}], execution_elements: [{}], execution_element_names: [{}], annotations: [{}] }}",
            streams.join("; "),
            tables.join("; "),
            functions.join("; "),
            elements.join("; "),
            names.join(", "),
            annotations.join(" ")
        )
    }
}
