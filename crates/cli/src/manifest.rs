use crate::error::CliError;
use query_api::{
    Annotation, ExecutionPlan, FunctionDefinition, Partition, PlanError, Query, StreamDefinition,
    TableDefinition,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Already-constructed declarations and statements, replayed in order.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    DefineStream(StreamDefinition),
    DefineTable(TableDefinition),
    DefineFunction(FunctionDefinition),
    RemoveStream { id: String },
    AddQuery(Query),
    AddPartition(Partition),
    Annotate(Annotation),
}

impl Step {
    pub fn op_name(&self) -> &'static str {
        match self {
            Step::DefineStream(_) => "define_stream",
            Step::DefineTable(_) => "define_table",
            Step::DefineFunction(_) => "define_function",
            Step::RemoveStream { .. } => "remove_stream",
            Step::AddQuery(_) => "add_query",
            Step::AddPartition(_) => "add_partition",
            Step::Annotate(_) => "annotate",
        }
    }

    fn apply(self, plan: &mut ExecutionPlan) -> Result<(), PlanError> {
        match self {
            Step::DefineStream(definition) => plan.define_stream(definition).map(drop),
            Step::DefineTable(definition) => plan.define_table(definition).map(drop),
            Step::DefineFunction(definition) => plan.define_function(definition).map(drop),
            Step::RemoveStream { id } => plan.remove_stream(&id).map(drop),
            Step::AddQuery(query) => plan.add_query(query).map(drop),
            Step::AddPartition(partition) => plan.add_partition(partition).map(drop),
            Step::Annotate(annotation) => {
                plan.annotation(annotation);
                Ok(())
            }
        }
    }
}

impl Manifest {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    pub fn from_json(source: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Replays every step, stopping at the first rejected one.
    pub fn into_plan(self) -> Result<ExecutionPlan, CliError> {
        let mut plan = match self.name {
            Some(name) => ExecutionPlan::named(name),
            None => ExecutionPlan::new(),
        };
        for annotation in self.annotations {
            plan.annotation(annotation);
        }

        for (index, step) in self.steps.into_iter().enumerate() {
            let op = step.op_name();
            step.apply(&mut plan)
                .map_err(|source| CliError::Step { index, op, source })?;
            debug!("Applied step {} ({})", index, op);
        }

        Ok(plan)
    }
}
