use crate::annotation::{self, Annotation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A standalone continuous query.
/// Syntax: @info(name = 'q1') from InStream select a, b insert into OutStream
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub input_stream: Option<String>,
    #[serde(default)]
    pub selection: Vec<String>,
    #[serde(default)]
    pub output_stream: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    pub fn from(mut self, stream_id: impl Into<String>) -> Self {
        self.input_stream = Some(stream_id.into());
        self
    }

    pub fn select(mut self, attribute: impl Into<String>) -> Self {
        self.selection.push(attribute.into());
        self
    }

    pub fn insert_into(mut self, stream_id: impl Into<String>) -> Self {
        self.output_stream = Some(stream_id.into());
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

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{} ", annotation)?;
        }
        write!(f, "from {}", self.input_stream.as_deref().unwrap_or("<none>"))?;
        if self.selection.is_empty() {
            write!(f, " select *")?;
        } else {
            write!(f, " select {}", self.selection.join(", "))?;
        }
        if let Some(output) = &self.output_stream {
            write!(f, " insert into {}", output)?;
        }
        Ok(())
    }
}
