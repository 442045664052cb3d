use serde::{Deserialize, Serialize};
use std::fmt;

/// Annotation category carrying descriptive metadata, e.g. `@info(name = 'q1')`.
pub const ANNOTATION_INFO: &str = "info";

/// Element key holding the declared name inside an `@info` annotation.
pub const ANNOTATION_ELEMENT_NAME: &str = "name";

/// Metadata attached to a plan, a definition or a statement.
/// Syntax: @name(key = 'value', 'positional')
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single annotation element. Elements without a key are positional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub key: Option<String>,
    pub value: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Annotation {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// `@info(name = '<name>')`
    pub fn info_name(name: impl Into<String>) -> Self {
        Annotation::new(ANNOTATION_INFO).element(ANNOTATION_ELEMENT_NAME, name)
    }

    pub fn element(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements.push(Element {
            key: Some(key.into()),
            value: value.into(),
        });
        self
    }

    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.elements.push(Element {
            key: None,
            value: value.into(),
        });
        self
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}(", self.name)?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{} = '{}'", key, self.value),
            None => write!(f, "'{}'", self.value),
        }
    }
}

/// Returns the first annotation whose name matches `category`, ignoring case.
pub fn find_annotation<'a>(
    annotations: &'a [Annotation],
    category: &str,
) -> Option<&'a Annotation> {
    annotations
        .iter()
        .find(|annotation| annotation.name.eq_ignore_ascii_case(category))
}

/// Looks up an element of the `category` annotation.
///
/// A `None` key only matches positional elements.
pub fn find_element<'a>(
    annotations: &'a [Annotation],
    category: &str,
    key: Option<&str>,
) -> Option<&'a Element> {
    let annotation = find_annotation(annotations, category)?;
    annotation
        .elements
        .iter()
        .find(|element| match (key, element.key.as_deref()) {
            (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
            (None, None) => true,
            _ => false,
        })
}

pub fn element_value<'a>(
    annotations: &'a [Annotation],
    category: &str,
    key: Option<&str>,
) -> Option<&'a str> {
    find_element(annotations, category, key).map(|element| element.value.as_str())
}

/// The name declared through `@info(name = '...')`. Empty names count as undeclared.
///
/// Only the first `@info` annotation is consulted; later `@info` annotations
/// on the same element are ignored, even when the first one has no `name`.
pub fn declared_name(annotations: &[Annotation]) -> Option<&str> {
    element_value(annotations, ANNOTATION_INFO, Some(ANNOTATION_ELEMENT_NAME))
        .filter(|name| !name.is_empty())
}
