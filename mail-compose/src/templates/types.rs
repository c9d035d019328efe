use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MailError, Result};

/// Variables exposed to a template while it renders.
///
/// Handed to renderers as one record, never merged into the renderer's own
/// state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderContext {
    vars: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from any value serializing to a JSON object
    pub fn from_serialize<T: Serialize>(data: &T) -> Result<Self> {
        match serde_json::to_value(data)? {
            Value::Object(vars) => Ok(Self { vars }),
            Value::Null => Ok(Self::default()),
            other => Err(MailError::Config(format!(
                "Render context must be an object, got {}",
                other
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    pub fn extend(&mut self, other: RenderContext) {
        self.vars.extend(other.vars);
    }
}

/// A component producing a mail body from a template identifier.
pub trait MailRenderer: Send + Sync {
    /// Whether this renderer handles templates with `extension`. A missing
    /// or empty extension is never supported.
    fn supports(&self, template_name: &str, extension: Option<&str>) -> bool;

    fn render(&self, template_name: &str, context: &RenderContext) -> Result<String>;
}
