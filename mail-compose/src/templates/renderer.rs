//! Template renderers with variable substitution

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{MailError, Result};
use crate::templates::types::{MailRenderer, RenderContext};

const DEFAULT_EXTENSIONS: [&str; 3] = ["txt", "php", "html"];

/// Renders template files from disk.
///
/// Placeholders are written `{{ name }}` and replaced with the matching
/// context entry. The template path and the context travel separately, so a
/// context key can never replace the path being rendered.
#[derive(Debug, Clone)]
pub struct FilesystemRenderer {
    base_dir: Option<PathBuf>,
    extensions: Vec<String>,
}

impl Default for FilesystemRenderer {
    fn default() -> Self {
        Self {
            base_dir: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl FilesystemRenderer {
    /// Renderer for `txt`, `php` and `html` templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative template names against `base_dir`
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    fn template_path(&self, template_name: &str) -> PathBuf {
        let path = Path::new(template_name);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl MailRenderer for FilesystemRenderer {
    fn supports(&self, _template_name: &str, extension: Option<&str>) -> bool {
        supports_extension(&self.extensions, extension)
    }

    fn render(&self, template_name: &str, context: &RenderContext) -> Result<String> {
        let path = self.template_path(template_name);
        debug!("Rendering template file {}", path.display());

        let source = fs::read_to_string(&path)?;
        Ok(render_string(&source, context))
    }
}

/// Renders templates registered up front under a name.
#[derive(Debug, Clone)]
pub struct InMemoryRenderer {
    templates: HashMap<String, String>,
    extensions: Vec<String>,
}

impl Default for InMemoryRenderer {
    fn default() -> Self {
        Self {
            templates: HashMap::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl InMemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_template(
        &mut self,
        template_name: impl Into<String>,
        source: impl Into<String>,
    ) -> &mut Self {
        self.templates.insert(template_name.into(), source.into());
        self
    }

    pub fn with_template(
        mut self,
        template_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.add_template(template_name, source);
        self
    }
}

impl MailRenderer for InMemoryRenderer {
    fn supports(&self, _template_name: &str, extension: Option<&str>) -> bool {
        supports_extension(&self.extensions, extension)
    }

    fn render(&self, template_name: &str, context: &RenderContext) -> Result<String> {
        let source = self
            .templates
            .get(template_name)
            .ok_or_else(|| MailError::TemplateNotFound(template_name.to_string()))?;
        Ok(render_string(source, context))
    }
}

fn supports_extension(extensions: &[String], extension: Option<&str>) -> bool {
    match extension {
        Some(ext) if !ext.is_empty() => extensions.iter().any(|e| e == ext),
        _ => false,
    }
}

/// Replace every `{{ name }}` in `template` with the context value.
///
/// Strings are inserted verbatim, other values as JSON text. Unknown
/// variables render as nothing.
pub fn render_string(template: &str, context: &RenderContext) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            // Unterminated placeholder, keep as text
            output.push_str(&rest[start..]);
            return output;
        };

        let var_name = after_open[..end].trim();
        match context.get(var_name) {
            Some(Value::String(s)) => output.push_str(s),
            Some(Value::Null) => {}
            Some(other) => output.push_str(&other.to_string()),
            None => warn!("Undefined template variable: {}", var_name),
        }

        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}
