//! Renderer selection

use std::path::Path;
use tracing::debug;

use crate::error::{MailError, Result};
use crate::templates::types::{MailRenderer, RenderContext};

/// Ordered list of renderers. Registration order is preference order: the
/// first renderer supporting an extension gets the template.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: Vec<Box<dyn MailRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, renderer: impl MailRenderer + 'static) -> &mut Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    pub fn with_renderer(mut self, renderer: impl MailRenderer + 'static) -> Self {
        self.register(renderer);
        self
    }

    pub fn supports(&self, template_name: &str, extension: Option<&str>) -> bool {
        self.find(template_name, extension).is_some()
    }

    /// The first renderer supporting `extension`
    pub fn renderer_for(
        &self,
        template_name: &str,
        extension: Option<&str>,
    ) -> Result<&dyn MailRenderer> {
        self.find(template_name, extension).ok_or_else(|| {
            MailError::NoRendererFound(extension.unwrap_or_default().to_string())
        })
    }

    pub fn render(
        &self,
        template_name: &str,
        extension: Option<&str>,
        context: &RenderContext,
    ) -> Result<String> {
        let renderer = self.renderer_for(template_name, extension)?;
        renderer.render(template_name, context)
    }

    /// Render `path`, taking the extension from the file name
    pub fn render_path(&self, path: impl AsRef<Path>, context: &RenderContext) -> Result<String> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());
        self.render(&path.to_string_lossy(), extension, context)
    }

    fn find(&self, template_name: &str, extension: Option<&str>) -> Option<&dyn MailRenderer> {
        let found = self
            .renderers
            .iter()
            .position(|r| r.supports(template_name, extension))?;
        debug!(
            "Selected renderer #{} for {} ({:?})",
            found, template_name, extension
        );
        Some(self.renderers[found].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::renderer::InMemoryRenderer;

    #[test]
    fn test_empty_extension_is_never_supported() {
        let registry = RendererRegistry::new().with_renderer(InMemoryRenderer::new());
        assert!(!registry.supports("welcome", Some("")));
        assert!(!registry.supports("welcome", None));
        assert!(registry.supports("welcome.txt", Some("txt")));
    }

    #[test]
    fn test_no_renderer_found() {
        let registry = RendererRegistry::new()
            .with_renderer(InMemoryRenderer::new().with_extensions(["txt"]));

        let err = registry
            .render("welcome.md", Some("md"), &RenderContext::new())
            .unwrap_err();
        assert!(matches!(err, MailError::NoRendererFound(ref ext) if ext == "md"));
    }

    #[test]
    fn test_first_capable_renderer_wins() {
        let registry = RendererRegistry::new()
            .with_renderer(
                InMemoryRenderer::new()
                    .with_extensions(["txt"])
                    .with_template("mail.txt", "A")
                    .with_template("mail.php", "A"),
            )
            .with_renderer(
                InMemoryRenderer::new()
                    .with_extensions(["txt", "php"])
                    .with_template("mail.txt", "B")
                    .with_template("mail.php", "B"),
            );

        let context = RenderContext::new();
        assert_eq!(registry.render("mail.php", Some("php"), &context).unwrap(), "B");
        assert_eq!(registry.render("mail.txt", Some("txt"), &context).unwrap(), "A");
    }

    #[test]
    fn test_render_path_derives_extension() {
        let registry = RendererRegistry::new().with_renderer(
            InMemoryRenderer::new()
                .with_extensions(["html"])
                .with_template("mails/welcome.html", "<p>{{name}}</p>"),
        );

        let context = RenderContext::new().with("name", "Calvin");
        let rendered = registry.render_path("mails/welcome.html", &context).unwrap();
        assert_eq!(rendered, "<p>Calvin</p>");

        let err = registry
            .render_path("mails/welcome", &context)
            .unwrap_err();
        assert!(matches!(err, MailError::NoRendererFound(_)));
    }
}
