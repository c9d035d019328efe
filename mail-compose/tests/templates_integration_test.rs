//! Integration tests for renderer selection and filesystem rendering

use mail_compose::email::Email;
use mail_compose::mailer::{FakeTransport, MailDefaults, Mailer};
use mail_compose::templates::{
    FilesystemRenderer, InMemoryRenderer, MailRenderer, RenderContext, RendererRegistry,
};
use mail_compose::{Config, MailError, Mailbox};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Helper to create a template directory for testing
fn setup_templates() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("welcome.html"),
        "<p>Hello {{ first_name }}, welcome to {{ site }}.</p>",
    )
    .unwrap();
    fs::write(dir.path().join("welcome.txt"), "Hello {{first_name}}").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    dir
}

#[test]
fn test_filesystem_registry_renders_by_extension() {
    let dir = setup_templates();
    let registry = RendererRegistry::new()
        .with_renderer(FilesystemRenderer::new().with_base_dir(dir.path()));

    let context = RenderContext::new()
        .with("first_name", "Calvin")
        .with("site", "snicco.io");

    let html = registry
        .render("welcome.html", Some("html"), &context)
        .unwrap();
    assert_eq!(html, "<p>Hello Calvin, welcome to snicco.io.</p>");

    let text = registry.render_path("welcome.txt", &context).unwrap();
    assert_eq!(text, "Hello Calvin");
}

#[test]
fn test_empty_output_is_not_an_error() {
    let dir = setup_templates();
    let registry = RendererRegistry::new()
        .with_renderer(FilesystemRenderer::new().with_base_dir(dir.path()));

    let rendered = registry
        .render("empty.txt", Some("txt"), &RenderContext::new())
        .unwrap();
    assert_eq!(rendered, "");
}

#[test]
fn test_absolute_path_ignores_base_dir() {
    let dir = setup_templates();
    let other = TempDir::new().unwrap();
    let renderer = FilesystemRenderer::new().with_base_dir(other.path());

    let path = dir.path().join("welcome.txt");
    let rendered = renderer
        .render(
            path.to_str().unwrap(),
            &RenderContext::new().with("first_name", "Marlon"),
        )
        .unwrap();
    assert_eq!(rendered, "Hello Marlon");
}

#[test]
fn test_registration_order_decides_among_capable_renderers() {
    let dir = setup_templates();
    let registry = RendererRegistry::new()
        .with_renderer(
            InMemoryRenderer::new()
                .with_extensions(["txt"])
                .with_template("welcome.txt", "in memory"),
        )
        .with_renderer(
            FilesystemRenderer::new()
                .with_base_dir(dir.path())
                .with_extensions(["txt", "html"]),
        );

    let context = RenderContext::new().with("first_name", "Calvin");
    assert_eq!(
        registry.render("welcome.txt", Some("txt"), &context).unwrap(),
        "in memory"
    );
    assert!(registry
        .render("welcome.html", Some("html"), &context)
        .unwrap()
        .starts_with("<p>Hello Calvin"));
}

#[test]
fn test_no_renderer_for_missing_extension() {
    let registry = RendererRegistry::new().with_renderer(FilesystemRenderer::new());

    assert!(!registry.supports("welcome", None));
    assert!(matches!(
        registry.render("welcome", None, &RenderContext::new()),
        Err(MailError::NoRendererFound(_))
    ));
}

#[test]
fn test_mailer_with_config_and_templates() {
    let dir = setup_templates();
    let config = Config::from_toml(&format!(
        r#"
        [mail]
        from_email = "noreply@site.de"
        from_name = "Site"

        [templates]
        base_dir = "{}"
        extensions = ["txt", "html"]
        "#,
        dir.path().display()
    ))
    .unwrap();

    let transport = Arc::new(FakeTransport::new());
    let mailer = Mailer::new(transport.clone(), config.renderer_registry())
        .with_defaults(config.mail_defaults().unwrap());

    let email = Email::new()
        .to("Calvin Alkan <calvin@web.de>")
        .unwrap()
        .subject("Welcome")
        .html_template("welcome.html")
        .text_template("welcome.txt")
        .context(
            RenderContext::new()
                .with("first_name", "Calvin")
                .with("site", "snicco.io"),
        );

    mailer.send(email).unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].from,
        Some(Mailbox::create("Site <noreply@site.de>").unwrap())
    );
    assert_eq!(sent[0].text.as_deref(), Some("Hello Calvin"));
    assert_eq!(
        sent[0].html.as_deref(),
        Some("<p>Hello Calvin, welcome to snicco.io.</p>")
    );
}

#[test]
fn test_mailer_propagates_missing_template() {
    let dir = setup_templates();
    let registry = RendererRegistry::new()
        .with_renderer(FilesystemRenderer::new().with_base_dir(dir.path()));
    let mailer = Mailer::new(Arc::new(FakeTransport::new()), registry)
        .with_defaults(MailDefaults::default());

    let err = mailer
        .send(
            Email::new()
                .to("c@web.de")
                .unwrap()
                .html_template("missing.html"),
        )
        .unwrap_err();
    assert!(matches!(err, MailError::Io(_)));
}
