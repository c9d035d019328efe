//! Render an email the way the mailer would and print it
//!
//! # Usage
//!
//! ```bash
//! # Preview an html template for a recipient
//! mail-preview mails/welcome.html --to "Calvin Alkan <calvin@web.de>" \
//!     --subject Welcome --context '{"first_name": "Calvin"}'
//!
//! # Use a config file for sender defaults and the template directory
//! mail-preview welcome.txt --to calvin@web.de --config mail.toml
//! ```

use anyhow::Context;
use clap::Parser;
use mail_compose::email::Email;
use mail_compose::mailer::{FakeTransport, Mailer};
use mail_compose::templates::RenderContext;
use mail_compose::Config;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "mail-preview")]
#[command(about = "Preview a templated email", long_about = None)]
struct Cli {
    /// Template to render; the extension selects the renderer
    template: String,

    /// Recipient, e.g. "Name <email>"
    #[arg(long, required = true)]
    to: Vec<String>,

    #[arg(long)]
    subject: Option<String>,

    /// Template variables as a JSON object
    #[arg(long, default_value = "{}")]
    context: String,

    /// Path to a TOML config file
    #[arg(short, long, default_value = "mail.toml")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Rendering {}", cli.template);

    let context: RenderContext =
        serde_json::from_str(&cli.context).context("--context must be a JSON object")?;

    let mut email = Email::new().context(context);
    for to in &cli.to {
        email = email.to(to)?;
    }
    if let Some(subject) = cli.subject {
        email = email.subject(subject);
    }
    email = if cli.template.ends_with(".txt") {
        email.text_template(cli.template)
    } else {
        email.html_template(cli.template)
    };

    let mailer = Mailer::new(Arc::new(FakeTransport::new()), config.renderer_registry())
        .with_defaults(config.mail_defaults()?);
    let email = mailer.prepare(email)?;

    for (name, value) in email.header_lines() {
        println!("{}: {}", name, value);
    }
    println!();
    if let Some(text) = &email.text {
        println!("{}", text);
    }
    if let Some(html) = &email.html {
        println!("{}", html);
    }

    Ok(())
}
