use crate::error::{MailError, Result};
use crate::mailbox::{AddressInput, Mailbox};
use crate::mailer::MailDefaults;
use crate::templates::{FilesystemRenderer, RendererRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub templates: TemplateConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MailConfig {
    pub from_email: Option<String>,
    pub from_name: Option<String>,
    pub reply_to_email: Option<String>,
    pub reply_to_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// Relative template names are resolved against this directory
    pub base_dir: Option<String>,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            extensions: vec!["txt".to_string(), "php".to_string(), "html".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| MailError::Config(e.to_string()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MailError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            mail: MailConfig::default(),
            templates: TemplateConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Resolve the configured sender addresses
    pub fn mail_defaults(&self) -> Result<MailDefaults> {
        Ok(MailDefaults {
            from: configured_mailbox(&self.mail.from_email, &self.mail.from_name)?,
            reply_to: configured_mailbox(&self.mail.reply_to_email, &self.mail.reply_to_name)?,
        })
    }

    /// A registry holding one filesystem renderer for the configured
    /// directory and extensions
    pub fn renderer_registry(&self) -> RendererRegistry {
        let mut renderer =
            FilesystemRenderer::new().with_extensions(self.templates.extensions.iter().cloned());
        if let Some(base_dir) = &self.templates.base_dir {
            renderer = renderer.with_base_dir(base_dir);
        }
        RendererRegistry::new().with_renderer(renderer)
    }
}

fn configured_mailbox(email: &Option<String>, name: &Option<String>) -> Result<Option<Mailbox>> {
    match email {
        Some(email) => Mailbox::create(AddressInput::Named {
            email: Some(email.clone()),
            name: name.clone(),
        })
        .map(Some)
        .map_err(|e| MailError::Config(e.to_string())),
        None => Ok(None),
    }
}
