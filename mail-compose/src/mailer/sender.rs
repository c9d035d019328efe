//! Email sender: defaults, template rendering, delivery

use std::sync::Arc;
use tracing::{debug, info};

use crate::email::Email;
use crate::error::{MailError, Result};
use crate::mailbox::Mailbox;
use crate::mailer::transport::Transport;
use crate::templates::RendererRegistry;

/// Values applied to emails that leave them unset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MailDefaults {
    pub from: Option<Mailbox>,
    pub reply_to: Option<Mailbox>,
}

/// Prepares emails and hands them to a [`Transport`]
pub struct Mailer {
    transport: Arc<dyn Transport>,
    renderers: RendererRegistry,
    defaults: MailDefaults,
}

impl Mailer {
    pub fn new(transport: Arc<dyn Transport>, renderers: RendererRegistry) -> Self {
        Self {
            transport,
            renderers,
            defaults: MailDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: MailDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &MailDefaults {
        &self.defaults
    }

    /// Apply defaults and render templates without sending
    pub fn prepare(&self, mut email: Email) -> Result<Email> {
        if email.from.is_none() {
            email.from = self.defaults.from.clone();
        }
        if email.reply_to.is_empty() {
            if let Some(reply_to) = &self.defaults.reply_to {
                email.reply_to.push(reply_to.clone());
            }
        }

        if !email.has_recipients() {
            return Err(MailError::MissingRecipients);
        }

        if let Some(template) = &email.html_template {
            email.html = Some(self.renderers.render_path(template, &email.context)?);
        }
        if let Some(template) = &email.text_template {
            email.text = Some(self.renderers.render_path(template, &email.context)?);
        }

        if !email.has_body() {
            return Err(MailError::MissingBody);
        }

        Ok(email)
    }

    pub fn send(&self, email: Email) -> Result<()> {
        let email = self.prepare(email)?;
        debug!(
            "Sending email with subject {:?} to {} recipient(s)",
            email.subject,
            email.recipients().count()
        );

        self.transport.send(&email)?;

        info!(
            "Sent email to {}",
            email
                .to
                .iter()
                .map(|m| m.address())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(())
    }
}
