use crate::email::types::{Attachment, Priority};
use crate::error::Result;
use crate::mailbox::{AddressInput, AddressResolver, Mailbox};
use crate::templates::RenderContext;

/// An email ready to be handed to a mailer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Email {
    pub to: Vec<Mailbox>,
    pub cc: Vec<Mailbox>,
    pub bcc: Vec<Mailbox>,
    pub reply_to: Vec<Mailbox>,
    pub from: Option<Mailbox>,
    pub sender: Option<Mailbox>,
    pub return_path: Option<Mailbox>,
    pub subject: Option<String>,
    /// Plain text body
    pub text: Option<String>,
    /// HTML body
    pub html: Option<String>,
    /// Rendered into `text` when the mail is sent
    pub text_template: Option<String>,
    /// Rendered into `html` when the mail is sent
    pub html_template: Option<String>,
    /// Variables for both templates
    pub context: RenderContext,
    pub attachments: Vec<Attachment>,
    /// Custom headers, in insertion order
    pub headers: Vec<(String, String)>,
    pub priority: Option<Priority>,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to<'a>(mut self, address: impl Into<AddressInput<'a>>) -> Result<Self> {
        self.to.push(Mailbox::create(address)?);
        Ok(self)
    }

    pub fn cc<'a>(mut self, address: impl Into<AddressInput<'a>>) -> Result<Self> {
        self.cc.push(Mailbox::create(address)?);
        Ok(self)
    }

    pub fn bcc<'a>(mut self, address: impl Into<AddressInput<'a>>) -> Result<Self> {
        self.bcc.push(Mailbox::create(address)?);
        Ok(self)
    }

    pub fn reply_to<'a>(mut self, address: impl Into<AddressInput<'a>>) -> Result<Self> {
        self.reply_to.push(Mailbox::create(address)?);
        Ok(self)
    }

    pub fn from<'a>(mut self, address: impl Into<AddressInput<'a>>) -> Result<Self> {
        self.from = Some(Mailbox::create(address)?);
        Ok(self)
    }

    pub fn sender<'a>(mut self, address: impl Into<AddressInput<'a>>) -> Result<Self> {
        self.sender = Some(Mailbox::create(address)?);
        Ok(self)
    }

    pub fn return_path<'a>(mut self, address: impl Into<AddressInput<'a>>) -> Result<Self> {
        self.return_path = Some(Mailbox::create(address)?);
        Ok(self)
    }

    /// Add several recipients resolved with `resolver`
    pub fn to_all<'a, I, A>(mut self, resolver: &AddressResolver, addresses: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<AddressInput<'a>>,
    {
        for address in addresses {
            self.to.push(resolver.resolve(address)?);
        }
        Ok(self)
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn text_template(mut self, template: impl Into<String>) -> Self {
        self.text_template = Some(template.into());
        self
    }

    pub fn html_template(mut self, template: impl Into<String>) -> Self {
        self.html_template = Some(template.into());
        self
    }

    pub fn context(mut self, context: RenderContext) -> Self {
        self.context.extend(context);
        self
    }

    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// All To, Cc and Bcc recipients
    pub fn recipients(&self) -> impl Iterator<Item = &Mailbox> {
        self.to.iter().chain(self.cc.iter()).chain(self.bcc.iter())
    }

    pub fn has_recipients(&self) -> bool {
        self.recipients().next().is_some()
    }

    pub fn has_body(&self) -> bool {
        self.text.is_some() || self.html.is_some()
    }

    /// Headers in the order a transport should write them, custom headers last
    pub fn header_lines(&self) -> Vec<(String, String)> {
        let mut lines = Vec::new();

        if let Some(from) = &self.from {
            lines.push(("From".to_string(), from.to_string()));
        }
        if let Some(sender) = &self.sender {
            lines.push(("Sender".to_string(), sender.to_string()));
        }
        for (name, list) in [
            ("To", &self.to),
            ("Cc", &self.cc),
            ("Reply-To", &self.reply_to),
        ] {
            if !list.is_empty() {
                lines.push((name.to_string(), join_mailboxes(list)));
            }
        }
        if let Some(subject) = &self.subject {
            lines.push(("Subject".to_string(), subject.clone()));
        }
        if let Some(priority) = &self.priority {
            lines.push(("X-Priority".to_string(), priority.header_value()));
        }

        lines.extend(self.headers.iter().cloned());
        lines
    }
}

fn join_mailboxes(mailboxes: &[Mailbox]) -> String {
    mailboxes
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
