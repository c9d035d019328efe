//! mail-compose: email composition for CMS plugins
//!
//! Builds email messages from loosely shaped address input and templated
//! bodies, then hands them to the host's delivery mechanism.
//!
//! # Features
//!
//! - **Mailboxes**: `Name <email>` strings, named or positional pairs and
//!   host user objects resolve into validated [`Mailbox`] values
//! - **Validation**: pluggable [`EmailValidator`] strategies
//! - **Templates**: renderers selected by file extension, first match wins
//! - **Sending**: defaults, template rendering and a [`Transport`] seam
//!
//! # Example
//!
//! ```no_run
//! use mail_compose::email::Email;
//! use mail_compose::mailer::{FakeTransport, Mailer};
//! use mail_compose::templates::RenderContext;
//! use mail_compose::Config;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let mailer = Mailer::new(Arc::new(FakeTransport::new()), config.renderer_registry())
//!         .with_defaults(config.mail_defaults()?);
//!
//!     let email = Email::new()
//!         .to("Calvin Alkan <calvin@web.de>")?
//!         .subject("Welcome")
//!         .html_template("mails/welcome.html")
//!         .context(RenderContext::new().with("first_name", "Calvin"));
//!
//!     mailer.send(email)?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`email`]: Email value object
//! - [`error`]: Error types and handling
//! - [`mailbox`]: Address parsing and validation
//! - [`mailer`]: Sending through a transport
//! - [`templates`]: Renderer selection and rendering

pub mod config;
pub mod email;
pub mod error;
pub mod mailbox;
pub mod mailer;
pub mod templates;

// Re-export commonly used types
pub use config::Config;
pub use error::{MailError, Result};
pub use mailbox::{AddressInput, AddressResolver, EmailValidator, Mailbox};
pub use mailer::Transport;
