//! Email value object
//!
//! Carries recipients, subject, bodies or body templates, attachments and
//! custom headers. Addresses are resolved into [`Mailbox`](crate::mailbox::Mailbox)
//! values as they are added.

pub mod message;
pub mod types;

pub use message::Email;
pub use types::{Attachment, AttachmentSource, Priority};
