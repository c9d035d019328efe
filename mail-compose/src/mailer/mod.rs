//! Mail sending
//!
//! The [`Mailer`] applies configured defaults, renders body templates and
//! hands the result to a [`Transport`]. Delivery itself belongs to the host.

pub mod sender;
pub mod transport;

pub use sender::{MailDefaults, Mailer};
pub use transport::{FakeTransport, Transport};
