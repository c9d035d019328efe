//! Mailbox value object
//!
//! Parses the address shapes callers hand in (plain strings, `Name <email>`
//! strings, named or positional pairs, host user objects) into validated
//! [`Mailbox`] values. Email syntax checking is delegated to a swappable
//! [`EmailValidator`].

pub mod resolver;
pub mod types;
pub mod validator;

pub use resolver::AddressResolver;
pub use types::{AddressInput, HostUser, Mailbox, UserRecord};
pub use validator::{DefaultValidator, EmailValidator, HostCallback};
