use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::MailError;
use crate::mailbox::resolver::AddressResolver;

/// A message participant: a validated email address plus an optional
/// display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mailbox {
    email: String,
    name: String,
}

impl Mailbox {
    /// Only the resolver builds mailboxes, so the email has always passed
    /// validation.
    pub(crate) fn new_unchecked(email: String, name: String) -> Self {
        Self { email, name }
    }

    /// Resolve `input` with the default validator
    pub fn create<'a>(input: impl Into<AddressInput<'a>>) -> Result<Self, MailError> {
        AddressResolver::default().resolve(input)
    }

    pub fn address(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}

impl FromStr for Mailbox {
    type Err = MailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mailbox::create(s)
    }
}

impl Serialize for Mailbox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Mailbox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        AddressResolver::default()
            .resolve_value(&value)
            .map_err(serde::de::Error::custom)
    }
}

/// The fields a host CMS user object exposes for addressing.
pub trait HostUser {
    fn user_email(&self) -> &str;

    fn first_name(&self) -> Option<&str> {
        None
    }

    fn last_name(&self) -> Option<&str> {
        None
    }

    fn display_name(&self) -> Option<&str> {
        None
    }
}

/// Plain user record, e.g. deserialized from the host's user API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl HostUser for UserRecord {
    fn user_email(&self) -> &str {
        &self.user_email
    }

    fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// The accepted shapes of an address before resolution
pub enum AddressInput<'a> {
    /// `calvin@web.de` or `Calvin Alkan <calvin@web.de>`
    Text(String),
    /// Named fields; the name defaults to empty
    Named {
        email: Option<String>,
        name: Option<String>,
    },
    /// `[email, name]`, the email is always first
    Positional(Vec<String>),
    User(&'a dyn HostUser),
}

impl AddressInput<'_> {
    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        AddressInput::Named {
            email: Some(email.into()),
            name: Some(name.into()),
        }
    }
}

impl From<&str> for AddressInput<'_> {
    fn from(value: &str) -> Self {
        AddressInput::Text(value.to_string())
    }
}

impl From<String> for AddressInput<'_> {
    fn from(value: String) -> Self {
        AddressInput::Text(value)
    }
}

impl From<&String> for AddressInput<'_> {
    fn from(value: &String) -> Self {
        AddressInput::Text(value.clone())
    }
}

impl From<Vec<String>> for AddressInput<'_> {
    fn from(value: Vec<String>) -> Self {
        AddressInput::Positional(value)
    }
}

impl From<Vec<&str>> for AddressInput<'_> {
    fn from(value: Vec<&str>) -> Self {
        AddressInput::Positional(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AddressInput<'_> {
    fn from(value: [&str; N]) -> Self {
        AddressInput::Positional(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a, U: HostUser> From<&'a U> for AddressInput<'a> {
    fn from(user: &'a U) -> Self {
        AddressInput::User(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_name() {
        let mailbox = Mailbox::new_unchecked("calvin@web.de".to_string(), String::new());
        assert_eq!(mailbox.to_string(), "calvin@web.de");
    }

    #[test]
    fn test_display_with_name() {
        let mailbox =
            Mailbox::new_unchecked("calvin@web.de".to_string(), "Calvin Alkan".to_string());
        assert_eq!(mailbox.to_string(), "Calvin Alkan <calvin@web.de>");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let mailbox =
            Mailbox::new_unchecked("calvin@web.de".to_string(), "Calvin Alkan".to_string());
        let json = serde_json::to_string(&mailbox).unwrap();
        assert_eq!(json, r#""Calvin Alkan <calvin@web.de>""#);

        let parsed: Mailbox = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mailbox);
    }

    #[test]
    fn test_deserialize_from_object() {
        let parsed: Mailbox =
            serde_json::from_str(r#"{"email": "c@web.de", "name": "Calvin"}"#).unwrap();
        assert_eq!(parsed.address(), "c@web.de");
        assert_eq!(parsed.name(), "Calvin");
    }

    #[test]
    fn test_user_record_from_json() {
        let user: UserRecord =
            serde_json::from_str(r#"{"user_email": "c@web.de", "display_name": "Calvin"}"#)
                .unwrap();
        assert_eq!(user.user_email(), "c@web.de");
        assert_eq!(user.display_name(), Some("Calvin"));
        assert_eq!(user.first_name(), None);
    }
}
