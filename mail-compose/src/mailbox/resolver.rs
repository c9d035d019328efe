//! Address normalization

use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tracing::error;

use crate::error::{MailError, Result};
use crate::mailbox::types::{AddressInput, HostUser, Mailbox};
use crate::mailbox::validator::{DefaultValidator, EmailValidator};

fn name_addr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<name>[^<]*\S)\s+<(?P<email>[^<>]+)>$").expect("static pattern compiles")
    })
}

/// Turns the accepted input shapes into validated [`Mailbox`] values.
///
/// The resolver owns its validation strategy. Replacing it takes `&mut self`,
/// so a resolver shared between threads has to be configured before it is
/// shared.
#[derive(Clone)]
pub struct AddressResolver {
    validator: Arc<dyn EmailValidator>,
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self {
            validator: Arc::new(DefaultValidator),
        }
    }
}

impl std::fmt::Debug for AddressResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressResolver").finish_non_exhaustive()
    }
}

impl AddressResolver {
    /// Create a resolver using the built-in syntax check
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a custom validation strategy
    pub fn with_validator(validator: impl EmailValidator + 'static) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    pub fn set_validator(&mut self, validator: impl EmailValidator + 'static) {
        self.validator = Arc::new(validator);
    }

    /// Go back to the built-in syntax check
    pub fn reset_validator(&mut self) {
        self.validator = Arc::new(DefaultValidator);
    }

    pub fn resolve<'a>(&self, input: impl Into<AddressInput<'a>>) -> Result<Mailbox> {
        match input.into() {
            AddressInput::Text(text) => self.resolve_text(&text),
            AddressInput::Named { email, name } => {
                self.resolve_named(email.unwrap_or_default(), name.unwrap_or_default())
            }
            AddressInput::Positional(parts) => self.resolve_positional(parts),
            AddressInput::User(user) => self.resolve_user(user),
        }
    }

    /// Resolve loosely typed data, e.g. recipients read from JSON settings.
    ///
    /// Strings, arrays and objects map onto the typed input shapes; anything
    /// else is rejected with the type it had.
    pub fn resolve_value(&self, value: &Value) -> Result<Mailbox> {
        match value {
            Value::String(text) => self.resolve_text(text),
            Value::Array(items) => {
                let parts = items.iter().map(value_as_text).collect();
                self.resolve_positional(parts)
            }
            Value::Object(map) => {
                let email = map.get("email").map(value_as_text).unwrap_or_default();
                let name = map.get("name").map(value_as_text).unwrap_or_default();
                self.resolve_named(email, name)
            }
            other => Err(MailError::UnsupportedInputType(
                type_name(other).to_string(),
            )),
        }
    }

    fn resolve_text(&self, text: &str) -> Result<Mailbox> {
        if !text.contains('<') {
            self.validate(text)?;
            return Ok(Mailbox::new_unchecked(text.to_string(), String::new()));
        }

        let captures = name_addr_pattern()
            .captures(text)
            .ok_or_else(|| MailError::InvalidAddressFormat(text.to_string()))?;

        let email = &captures["email"];
        self.validate(email)?;

        Ok(Mailbox::new_unchecked(
            email.to_string(),
            captures["name"].trim().to_string(),
        ))
    }

    fn resolve_named(&self, email: String, name: String) -> Result<Mailbox> {
        self.validate(&email)?;
        let name = display_name(&name, &email)?;
        Ok(Mailbox::new_unchecked(email, name))
    }

    fn resolve_positional(&self, parts: Vec<String>) -> Result<Mailbox> {
        let mut parts = parts.into_iter();
        let email = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();

        if !self.check(&email)? {
            return Err(MailError::InvalidEmail(email.to_lowercase()));
        }
        let name = display_name(&name, &email)?;
        Ok(Mailbox::new_unchecked(email, name))
    }

    fn resolve_user(&self, user: &dyn HostUser) -> Result<Mailbox> {
        let email = user.user_email().to_string();
        self.validate(&email)?;
        let name = display_name(&user_display_name(user), &email)?;
        Ok(Mailbox::new_unchecked(email, name))
    }

    fn validate(&self, email: &str) -> Result<()> {
        if !self.check(email)? {
            return Err(MailError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    fn check(&self, email: &str) -> Result<bool> {
        self.validator.validate(email).ok_or_else(|| {
            error!("Email validator returned no verdict for [{}]", email);
            MailError::ValidatorContractViolation(email.to_string())
        })
    }
}

/// Trimmed display name. A `<` would make the `name <email>` form
/// ambiguous, so such names are refused.
fn display_name(name: &str, email: &str) -> Result<String> {
    let name = name.trim();
    if name.contains('<') {
        return Err(MailError::InvalidAddressFormat(format!(
            "{} <{}>",
            name, email
        )));
    }
    Ok(name.to_string())
}

/// First and last name when a first name exists, otherwise the display name.
/// A last name on its own is ignored.
fn user_display_name(user: &dyn HostUser) -> String {
    match user.first_name().filter(|first| !first.is_empty()) {
        Some(first) => {
            let last = user.last_name().unwrap_or_default();
            format!("{} {}", first, last).trim().to_string()
        }
        None => user
            .display_name()
            .filter(|display| !display.is_empty())
            .unwrap_or_default()
            .to_string(),
    }
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NULL",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
