//! Email syntax validation strategies

use serde_json::Value;

/// A strategy deciding whether an email string is acceptable.
///
/// `Some(verdict)` is a normal answer. `None` means the strategy failed to
/// produce a boolean at all, which the resolver reports as a contract
/// violation instead of an invalid email.
pub trait EmailValidator: Send + Sync {
    fn validate(&self, email: &str) -> Option<bool>;
}

impl<F> EmailValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, email: &str) -> Option<bool> {
        Some(self(email))
    }
}

/// Built-in syntax check.
///
/// Not a full RFC 5322 parser, but rejects obviously malformed input such
/// as a domain without a dot.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidator;

impl EmailValidator for DefaultValidator {
    fn validate(&self, email: &str) -> Option<bool> {
        Some(is_valid_email(email))
    }
}

/// Adapter for validators supplied by the host, e.g. filter callbacks
/// whose return value is not typed.
pub struct HostCallback<F> {
    callback: F,
}

impl<F> HostCallback<F>
where
    F: Fn(&str) -> Value + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> EmailValidator for HostCallback<F>
where
    F: Fn(&str) -> Value + Send + Sync,
{
    fn validate(&self, email: &str) -> Option<bool> {
        (self.callback)(email).as_bool()
    }
}

/// Characters only allowed in quoted local parts, which are not supported
const LOCAL_PART_SPECIALS: [char; 11] = ['<', '>', '"', ',', '(', ')', '[', ']', ';', ':', '\\'];

/// Basic email syntax check
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }

    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    if local.contains(LOCAL_PART_SPECIALS) {
        return false;
    }

    if !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("calvin@web.de"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(is_valid_email("c@web.de"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("calvin"));
        assert!(!is_valid_email("calvin@"));
        assert!(!is_valid_email("@web.de"));
        assert!(!is_valid_email("calvin@webde"));
        assert!(!is_valid_email("calvin alkan"));
        assert!(!is_valid_email("calvin@@web.de"));
        assert!(!is_valid_email("calvin@web..de"));
        assert!(!is_valid_email(".calvin@web.de"));
        assert!(!is_valid_email("calvin@-web.de"));
    }

    #[test]
    fn test_local_part_specials_are_rejected() {
        for email in [
            "a<b@web.de",
            "a>b@web.de",
            "\"a\"@web.de",
            "a,b@web.de",
            "a(b)@web.de",
            "a[b]@web.de",
            "a;b@web.de",
            "a:b@web.de",
            "a\\b@web.de",
        ] {
            assert!(!is_valid_email(email), "{} should be rejected", email);
        }
    }

    #[test]
    fn test_closure_is_a_validator() {
        let only_calvin = |email: &str| email == "calvin@web.de";
        assert_eq!(only_calvin.validate("calvin@web.de"), Some(true));
        assert_eq!(only_calvin.validate("marlon@web.de"), Some(false));
    }

    #[test]
    fn test_host_callback_without_boolean_has_no_verdict() {
        let validator = HostCallback::new(|_: &str| Value::Null);
        assert_eq!(validator.validate("marlon@web.de"), None);

        let validator = HostCallback::new(|email: &str| json!(email.ends_with(".de")));
        assert_eq!(validator.validate("marlon@web.de"), Some(true));
        assert_eq!(validator.validate("marlon@web.com"), Some(false));
    }
}
