use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("[{0}] is not a valid email.")]
    InvalidEmail(String),

    #[error("[{0}] is not a valid address.")]
    InvalidAddressFormat(String),

    #[error("$address has to be string,array or an instance of WP_User. Got [{0}].")]
    UnsupportedInputType(String),

    /// The configured validator did not produce a verdict. This is a
    /// programming error in the validator, not bad user input.
    #[error("MailBox::email_validator did not return a boolean for address [{0}].")]
    ValidatorContractViolation(String),

    #[error("No renderer found for extension [{0}].")]
    NoRendererFound(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("An email must have a To, Cc, or Bcc header.")]
    MissingRecipients,

    #[error("An email must have a text or an html body.")]
    MissingBody,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MailError {
    /// Whether the error stems from a misconfigured component rather than
    /// from the data being processed.
    pub fn is_logic_error(&self) -> bool {
        matches!(self, MailError::ValidatorContractViolation(_))
    }
}

pub type Result<T> = std::result::Result<T, MailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_echo_the_value() {
        let err = MailError::InvalidEmail("calvin@webde".to_string());
        assert_eq!(err.to_string(), "[calvin@webde] is not a valid email.");

        let err = MailError::InvalidAddressFormat("Calvin <calvin@webde".to_string());
        assert_eq!(err.to_string(), "[Calvin <calvin@webde] is not a valid address.");
    }

    #[test]
    fn test_only_contract_violation_is_logic_error() {
        assert!(MailError::ValidatorContractViolation("a@b.de".to_string()).is_logic_error());
        assert!(!MailError::InvalidEmail("a@b".to_string()).is_logic_error());
        assert!(!MailError::MissingBody.is_logic_error());
    }
}
