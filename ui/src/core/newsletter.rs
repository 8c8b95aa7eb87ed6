//! Newsletter sign-up validation.
//!
//! There is no backend: a submission is only checked locally and the footer
//! flashes a success or error message.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewsletterError {
    #[error("email address is empty")]
    Empty,
    #[error("email address is malformed")]
    Malformed,
}

/// Outcome shown under the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Success,
    Error,
}

impl Flash {
    pub fn label_path(self) -> &'static str {
        match self {
            Flash::Success => "footer.success",
            Flash::Error => "footer.error",
        }
    }
}

/// Check `input` and return the trimmed address.
///
/// Accepts `local@domain.tld` shapes: exactly one `@`, non-empty local part,
/// and a domain containing a dot that is neither leading nor trailing.
pub fn validate_email(input: &str) -> Result<&str, NewsletterError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(NewsletterError::Malformed);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(NewsletterError::Malformed);
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok {
        return Err(NewsletterError::Malformed);
    }
    Ok(email)
}

/// Flash message for a submission.
pub fn submit(input: &str) -> Flash {
    match validate_email(input) {
        Ok(_) => Flash::Success,
        Err(err) => {
            tracing::debug!(%err, "newsletter submission rejected");
            Flash::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(validate_email("  ayu@mega.id "), Ok("ayu@mega.id"));
        assert_eq!(submit("hello@megalenterasolusi.id"), Flash::Success);
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_email("   "), Err(NewsletterError::Empty));
        assert_eq!(submit(""), Flash::Error);
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["ayu", "@mega.id", "ayu@mega", "ayu@.id", "ayu@mega.", "a@b@c.id", "a yu@mega.id"] {
            assert_eq!(validate_email(bad), Err(NewsletterError::Malformed), "{bad}");
        }
    }

    #[test]
    fn flash_labels_resolve() {
        use crate::i18n::{lookup, Language};
        assert_eq!(lookup(Language::En, Flash::Success.label_path()), crate::t!(Language::En, "footer-success"));
        assert_ne!(lookup(Language::Id, Flash::Error.label_path()), "footer.error");
    }
}
