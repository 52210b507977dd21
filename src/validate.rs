use regex::Regex;
use std::sync::LazyLock;

use crate::api_structs::ContactRequest;
use crate::errors::{AppError, FieldErrors};

/// Something, `@`, something, `.`, something. No whitespace or extra `@` anywhere.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A contact submission that passed validation. Values are kept exactly as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Syntactic email check. Deliberately permissive: `a@b..c` passes.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validate a contact form body.
///
/// Missing or empty fields are reported together, with a flag for each of the
/// three fields. A malformed email is only checked once all fields are present.
pub fn validate_contact(req: ContactRequest) -> Result<NewContact, AppError> {
    match (non_empty(req.name), non_empty(req.email), non_empty(req.message)) {
        (Some(name), Some(email), Some(message)) => {
            if !is_valid_email(&email) {
                let mut fields = FieldErrors::new();
                fields.insert("email", true);
                return Err(AppError::InvalidInput {
                    message: "Please enter a valid email address",
                    fields,
                });
            }
            Ok(NewContact {
                name,
                email,
                message,
            })
        }
        (name, email, message) => {
            let mut fields = FieldErrors::new();
            fields.insert("name", name.is_none());
            fields.insert("email", email.is_none());
            fields.insert("message", message.is_none());
            Err(AppError::InvalidInput {
                message: "All fields are required",
                fields,
            })
        }
    }
}
