use crate::error::{FieldError, RosterError};

/// Name and email after trimming and normalization, ready for the store.
#[derive(Debug)]
pub struct UserFields {
    pub name: String,
    pub email: String,
}

/// Checks that both `name` and `email` are present and non-empty after
/// trimming, naming every missing field in the error. Emails are lowercased so
/// the store's uniqueness check and lookups stay case-insensitive.
///
/// There is intentionally no email-shape validation beyond non-emptiness.
pub fn require_name_and_email(
    name: Option<&str>,
    email: Option<&str>,
) -> Result<UserFields, RosterError> {
    let name = name.map(str::trim).unwrap_or_default();
    let email = email.map(str::trim).unwrap_or_default();

    let mut missing = Vec::new();
    if name.is_empty() {
        missing.push(FieldError {
            field: "name".to_string(),
            message: "Name is required".to_string(),
        });
    }
    if email.is_empty() {
        missing.push(FieldError {
            field: "email".to_string(),
            message: "Email is required".to_string(),
        });
    }
    if !missing.is_empty() {
        return Err(RosterError::Validation(missing));
    }

    Ok(UserFields {
        name: name.to_string(),
        email: email.to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_normalizes_valid_input() {
        let fields = require_name_and_email(Some("  John Doe "), Some(" John@Example.COM ")).unwrap();
        assert_eq!(fields.name, "John Doe");
        assert_eq!(fields.email, "john@example.com");
    }

    #[test]
    fn rejects_missing_name() {
        let err = require_name_and_email(None, Some("john@example.com")).unwrap_err();
        match err {
            RosterError::Validation(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "name");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_whitespace_only_fields() {
        let err = require_name_and_email(Some("   "), Some("")).unwrap_err();
        match err {
            RosterError::Validation(fields) => {
                let named: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(named, ["name", "email"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
