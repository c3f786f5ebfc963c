//! Form field validators
//!
//! Pure, stateless rule functions evaluated against form field values.
//! Each rule reports a typed error; the form layer renders the messages.

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty
    Required { field: &'static str },
    /// Value is not a plausible email address
    InvalidEmail,
    /// Password is shorter than the minimum
    TooShort { min: usize, actual: usize },
    /// Password has no uppercase character
    MissingUppercase,
    /// Password has no lowercase character
    MissingLowercase,
    /// Password has no non-alphanumeric character
    MissingNonAlphanumeric,
    /// Password and confirmation differ
    PasswordMismatch,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required { field } => write!(f, "{} is required", field),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email"),
            ValidationError::TooShort { min, actual } => {
                write!(
                    f,
                    "Password is too short ({} chars, minimum {})",
                    actual, min
                )
            }
            ValidationError::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            ValidationError::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            ValidationError::MissingNonAlphanumeric => {
                write!(
                    f,
                    "Password must contain at least one special character (not a letter or digit)"
                )
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation result collecting every violated rule
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result, returning the first error if any
    pub fn to_result(&self) -> Result<(), ValidationError> {
        if let Some(error) = self.errors.first() {
            Err(error.clone())
        } else {
            Ok(())
        }
    }

    /// First error rendered as a message, if any
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(|e| e.to_string())
    }
}

/// True if the value contains an uppercase character
pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_uppercase())
}

/// True if the value contains a lowercase character
pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_lowercase())
}

/// True if the value contains a character that is neither a letter nor a digit
pub fn has_non_alphanumeric(value: &str) -> bool {
    value.chars().any(|c| !c.is_alphanumeric())
}

/// Validates password composition: minimum length, uppercase, lowercase,
/// and non-alphanumeric presence. Every violated rule is reported.
pub fn validate_password(password: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if password.is_empty() {
        result.add_error(ValidationError::Required { field: "Password" });
        return result; // The composition rules would all fire on ""
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        result.add_error(ValidationError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: length,
        });
    }

    if !has_uppercase(password) {
        result.add_error(ValidationError::MissingUppercase);
    }

    if !has_lowercase(password) {
        result.add_error(ValidationError::MissingLowercase);
    }

    if !has_non_alphanumeric(password) {
        result.add_error(ValidationError::MissingNonAlphanumeric);
    }

    result
}

/// Cross-field check: password and confirmation must match
pub fn passwords_match(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if confirmation.is_empty() {
        return Err(ValidationError::Required {
            field: "Password confirmation",
        });
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Non-empty check for a named field
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

/// Shallow email shape check; the server remains the authority
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field: "Email" });
    }
    if !value.contains('@') || !value.contains('.') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("Abc-12").is_valid());
        assert!(validate_password("S3cret!word").is_valid());
        assert!(validate_password("pA ss w").is_valid()); // space counts as special
    }

    #[test]
    fn test_password_too_short() {
        let result = validate_password("Ab!c1");
        assert!(!result.is_valid());
        assert!(result.errors.contains(&ValidationError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: 5
        }));
    }

    #[test]
    fn test_password_missing_uppercase() {
        let result = validate_password("abc-123");
        assert!(result.errors.contains(&ValidationError::MissingUppercase));
    }

    #[test]
    fn test_password_missing_lowercase() {
        let result = validate_password("ABC-123");
        assert!(result.errors.contains(&ValidationError::MissingLowercase));
    }

    #[test]
    fn test_password_missing_non_alphanumeric() {
        let result = validate_password("Abcd123");
        assert!(
            result
                .errors
                .contains(&ValidationError::MissingNonAlphanumeric)
        );
    }

    #[test]
    fn test_empty_password_reports_required_only() {
        let result = validate_password("");
        assert_eq!(
            result.errors,
            vec![ValidationError::Required { field: "Password" }]
        );
    }

    #[test]
    fn test_all_violations_reported() {
        // "ab" violates length, uppercase, and special-character rules
        let result = validate_password("ab");
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("Secret!1", "Secret!1").is_ok());
        assert_eq!(
            passwords_match("Secret!1", "Secret!2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(matches!(
            passwords_match("Secret!1", ""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("user@examplecom"),
            Err(ValidationError::InvalidEmail)
        );
        assert!(matches!(
            validate_email(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("Username", "alice").is_ok());
        assert!(validate_required("Username", "").is_err());
        assert!(validate_required("Username", "   ").is_err());
    }

    #[test]
    fn test_first_message() {
        let result = validate_password("abcdef");
        let message = result.first_message().unwrap();
        assert!(message.contains("uppercase"));

        assert!(validate_password("Abc-12").first_message().is_none());
    }

    #[test]
    fn test_to_result() {
        assert!(validate_password("Abc-12").to_result().is_ok());
        assert!(validate_password("short").to_result().is_err());
    }
}
