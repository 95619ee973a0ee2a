//! Form-field validation for the login and register pages.
//!
//! Pure validators with user-facing messages. The rendering of the fields
//! themselves is outside this crate; callers map each error onto whatever
//! widget produced the value.

use thiserror::Error;

/// A rejected form field, carrying the user-facing message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Blank required field; the payload is the field label
    #[error("{0} is required")]
    Required(&'static str),

    /// Email failed the structural check
    #[error("Invalid email format")]
    InvalidEmail,

    /// Password shorter than the minimum
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    /// Password without an uppercase letter
    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    /// Password without a lowercase letter
    #[error("Password must contain at least one lowercase letter")]
    PasswordMissingLowercase,

    /// Password without a digit
    #[error("Password must contain at least one number")]
    PasswordMissingDigit,

    /// Name shorter than two characters
    #[error("{0} must be at least 2 characters")]
    NameTooShort(&'static str),

    /// Name longer than fifty characters
    #[error("{0} must be less than 50 characters")]
    NameTooLong(&'static str),

    /// Name with characters outside letters, spaces, apostrophes, hyphens
    #[error("{0} contains invalid characters")]
    NameInvalidChars(&'static str),

    /// Phone number with fewer than 10 or more than 15 digits
    #[error("Invalid phone number")]
    InvalidPhone,
}

/// Validates a required field (non-blank after trimming)
///
/// # Errors
///
/// Returns `Required` when the value is empty or whitespace.
pub fn validate_required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Validates email format
///
/// Performs a structural check rather than full RFC 5322 parsing: exactly
/// one `@`, non-empty local part, a dotted domain with non-empty labels, and
/// a conservative character set on both sides.
///
/// # Errors
///
/// Returns `Required` for a blank value, `InvalidEmail` otherwise.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    validate_required(email, "Email")?;

    if is_well_formed_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn is_well_formed_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }

    // Must contain exactly one @
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    // Local and domain parts must be non-empty, domain must be dotted
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return false;
    }

    let valid_local_chars =
        |c: char| c.is_alphanumeric() || c == '.' || c == '-' || c == '+' || c == '_';
    let valid_domain_chars = |c: char| c.is_alphanumeric() || c == '.' || c == '-';

    if !local.chars().all(valid_local_chars) || !domain.chars().all(valid_domain_chars) {
        return false;
    }

    // Domain labels between dots must be non-empty
    domain.split('.').all(|label| !label.is_empty())
}

/// Validates password strength
///
/// Requires at least 8 characters with one uppercase letter, one lowercase
/// letter, and one digit.
///
/// # Errors
///
/// Returns the first unmet requirement, checked in the order above.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    validate_required(password, "Password")?;

    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(ValidationError::PasswordMissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }

    Ok(())
}

/// Validates a person name (first name, last name)
///
/// Accepts 2 to 50 characters drawn from letters, whitespace, apostrophes,
/// and hyphens.
///
/// # Errors
///
/// Returns `Required`, `NameTooShort`, `NameTooLong`, or `NameInvalidChars`.
pub fn validate_name(name: &str, field: &'static str) -> Result<(), ValidationError> {
    validate_required(name, field)?;

    let length = name.chars().count();
    if length < 2 {
        return Err(ValidationError::NameTooShort(field));
    }
    if length > 50 {
        return Err(ValidationError::NameTooLong(field));
    }

    let valid = |c: char| c.is_alphabetic() || c.is_whitespace() || c == '\'' || c == '-';
    if !name.chars().all(valid) {
        return Err(ValidationError::NameInvalidChars(field));
    }

    Ok(())
}

/// Validates a phone number
///
/// Strips every non-digit character and accepts 10 to 15 remaining digits.
///
/// # Errors
///
/// Returns `Required` for a blank value, `InvalidPhone` otherwise.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    validate_required(phone, "Phone number")?;

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(10..=15).contains(&digits) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// Sanitizes free-text input: trims and strips angle brackets
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    input.trim().replace(['<', '>'], "")
}
