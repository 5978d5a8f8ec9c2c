//! Client-side form validation. Runs before any request is built.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Per-field messages shown under the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }

    pub fn on_email(message: impl Into<String>) -> Self {
        Self { email: Some(message.into()), ..Self::default() }
    }

    pub fn on_password(message: impl Into<String>) -> Self {
        Self { password: Some(message.into()), ..Self::default() }
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Loose `something@something.something` check, whitespace not allowed.
pub fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // The dot may sit anywhere after the '@' as long as both sides are non-empty.
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// # Errors
///
/// Returns the field messages when email or password is missing.
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if email.trim().is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_owned());
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED.to_owned());
    }
    errors.into_result()
}

/// # Errors
///
/// Returns the field messages for a missing/invalid email, a missing or short
/// password, or a confirmation that does not match.
pub fn validate_signup(email: &str, password: &str, confirm_password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    let email = email.trim();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_owned());
    } else if !looks_like_email(email) {
        errors.email = Some(EMAIL_INVALID.to_owned());
    }

    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED.to_owned());
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(PASSWORD_TOO_SHORT.to_owned());
    }

    if password != confirm_password {
        errors.confirm_password = Some(PASSWORDS_DIFFER.to_owned());
    }
    errors.into_result()
}
