//! Input checks performed before anything is sent to the server.
//!
//! Checks run in the order the fields appear on the screen and stop at the
//! first failure so the user sees one message at a time.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::sync::LazyLock;

use crate::{
    const_config::validation::{VALIDATION_EMAIL_PATTERN, VALIDATION_PASSWORD_MIN_LENGTH},
    errors::ValidationError,
    req_args::{ChangePasswordReqArgs, RegisterReqArgs},
};

fn email_regex() -> &'static Regex {
    static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(VALIDATION_EMAIL_PATTERN).expect("pattern is checked by the tests below")
    });
    &EMAIL
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

pub fn validate_login(username: &str, password: &SecretString) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::BlankUsername);
    }
    if password.expose_secret().trim().is_empty() {
        return Err(ValidationError::BlankPassword);
    }
    Ok(())
}

pub fn validate_registration(args: &RegisterReqArgs) -> Result<(), ValidationError> {
    if args.full_name.trim().is_empty() {
        return Err(ValidationError::BlankFullName);
    }
    if args.username.trim().is_empty() {
        return Err(ValidationError::BlankUsername);
    }
    if !is_valid_email(&args.email) {
        return Err(ValidationError::InvalidEmail);
    }
    validate_new_password(&args.password, &args.confirm_password)
}

pub fn validate_password_change(args: &ChangePasswordReqArgs) -> Result<(), ValidationError> {
    if args.current_password.expose_secret().is_empty() {
        return Err(ValidationError::BlankPassword);
    }
    validate_new_password(&args.new_password, &args.new_password_check)
}

fn validate_new_password(
    password: &SecretString,
    confirmation: &SecretString,
) -> Result<(), ValidationError> {
    if password.expose_secret().chars().count() < VALIDATION_PASSWORD_MIN_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: VALIDATION_PASSWORD_MIN_LENGTH,
        });
    }
    if password.expose_secret() != confirmation.expose_secret() {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
