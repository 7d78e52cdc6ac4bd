//! DTOs for the user endpoints.
//!
//! [`UserRequest`] carries the validation rules for incoming records;
//! [`UserResponse`] is the only shape ever written back, and it has no
//! password field.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Number, json};
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;

/// Compiled regex for first and last names.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

const MSG_REQUIRED: &str = "must not be null";
const MSG_AGE_DIGITS: &str = "numeric value out of bounds (<3 digits>.<0 digits> expected)";
const MSG_EMAIL: &str = "must be a well-formed email address";

/// Largest magnitude an age may have: three integer digits.
const MAX_AGE_MAGNITUDE: u64 = 999;

/// Incoming user record for create and update.
///
/// Every field is optional at the deserialization level so that a missing
/// value is reported as a rule violation next to all the others instead of
/// failing the whole body.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Only honoured on update.
    pub id: Option<i64>,

    #[validate(
        required(message = "must not be null"),
        length(min = 2, max = 50, message = "size must be between 2 and 50"),
        regex(path = *NAME_REGEX, message = "must match \"[a-zA-Z]+\"")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "must not be null"),
        length(min = 2, max = 50, message = "size must be between 2 and 50"),
        regex(path = *NAME_REGEX, message = "must match \"[a-zA-Z]+\"")
    )]
    pub last_name: Option<String>,

    #[validate(
        required(message = "must not be null"),
        custom(function = "validate_age_digits")
    )]
    pub age: Option<Number>,

    #[validate(
        required(message = "must not be null"),
        custom(function = "validate_email_address")
    )]
    pub email: Option<String>,

    /// Accepted on input, stored, never echoed.
    pub password: Option<String>,
}

impl UserRequest {
    /// Runs the field rules and additionally requires an `id`.
    ///
    /// # Errors
    ///
    /// Returns every violated rule, including a missing `id`.
    pub fn validate_for_update(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.id.is_none() {
            errors.add(
                "id",
                ValidationError::new("required").with_message(Cow::Borrowed(MSG_REQUIRED)),
            );
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Converts a validated request into the domain input type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is missing or the
    /// age is not a whole number that fits the column. Callers run
    /// [`Validate::validate`] first, so this only fires on misuse.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        let (Some(first_name), Some(last_name), Some(age), Some(email)) =
            (self.first_name, self.last_name, self.age, self.email)
        else {
            return Err(AppError::bad_request(
                "Incomplete user record",
                json!({ "required": ["firstName", "lastName", "age", "email"] }),
            ));
        };

        let age = whole_number(&age)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| AppError::bad_request("Invalid age", json!({ "age": age })))?;

        Ok(NewUser {
            id: self.id,
            first_name,
            last_name,
            age,
            email,
            password: self.password,
        })
    }
}

/// Outward-facing user representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            email: user.email,
        }
    }
}

/// Returns the integer value of a JSON number if it has no fractional part.
fn whole_number(n: &Number) -> Option<i64> {
    if let Some(v) = n.as_i64() {
        return Some(v);
    }

    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
        .map(|f| f as i64)
}

/// Age must be an integer with at most three digits; the sign is not a digit.
fn validate_age_digits(age: &Number) -> Result<(), ValidationError> {
    match whole_number(age) {
        Some(n) if n.unsigned_abs() <= MAX_AGE_MAGNITUDE => Ok(()),
        _ => Err(ValidationError::new("digits").with_message(Cow::Borrowed(MSG_AGE_DIGITS))),
    }
}

/// Standard address grammar with a dotted domain part.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    let dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'));

    if email.validate_email() && dotted_domain {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed(MSG_EMAIL)))
    }
}
