//! Field rules for create customer requests.
//!
//! Messages are keyed by the PascalCase field name clients see in problem bodies.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    model::customer::CustomerPayload,
    server::{data::customer::NewCustomer, error::customer::ValidationErrors},
};

pub static FULL_NAME_FIELD: &str = "FullName";
pub static EMAIL_FIELD: &str = "Email";
pub static GITHUB_USERNAME_FIELD: &str = "GitHubUsername";
pub static DATE_OF_BIRTH_FIELD: &str = "DateOfBirth";
/// GitHub account problems are reported against the customer as a whole.
pub static CUSTOMER_FIELD: &str = "Customer";

static FULL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z ,.'-]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .unwrap()
});

// 1-39 alphanumerics or single hyphens, not starting or ending with a hyphen
static GITHUB_USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,37}[A-Za-z0-9])?$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    !email.contains("..") && EMAIL_REGEX.is_match(email)
}

/// Whether `username` could name a GitHub account at all, checked before any lookup.
pub fn is_valid_github_username(username: &str) -> bool {
    GITHUB_USERNAME_REGEX.is_match(username) && !username.contains("--")
}

pub fn unknown_github_user_message(username: &str) -> String {
    format!("There is no GitHub user with username {}", username)
}

pub fn required_message(field: &str) -> String {
    format!("The {} field is required.", field)
}

/// Parses a calendar date, also accepting a midnight-style timestamp and keeping its date.
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .ok()
}

/// Check every field that does not need the GitHub API, recording failures in `errors`.
///
/// A missing GitHub username is recorded by the caller, which looks it up first; here it
/// only prevents a [`NewCustomer`] from being returned.
///
/// # Returns
/// - `Some(NewCustomer)` - Every field checked here is present and valid
/// - `None` - At least one field is missing or invalid
pub fn validate_fields(
    payload: CustomerPayload,
    today: NaiveDate,
    errors: &mut ValidationErrors,
) -> Option<NewCustomer> {
    let full_name = required(payload.full_name, FULL_NAME_FIELD, errors).filter(|full_name| {
        let valid = FULL_NAME_REGEX.is_match(full_name);
        if !valid {
            errors.add(
                FULL_NAME_FIELD,
                format!("{} is not a valid full name", full_name),
            );
        }
        valid
    });

    let email = required(payload.email, EMAIL_FIELD, errors).filter(|email| {
        let valid = is_valid_email(email);
        if !valid {
            errors.add(EMAIL_FIELD, format!("{} is not a valid email address", email));
        }
        valid
    });

    let date_of_birth = required(payload.date_of_birth, DATE_OF_BIRTH_FIELD, errors)
        .and_then(|value| {
            let date = parse_date_of_birth(&value);
            if date.is_none() {
                errors.add(
                    DATE_OF_BIRTH_FIELD,
                    format!("{} is not a valid date of birth", value),
                );
            }
            date
        })
        .filter(|date| {
            let valid = *date <= today;
            if !valid {
                errors.add(
                    DATE_OF_BIRTH_FIELD,
                    format!(
                        "{} is not a valid date of birth, it cannot be in the future",
                        date
                    ),
                );
            }
            valid
        });

    Some(NewCustomer {
        full_name: full_name?,
        email: email?,
        github_username: payload.github_username?,
        date_of_birth: date_of_birth?,
    })
}

fn required(value: Option<String>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    if value.is_none() {
        errors.add(field, required_message(field));
    }
    value
}
