//! # Registration Schema
//!
//! Field rules for the registration form. Every text input is trimmed before it is
//! checked, lengths are counted in characters, and each field is judged on its own:
//! one bad field never changes the verdict on another.
//!
//! | Field     | Rule                                          |
//! |-----------|-----------------------------------------------|
//! | full name | 2..=100 characters                            |
//! | email     | address with a dotted domain and letter TLD   |
//! | phone     | 10..=15 characters, any content               |
//! | college   | 2..=200 characters                            |
//! | event     | one of the 14 catalog events                  |
//! | team size | one of `1`, `2`, `3-4`, `5+`                  |
//! | message   | optional, at most 500 characters              |

use otsav_domain::catalog::{FestivalEvent, TeamSize};
use otsav_domain::registration::{FieldErrors, FormField, RegistrationDraft, RegistrationRequest};
use std::borrow::Cow;
use validator::ValidateEmail;

/// Validation message shown next to a field.
pub type FieldMessage = Cow<'static, str>;

struct LengthRule {
    min: usize,
    max: usize,
    too_short: &'static str,
    too_long: &'static str,
}

const FULL_NAME: LengthRule = LengthRule {
    min: 2,
    max: 100,
    too_short: "Name must be at least 2 characters",
    too_long: "Name must be at most 100 characters",
};

const PHONE: LengthRule = LengthRule {
    min: 10,
    max: 15,
    too_short: "Phone number must be at least 10 digits",
    too_long: "Phone number must be at most 15 characters",
};

const COLLEGE: LengthRule = LengthRule {
    min: 2,
    max: 200,
    too_short: "College name is required",
    too_long: "College name must be at most 200 characters",
};

const MESSAGE_MAX: usize = 500;

const INVALID_EMAIL: &str = "Please enter a valid email";
const MISSING_EVENT: &str = "Please select an event";
const MISSING_TEAM_SIZE: &str = "Please select team size";
const UNKNOWN_EVENT: &str = "Please select a valid event";
const UNKNOWN_TEAM_SIZE: &str = "Please select a valid team size";
const MESSAGE_TOO_LONG: &str = "Message must be at most 500 characters";

/// Validates a whole draft.
///
/// On success the request carries trimmed values, typed catalog entries and
/// `message: None` when the message was blank.
///
/// # Errors
/// Returns every failing field with its message; fields that pass are absent.
pub fn validate(draft: &RegistrationDraft) -> Result<RegistrationRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let full_name = accept(&mut errors, FormField::FullName, draft, full_name);
    let email = accept(&mut errors, FormField::Email, draft, email);
    let phone = accept(&mut errors, FormField::Phone, draft, phone);
    let college = accept(&mut errors, FormField::College, draft, college);
    let event = accept(&mut errors, FormField::Event, draft, event);
    let team_size = accept(&mut errors, FormField::TeamSize, draft, team_size);
    let message = accept(&mut errors, FormField::Message, draft, message);

    let (
        Some(full_name),
        Some(email),
        Some(phone),
        Some(college),
        Some(event),
        Some(team_size),
        Some(message),
    ) = (full_name, email, phone, college, event, team_size, message)
    else {
        return Err(errors);
    };

    Ok(RegistrationRequest { full_name, email, phone, college, event, team_size, message })
}

/// Checks a single raw value, e.g. when an input loses focus.
///
/// # Errors
/// Returns the message the form shows for this field.
pub fn validate_field(field: FormField, raw: &str) -> Result<(), FieldMessage> {
    let value = raw.trim();
    match field {
        FormField::FullName => full_name(value).map(drop),
        FormField::Email => email(value).map(drop),
        FormField::Phone => phone(value).map(drop),
        FormField::College => college(value).map(drop),
        FormField::Event => event(value).map(drop),
        FormField::TeamSize => team_size(value).map(drop),
        FormField::Message => message(value).map(drop),
    }
}

fn accept<T>(
    errors: &mut FieldErrors,
    field: FormField,
    draft: &RegistrationDraft,
    rule: fn(&str) -> Result<T, FieldMessage>,
) -> Option<T> {
    match rule(draft.get(field).trim()) {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        },
    }
}

fn full_name(value: &str) -> Result<String, FieldMessage> {
    check_length(value, &FULL_NAME)
}

fn email(value: &str) -> Result<String, FieldMessage> {
    let well_formed = value.validate_email()
        && value.rsplit_once('@').is_some_and(|(local, domain)| {
            is_plain_local_part(local) && is_dotted_domain(domain)
        });
    if well_formed { Ok(value.to_owned()) } else { Err(INVALID_EMAIL.into()) }
}

/// Letters, digits and `_ ' + - .`; no leading, trailing or doubled dot.
fn is_plain_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.ends_with('\'')
        && !local.contains("..")
        && local.chars().all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
}

/// At least two labels, each opening with a letter or digit, and a top-level
/// label of two or more ASCII letters.
fn is_dotted_domain(domain: &str) -> bool {
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && host.split('.').all(|label| {
            label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

fn phone(value: &str) -> Result<String, FieldMessage> {
    check_length(value, &PHONE)
}

fn college(value: &str) -> Result<String, FieldMessage> {
    check_length(value, &COLLEGE)
}

fn event(value: &str) -> Result<FestivalEvent, FieldMessage> {
    if value.is_empty() {
        return Err(MISSING_EVENT.into());
    }
    value.parse().map_err(|_| UNKNOWN_EVENT.into())
}

fn team_size(value: &str) -> Result<TeamSize, FieldMessage> {
    if value.is_empty() {
        return Err(MISSING_TEAM_SIZE.into());
    }
    value.parse().map_err(|_| UNKNOWN_TEAM_SIZE.into())
}

fn message(value: &str) -> Result<Option<String>, FieldMessage> {
    if value.chars().count() > MESSAGE_MAX {
        return Err(MESSAGE_TOO_LONG.into());
    }
    Ok((!value.is_empty()).then(|| value.to_owned()))
}

fn check_length(value: &str, rule: &LengthRule) -> Result<String, FieldMessage> {
    let len = value.chars().count();
    if len < rule.min {
        Err(rule.too_short.into())
    } else if len > rule.max {
        Err(rule.too_long.into())
    } else {
        Ok(value.to_owned())
    }
}
