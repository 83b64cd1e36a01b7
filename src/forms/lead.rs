//! Lead entry form: raw field values as typed and their validation rules.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::lead::LeadCreate;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const HEADCOUNT_NOT_A_NUMBER: &str = "Headcount must be a whole number";
pub const HEADCOUNT_NEGATIVE: &str = "Headcount must be a positive number";

const REQUIRED_CODE: &str = "required";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Fields of the lead form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    JobTitle,
    Company,
    PhoneNumber,
    Industry,
    Headcount,
}

impl LeadField {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::JobTitle => "job_title",
            LeadField::Company => "company",
            LeadField::PhoneNumber => "phone_number",
            LeadField::Industry => "industry",
            LeadField::Headcount => "headcount",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Lead form contents exactly as entered by the user.
pub struct LeadDraft {
    #[serde(default)]
    #[validate(custom(function = "name_required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "email_required"),
        regex(path = *EMAIL_PATTERN, code = "email_format", message = "Invalid email format")
    )]
    pub email: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub industry: String,
    /// Kept as text so partially typed values survive a failed submission.
    #[serde(default)]
    #[validate(custom(function = "headcount_number"))]
    pub headcount: String,
}

/// Posted add-lead form: the draft and the id issued with the rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AddLeadForm {
    #[serde(default)]
    pub submission_id: String,
    #[serde(flatten)]
    pub draft: LeadDraft,
}

/// Per-field validation messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LeadFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub headcount: Option<String>,
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn name_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error(REQUIRED_CODE, NAME_REQUIRED));
    }
    Ok(())
}

fn email_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error(REQUIRED_CODE, EMAIL_REQUIRED));
    }
    Ok(())
}

fn headcount_number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match value.parse::<i64>() {
        Ok(headcount) if headcount < 0 => Err(field_error("positive", HEADCOUNT_NEGATIVE)),
        Ok(_) => Ok(()),
        Err(_) => Err(field_error("number", HEADCOUNT_NOT_A_NUMBER)),
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl LeadFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.headcount.is_none()
    }

    /// Drops the message attached to `field`, if that field carries one.
    pub fn clear(&mut self, field: LeadField) {
        match field {
            LeadField::Name => self.name = None,
            LeadField::Email => self.email = None,
            LeadField::Headcount => self.headcount = None,
            _ => {}
        }
    }

    /// Picks one message per field, preferring "required" over format errors.
    fn from_validation(errors: &ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let message = |field: LeadField| {
            field_errors.get(field.as_str()).and_then(|errors| {
                errors
                    .iter()
                    .find(|error| error.code == REQUIRED_CODE)
                    .or_else(|| errors.first())
                    .map(|error| match &error.message {
                        Some(message) => message.to_string(),
                        None => error.code.to_string(),
                    })
            })
        };

        Self {
            name: message(LeadField::Name),
            email: message(LeadField::Email),
            headcount: message(LeadField::Headcount),
        }
    }
}

impl Display for LeadFormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = [&self.name, &self.email, &self.headcount]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl LeadDraft {
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::JobTitle => self.job_title = value,
            LeadField::Company => self.company = value,
            LeadField::PhoneNumber => self.phone_number = value,
            LeadField::Industry => self.industry = value,
            LeadField::Headcount => self.headcount = value,
        }
    }

    /// Runs every validation rule and, when all pass, builds the payload.
    ///
    /// `headcount_max` is the configured upper bound for the headcount field;
    /// `None` leaves it unbounded.
    pub fn check(&self, headcount_max: Option<i64>) -> Result<LeadCreate, LeadFormErrors> {
        let mut errors = match self.validate() {
            Ok(()) => LeadFormErrors::default(),
            Err(errors) => LeadFormErrors::from_validation(&errors),
        };

        let headcount = self.headcount.trim().parse::<i64>().ok();
        if errors.headcount.is_none() {
            if let (Some(headcount), Some(max)) = (headcount, headcount_max) {
                if headcount > max {
                    errors.headcount = Some(format!("Headcount must be at most {max}"));
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LeadCreate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            job_title: optional(&self.job_title),
            phone_number: optional(&self.phone_number),
            company: optional(&self.company),
            industry: optional(&self.industry),
            headcount,
        })
    }
}
