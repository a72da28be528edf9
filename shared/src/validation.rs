//! Form validation for the scheduler and the schedule generator

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::models::{ScheduleForm, DEFAULT_FORM_TIME};

/// Message shown when a required field is blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// A user-visible form error tied to one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FormError {
    pub field: &'static str,
    pub message: String,
}

impl FormError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// ============================================================================
// Schedule Form
// ============================================================================

/// Typed values of an accepted schedule form
#[derive(Debug, Clone, PartialEq)]
pub struct ValidScheduleForm {
    pub farm_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_hours: Decimal,
    pub amount_inches: Decimal,
}

/// Validate a schedule form
///
/// Farm, duration, and amount are required. Duration and amount must be
/// positive numbers kept as entered, time must be `HH:MM` (blank means
/// `DEFAULT_FORM_TIME`), and a missing date means `today`.
pub fn validate_schedule_form(
    form: &ScheduleForm,
    today: NaiveDate,
) -> Result<ValidScheduleForm, FormError> {
    let required = [
        ("farm_name", &form.farm_name),
        ("duration", &form.duration),
        ("amount", &form.amount),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(FormError::new(field, REQUIRED_FIELDS_MESSAGE));
    }

    let duration_hours = parse_positive(&form.duration)
        .ok_or_else(|| FormError::new("duration", "Duration must be a positive number of hours"))?;
    let amount_inches = parse_positive(&form.amount)
        .ok_or_else(|| FormError::new("amount", "Amount must be a positive number of inches"))?;

    let time = match form.time.trim() {
        "" => DEFAULT_FORM_TIME,
        entered => entered,
    };
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| FormError::new("time", "Time must be in HH:MM format"))?;

    Ok(ValidScheduleForm {
        farm_name: form.farm_name.trim().to_string(),
        date: form.date.unwrap_or(today),
        time,
        duration_hours,
        amount_inches,
    })
}

fn parse_positive(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim())
        .ok()
        .filter(|v| *v > Decimal::ZERO)
}

// ============================================================================
// Schedule Generator Form
// ============================================================================

/// Inputs of the AI schedule generator
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(default)]
pub struct GenerateScheduleForm {
    #[validate(custom = "not_blank")]
    pub farm: String,
    #[validate(custom = "not_blank")]
    pub crop: String,
    #[validate(custom = "not_blank")]
    pub soil_type: String,
    /// Current soil moisture, percent
    #[validate(custom = "not_blank")]
    pub moisture: String,
    #[validate(custom = "not_blank")]
    pub method: String,
    /// Irrigation system efficiency, percent
    #[validate(custom = "not_blank")]
    pub efficiency: String,
}

const GENERATOR_FIELDS: [&str; 6] = ["farm", "crop", "soil_type", "moisture", "method", "efficiency"];

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Validate that none of the six generator fields is blank
pub fn validate_generator_form(form: &GenerateScheduleForm) -> Result<(), FormError> {
    match form.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let failed = errors.field_errors();
            let field = GENERATOR_FIELDS
                .into_iter()
                .find(|f| failed.contains_key(f))
                .unwrap_or("form");
            Err(FormError::new(field, REQUIRED_FIELDS_MESSAGE))
        }
    }
}
