//! Irrigation schedule models

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::FarmFilter;

/// Time of day pre-filled into a fresh schedule form
pub const DEFAULT_FORM_TIME: &str = "08:00";

/// A seeded or user-created irrigation event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub id: u32,
    pub farm_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_hours: Decimal,
    pub amount_inches: Decimal,
    pub status: ScheduleStatus,
}

impl ScheduleEntry {
    /// e.g. "May 19, 2025"
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// e.g. "8:00 AM"
    pub fn time_label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }

    /// e.g. "3 hours", "1 hour"
    pub fn duration_label(&self) -> String {
        with_unit(self.duration_hours, "hour", "hours")
    }

    /// e.g. "1.2 inches", "1 inch"
    pub fn amount_label(&self) -> String {
        with_unit(self.amount_inches, "inch", "inches")
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == ScheduleStatus::Scheduled
    }
}

/// Schedule lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Scheduled,
    Completed,
}

/// Raw values of the create/edit schedule form
///
/// Fields stay as entered; `validation::validate_schedule_form` turns them
/// into typed values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScheduleForm {
    pub farm_name: String,
    /// Defaults to today when absent or blank
    #[serde(deserialize_with = "blank_date_as_none")]
    pub date: Option<NaiveDate>,
    /// 24-hour `HH:MM`; blank means `DEFAULT_FORM_TIME`
    pub time: String,
    /// Hours
    pub duration: String,
    /// Inches
    pub amount: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            farm_name: String::new(),
            date: None,
            time: DEFAULT_FORM_TIME.to_string(),
            duration: String::new(),
            amount: String::new(),
        }
    }
}

impl From<&ScheduleEntry> for ScheduleForm {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            farm_name: entry.farm_name.clone(),
            date: Some(entry.date),
            time: entry.time.format("%H:%M").to_string(),
            duration: entry.duration_hours.to_string(),
            amount: entry.amount_inches.to_string(),
        }
    }
}

/// Amount as entered, singular only for a bare `1`
fn with_unit(value: Decimal, singular: &str, plural: &str) -> String {
    let unit = if value == Decimal::ONE && value.scale() == 0 {
        singular
    } else {
        plural
    };
    format!("{} {}", value, unit)
}

/// Cleared date inputs arrive as `""`
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Upcoming/history partition of the schedule list after the farm filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleBoard {
    pub filter: FarmFilter,
    pub upcoming: Vec<ScheduleEntry>,
    pub history: Vec<ScheduleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_empty_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_empty_message: Option<String>,
}

impl ScheduleBoard {
    /// Partition by status, then apply the farm filter to each side
    pub fn build(entries: &[ScheduleEntry], filter: FarmFilter) -> Self {
        let (upcoming, history): (Vec<ScheduleEntry>, Vec<ScheduleEntry>) = entries
            .iter()
            .filter(|e| filter.matches(&e.farm_name))
            .cloned()
            .partition(ScheduleEntry::is_upcoming);

        let upcoming_empty_message = upcoming
            .is_empty()
            .then(|| "No upcoming irrigation schedules".to_string());
        let history_empty_message = history
            .is_empty()
            .then(|| "No irrigation history to display".to_string());

        Self {
            filter,
            upcoming,
            history,
            upcoming_empty_message,
            history_empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, farm: &str, status: ScheduleStatus) -> ScheduleEntry {
        ScheduleEntry {
            id,
            farm_name: farm.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 19).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            duration_hours: Decimal::new(25, 1),
            amount_inches: Decimal::new(12, 1),
            status,
        }
    }

    #[test]
    fn test_display_labels() {
        let e = entry(1, "Main Field", ScheduleStatus::Scheduled);
        assert_eq!(e.date_label(), "May 19, 2025");
        assert_eq!(e.time_label(), "2:00 PM");
        assert_eq!(e.duration_label(), "2.5 hours");
        assert_eq!(e.amount_label(), "1.2 inches");
    }

    #[test]
    fn test_form_from_entry_strips_units() {
        let form = ScheduleForm::from(&entry(1, "Main Field", ScheduleStatus::Scheduled));
        assert_eq!(form.farm_name, "Main Field");
        assert_eq!(form.time, "14:00");
        assert_eq!(form.duration, "2.5");
        assert_eq!(form.amount, "1.2");
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2025, 5, 19));
    }

    #[test]
    fn test_board_partitions_by_status_and_farm() {
        let entries = vec![
            entry(1, "Main Field", ScheduleStatus::Scheduled),
            entry(2, "North Valley", ScheduleStatus::Scheduled),
            entry(3, "Main Field", ScheduleStatus::Completed),
        ];

        let all = ScheduleBoard::build(&entries, FarmFilter::All);
        assert_eq!(all.upcoming.len(), 2);
        assert_eq!(all.history.len(), 1);
        assert!(all.upcoming_empty_message.is_none());

        let north = ScheduleBoard::build(&entries, FarmFilter::Farm("North Valley".into()));
        assert_eq!(north.upcoming.len(), 1);
        assert!(north.history.is_empty());
        assert_eq!(
            north.history_empty_message.as_deref(),
            Some("No irrigation history to display")
        );
    }

    #[test]
    fn test_form_defaults() {
        let form: ScheduleForm = serde_json::from_str(r#"{"farm_name":"East Field"}"#).unwrap();
        assert_eq!(form.time, DEFAULT_FORM_TIME);
        assert!(form.duration.is_empty());
        assert!(form.date.is_none());
    }

    #[test]
    fn test_blank_date_deserializes_as_none() {
        let form: ScheduleForm =
            serde_json::from_str(r#"{"farm_name":"East Field","date":""}"#).unwrap();
        assert!(form.date.is_none());

        let form: ScheduleForm =
            serde_json::from_str(r#"{"farm_name":"East Field","date":"2025-06-01"}"#).unwrap();
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2025, 6, 1));

        assert!(serde_json::from_str::<ScheduleForm>(r#"{"date":"June 1st"}"#).is_err());
    }

    #[test]
    fn test_labels_keep_entered_scale() {
        let mut e = entry(1, "Main Field", ScheduleStatus::Scheduled);
        e.duration_hours = Decimal::ONE;
        e.amount_inches = Decimal::new(10, 1);
        assert_eq!(e.duration_label(), "1 hour");
        assert_eq!(e.amount_label(), "1.0 inches");
    }
}
