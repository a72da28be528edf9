//! Weather data models and the forecast panel renderer

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ForecastGranularity, GpsCoordinates};

/// Static weather sample: current conditions plus daily and hourly forecasts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub hourly: Vec<HourlyForecast>,
    pub locations: Vec<WeatherLocation>,
}

/// Current conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub observed_at: DateTime<Utc>,
    pub temperature_f: i32,
    pub feels_like_f: i32,
    pub condition: WeatherCondition,
    pub humidity_percent: i32,
    pub wind_speed_mph: i32,
    /// Chance of precipitation
    pub precipitation_percent: i32,
    pub uv_index: i32,
    pub pressure_mb: i32,
    pub visibility_mi: i32,
}

/// One day of the forecast; the first entry is today
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub temperature_f: i32,
    pub condition: WeatherCondition,
    pub precipitation_percent: i32,
}

/// One hour of the forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyForecast {
    pub time: NaiveTime,
    pub temperature_f: i32,
    pub condition: WeatherCondition,
    pub precipitation_percent: i32,
}

/// A selectable forecast location; no geocoding happens behind it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherLocation {
    pub name: String,
    pub coordinates: GpsCoordinates,
    pub farm_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    Drizzle,
    Snow,
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Sunny => write!(f, "sunny"),
            WeatherCondition::PartlyCloudy => write!(f, "partly cloudy"),
            WeatherCondition::Cloudy => write!(f, "cloudy"),
            WeatherCondition::Rain => write!(f, "rain"),
            WeatherCondition::Drizzle => write!(f, "drizzle"),
            WeatherCondition::Snow => write!(f, "snow"),
        }
    }
}

/// Irrigation hint attached to a daily forecast entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationAdvice {
    AdjustSchedule,
    EnsureIrrigation,
    Monitor,
}

impl IrrigationAdvice {
    pub fn from_precipitation(percent: i32) -> Self {
        if percent > 20 {
            IrrigationAdvice::AdjustSchedule
        } else if percent == 0 {
            IrrigationAdvice::EnsureIrrigation
        } else {
            IrrigationAdvice::Monitor
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            IrrigationAdvice::AdjustSchedule => "Consider adjusting your irrigation schedule.",
            IrrigationAdvice::EnsureIrrigation => {
                "No precipitation expected. Ensure adequate irrigation."
            }
            IrrigationAdvice::Monitor => "Light chance of precipitation. Monitor conditions.",
        }
    }
}

/// View state of the weather panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WeatherView {
    pub granularity: ForecastGranularity,
    pub expanded: bool,
}

/// Rendered weather panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherPanel {
    pub location: String,
    /// e.g. "Saturday, October 17, 2026"
    pub date_label: String,
    pub temperature_f: i32,
    pub feels_like_f: i32,
    pub condition: WeatherCondition,
    pub humidity_percent: i32,
    /// Present only when the panel is expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CurrentDetails>,
    pub granularity: ForecastGranularity,
    pub entries: Vec<ForecastEntry>,
}

/// Supplemental details of the expanded panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrentDetails {
    pub wind_speed_mph: i32,
    pub humidity_percent: i32,
    pub uv_index: i32,
    pub precipitation_percent: i32,
}

/// A single daily or hourly cell
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastEntry {
    pub label: String,
    /// Long heading, e.g. "Monday" / "Today, 10:00 AM"
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    pub temperature_f: i32,
    pub condition: WeatherCondition,
    pub precipitation_percent: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<IrrigationAdvice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice_message: Option<String>,
}

impl WeatherSnapshot {
    pub fn location(&self, name: &str) -> Option<&WeatherLocation> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Render the panel for a location and view state
    ///
    /// Returns `None` when the location is not one of the selectable ones.
    /// The snapshot is borrowed immutably; toggling the view never touches data.
    pub fn render(&self, location: &str, view: WeatherView, today: NaiveDate) -> Option<WeatherPanel> {
        let location = self.location(location)?;

        let details = view.expanded.then(|| CurrentDetails {
            wind_speed_mph: self.current.wind_speed_mph,
            humidity_percent: self.current.humidity_percent,
            uv_index: self.current.uv_index,
            precipitation_percent: self.current.precipitation_percent,
        });

        let entries = match view.granularity {
            ForecastGranularity::Daily => self.daily_entries(today),
            ForecastGranularity::Hourly => self.hourly_entries(),
        };

        Some(WeatherPanel {
            location: location.name.clone(),
            date_label: today.format("%A, %B %-d, %Y").to_string(),
            temperature_f: self.current.temperature_f,
            feels_like_f: self.current.feels_like_f,
            condition: self.current.condition,
            humidity_percent: self.current.humidity_percent,
            details,
            granularity: view.granularity,
            entries,
        })
    }

    fn daily_entries(&self, today: NaiveDate) -> Vec<ForecastEntry> {
        self.forecast
            .iter()
            .enumerate()
            .map(|(index, day)| {
                let date = today
                    .checked_add_days(Days::new(index as u64))
                    .unwrap_or(today);
                let (label, heading) = if index == 0 {
                    ("Today".to_string(), "Today".to_string())
                } else {
                    (date.format("%a").to_string(), date.format("%A").to_string())
                };
                let advice = IrrigationAdvice::from_precipitation(day.precipitation_percent);

                ForecastEntry {
                    label,
                    heading,
                    date_label: Some(date.format("%B %-d, %Y").to_string()),
                    temperature_f: day.temperature_f,
                    condition: day.condition,
                    precipitation_percent: day.precipitation_percent,
                    advice: Some(advice),
                    advice_message: Some(advice.message().to_string()),
                }
            })
            .collect()
    }

    fn hourly_entries(&self) -> Vec<ForecastEntry> {
        self.hourly
            .iter()
            .map(|hour| {
                let label = hour.time.format("%-I %p").to_string();
                ForecastEntry {
                    heading: format!("Today, {}", hour.time.format("%-I:%M %p")),
                    label,
                    date_label: None,
                    temperature_f: hour.temperature_f,
                    condition: hour.condition,
                    precipitation_percent: hour.precipitation_percent,
                    advice: None,
                    advice_message: None,
                }
            })
            .collect()
    }
}
