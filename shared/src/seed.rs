//! Literal sample data backing every page
//!
//! Each call builds a fresh copy; callers own what they get back.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::*;
use crate::types::{GpsCoordinates, UsageGranularity};

fn coords(lat: i64, lon: i64) -> GpsCoordinates {
    // Thousandths of a degree
    GpsCoordinates::new(Decimal::new(lat, 3), Decimal::new(lon, 3))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Farms
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn farm(
    id: u32,
    name: &str,
    area_acres: i64,
    crops: &[&str],
    location: &str,
    moisture_percent: i32,
    last_irrigation: &str,
    status: FarmStatus,
    soil_type: &str,
    irrigation_method: IrrigationMethod,
    coordinates: GpsCoordinates,
) -> Farm {
    Farm {
        id,
        name: name.to_string(),
        area_acres: Decimal::from(area_acres),
        crops: strings(crops),
        location: location.to_string(),
        moisture_percent,
        last_irrigation: last_irrigation.to_string(),
        status,
        image_url: None,
        soil_type: soil_type.to_string(),
        irrigation_method,
        coordinates,
    }
}

pub fn farms() -> Vec<Farm> {
    vec![
        farm(1, "Main Field", 126, &["Corn", "Wheat"], "Midwest Region", 58, "2 days ago",
            FarmStatus::Optimal, "Loam", IrrigationMethod::CenterPivot, coords(41878, -93097)),
        farm(2, "North Valley", 84, &["Soybean"], "North Region", 42, "4 days ago",
            FarmStatus::Low, "Silt", IrrigationMethod::Sprinkler, coords(44763, -93661)),
        farm(3, "East Field", 95, &["Alfalfa", "Wheat"], "East Region", 60, "1 day ago",
            FarmStatus::Optimal, "Clay", IrrigationMethod::Furrow, coords(40712, -74005)),
        farm(4, "Western Plot", 110, &["Tomato", "Potato"], "Western Region", 47, "3 days ago",
            FarmStatus::Low, "Sandy", IrrigationMethod::Drip, coords(37774, -122419)),
        farm(5, "South Grove", 72, &["Cotton"], "Southern Region", 55, "1 day ago",
            FarmStatus::Optimal, "Sandy loam", IrrigationMethod::Drip, coords(29760, -95369)),
        farm(6, "Highland Farm", 140, &["Corn", "Soybean"], "Highland Region", 63, "2 days ago",
            FarmStatus::Optimal, "Loam", IrrigationMethod::Sprinkler, coords(39739, -104990)),
    ]
}

// ============================================================================
// Crops
// ============================================================================

struct CropSeed {
    id: u32,
    name: &'static str,
    scientific_name: &'static str,
    category: CropCategory,
    water_requirement: WaterRequirement,
    growing_season: &'static str,
    soil_type: &'static str,
    days_to_maturity: &'static str,
    watering_frequency: &'static str,
    watering_amount: &'static str,
    description: &'static str,
    best_practices: &'static [&'static str],
}

impl From<&CropSeed> for Crop {
    fn from(s: &CropSeed) -> Self {
        Crop {
            id: s.id,
            name: s.name.to_string(),
            scientific_name: s.scientific_name.to_string(),
            category: s.category,
            water_requirement: s.water_requirement,
            growing_season: s.growing_season.to_string(),
            soil_type: s.soil_type.to_string(),
            days_to_maturity: s.days_to_maturity.to_string(),
            watering_frequency: s.watering_frequency.to_string(),
            watering_amount: s.watering_amount.to_string(),
            description: s.description.to_string(),
            best_practices: strings(s.best_practices),
            image_url: None,
        }
    }
}

const CROPS: &[CropSeed] = &[
    CropSeed {
        id: 1,
        name: "Corn",
        scientific_name: "Zea mays",
        category: CropCategory::Cereal,
        water_requirement: WaterRequirement::High,
        growing_season: "Spring-Summer",
        soil_type: "Well-drained, fertile",
        days_to_maturity: "90-120 days",
        watering_frequency: "Regular",
        watering_amount: "1-2 inches per week",
        description: "Warm-season grain whose water demand peaks from tasseling through silking.",
        best_practices: &[
            "Keep soil moisture above 50% during tasseling and silking",
            "Irrigate early in the morning to reduce evaporation",
            "Monitor for water stress as leaves begin to roll",
        ],
    },
    CropSeed {
        id: 2,
        name: "Wheat",
        scientific_name: "Triticum aestivum",
        category: CropCategory::Cereal,
        water_requirement: WaterRequirement::Moderate,
        growing_season: "Fall-Spring (Winter) / Spring-Summer (Spring)",
        soil_type: "Loam to heavy clay",
        days_to_maturity: "110-130 days",
        watering_frequency: "Moderate",
        watering_amount: "0.8-1.5 inches per week",
        description: "Cool-season cereal most sensitive to drought at jointing and heading.",
        best_practices: &[
            "Prioritize irrigation at jointing, heading, and grain fill",
            "Avoid late-season watering that delays harvest",
        ],
    },
    CropSeed {
        id: 3,
        name: "Soybean",
        scientific_name: "Glycine max",
        category: CropCategory::Legume,
        water_requirement: WaterRequirement::Moderate,
        growing_season: "Late Spring-Fall",
        soil_type: "Well-drained fertile loam",
        days_to_maturity: "90-150 days",
        watering_frequency: "Moderate",
        watering_amount: "1-1.5 inches per week",
        description: "Nitrogen-fixing legume that needs the most water during pod fill.",
        best_practices: &[
            "Increase irrigation from flowering through pod fill",
            "Avoid waterlogging, which limits nodulation",
        ],
    },
    CropSeed {
        id: 4,
        name: "Alfalfa",
        scientific_name: "Medicago sativa",
        category: CropCategory::Forage,
        water_requirement: WaterRequirement::High,
        growing_season: "Spring-Fall (perennial)",
        soil_type: "Well-drained, pH 6.8-7.5",
        days_to_maturity: "70-90 days to first cutting",
        watering_frequency: "Regular",
        watering_amount: "1.5-2 inches per week",
        description: "Deep-rooted perennial forage harvested in several cuttings per season.",
        best_practices: &[
            "Irrigate soon after each cutting to support regrowth",
            "Stop irrigating a few days before cutting so the field can dry",
        ],
    },
    CropSeed {
        id: 5,
        name: "Rice",
        scientific_name: "Oryza sativa",
        category: CropCategory::Cereal,
        water_requirement: WaterRequirement::VeryHigh,
        growing_season: "Spring-Fall",
        soil_type: "Clay or clay loam that holds standing water",
        days_to_maturity: "105-150 days",
        watering_frequency: "Continuous flooding or alternate wetting and drying",
        watering_amount: "2-4 inches of standing water",
        description: "Semi-aquatic cereal usually grown in flooded paddies.",
        best_practices: &[
            "Level fields so standing water is even",
            "Use alternate wetting and drying to save water where yields allow",
        ],
    },
    CropSeed {
        id: 6,
        name: "Cotton",
        scientific_name: "Gossypium hirsutum",
        category: CropCategory::Fiber,
        water_requirement: WaterRequirement::Moderate,
        growing_season: "Spring-Fall",
        soil_type: "Deep, well-drained loam",
        days_to_maturity: "150-180 days",
        watering_frequency: "Moderate",
        watering_amount: "1-1.5 inches per week",
        description: "Heat-loving fiber crop with peak demand from first bloom to boll set.",
        best_practices: &[
            "Keep moisture steady during flowering to prevent boll shedding",
            "Taper irrigation as bolls open",
        ],
    },
    CropSeed {
        id: 7,
        name: "Sugar Cane",
        scientific_name: "Saccharum officinarum",
        category: CropCategory::Sugar,
        water_requirement: WaterRequirement::High,
        growing_season: "Year-round (tropical)",
        soil_type: "Deep, fertile loam",
        days_to_maturity: "10-24 months",
        watering_frequency: "Regular",
        watering_amount: "1.5-2.5 inches per week",
        description: "Tall tropical grass grown for its sucrose-rich stalks.",
        best_practices: &[
            "Water heavily during the grand growth phase",
            "Withhold irrigation before harvest to raise sugar content",
        ],
    },
    CropSeed {
        id: 8,
        name: "Tomato",
        scientific_name: "Solanum lycopersicum",
        category: CropCategory::Vegetable,
        water_requirement: WaterRequirement::Moderate,
        growing_season: "Spring-Summer",
        soil_type: "Well-drained, rich in organic matter",
        days_to_maturity: "60-100 days",
        watering_frequency: "Consistent",
        watering_amount: "1-1.5 inches per week",
        description: "Fruiting vegetable prone to cracking and blossom-end rot under uneven watering.",
        best_practices: &[
            "Water at the base of the plant with drip lines",
            "Mulch to keep soil moisture even",
        ],
    },
    CropSeed {
        id: 9,
        name: "Potato",
        scientific_name: "Solanum tuberosum",
        category: CropCategory::Vegetable,
        water_requirement: WaterRequirement::ModerateToHigh,
        growing_season: "Spring-Fall",
        soil_type: "Loose, well-drained sandy loam",
        days_to_maturity: "70-120 days",
        watering_frequency: "Regular",
        watering_amount: "1-2 inches per week",
        description: "Tuber crop whose yield and quality depend on steady moisture during bulking.",
        best_practices: &[
            "Keep moisture steady from tuber initiation through bulking",
            "Reduce watering as vines die back",
        ],
    },
];

pub fn crops() -> Vec<Crop> {
    CROPS.iter().map(Crop::from).collect()
}

// ============================================================================
// Irrigation Schedules
// ============================================================================

fn schedule(
    id: u32,
    farm_name: &str,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    duration_tenths: i64,
    amount_tenths: i64,
    status: ScheduleStatus,
) -> ScheduleEntry {
    ScheduleEntry {
        id,
        farm_name: farm_name.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
        time: NaiveTime::from_hms_opt(hour, minute, 0).expect("valid seed time"),
        duration_hours: Decimal::new(duration_tenths, 1).normalize(),
        amount_inches: Decimal::new(amount_tenths, 1),
        status,
    }
}

pub fn schedules() -> Vec<ScheduleEntry> {
    vec![
        schedule(1, "Main Field", (2025, 5, 19), (8, 0), 30, 12, ScheduleStatus::Scheduled),
        schedule(2, "North Valley", (2025, 5, 19), (14, 0), 40, 15, ScheduleStatus::Scheduled),
        schedule(3, "East Field", (2025, 5, 21), (6, 0), 25, 10, ScheduleStatus::Scheduled),
        schedule(4, "Main Field", (2025, 5, 16), (7, 30), 30, 12, ScheduleStatus::Completed),
    ]
}

// ============================================================================
// Weather
// ============================================================================

fn hourly(hour: u32, temperature_f: i32, condition: WeatherCondition, precipitation_percent: i32) -> HourlyForecast {
    HourlyForecast {
        time: NaiveTime::from_hms_opt(hour, 0, 0).expect("valid seed hour"),
        temperature_f,
        condition,
        precipitation_percent,
    }
}

fn daily(temperature_f: i32, condition: WeatherCondition, precipitation_percent: i32) -> DailyForecast {
    DailyForecast {
        temperature_f,
        condition,
        precipitation_percent,
    }
}

fn location(name: &str, coordinates: GpsCoordinates, farm_name: &str) -> WeatherLocation {
    WeatherLocation {
        name: name.to_string(),
        coordinates,
        farm_name: farm_name.to_string(),
    }
}

pub fn weather() -> WeatherSnapshot {
    use WeatherCondition::*;

    WeatherSnapshot {
        current: CurrentConditions {
            observed_at: Utc
                .with_ymd_and_hms(2025, 5, 18, 10, 0, 0)
                .single()
                .expect("valid observation time"),
            temperature_f: 72,
            feels_like_f: 74,
            condition: PartlyCloudy,
            humidity_percent: 65,
            wind_speed_mph: 8,
            precipitation_percent: 0,
            uv_index: 5,
            pressure_mb: 1012,
            visibility_mi: 10,
        },
        forecast: vec![
            daily(72, PartlyCloudy, 10),
            daily(68, Rain, 60),
            daily(65, Rain, 80),
            daily(70, Sunny, 0),
            daily(75, Sunny, 0),
        ],
        hourly: vec![
            hourly(10, 72, PartlyCloudy, 10),
            hourly(11, 73, PartlyCloudy, 5),
            hourly(12, 75, Sunny, 0),
            hourly(13, 76, Sunny, 0),
            hourly(14, 77, Sunny, 0),
            hourly(15, 77, PartlyCloudy, 5),
            hourly(16, 76, PartlyCloudy, 10),
            hourly(17, 74, PartlyCloudy, 15),
        ],
        locations: vec![
            location("Midwest Region", coords(41878, -93097), "Main Field"),
            location("North Region", coords(44763, -93661), "North Valley"),
            location("East Region", coords(40712, -74005), "East Field"),
            location("Western Region", coords(37774, -122419), "Western Plot"),
            location("Southern Region", coords(29760, -95369), "South Grove"),
        ],
    }
}

// ============================================================================
// Water Usage
// ============================================================================

fn points(rows: &[(&str, u32, u32)]) -> Vec<UsagePoint> {
    rows.iter()
        .map(|(period, actual, recommended)| UsagePoint {
            period: period.to_string(),
            actual_gallons: *actual,
            recommended_gallons: *recommended,
        })
        .collect()
}

pub fn usage_series(granularity: UsageGranularity) -> UsageSeries {
    let points = match granularity {
        UsageGranularity::Daily => points(&[
            ("Mon", 1200, 1100),
            ("Tue", 1400, 1300),
            ("Wed", 1000, 1200),
            ("Thu", 1500, 1400),
            ("Fri", 1300, 1200),
            ("Sat", 900, 1000),
            ("Sun", 800, 900),
        ]),
        UsageGranularity::Weekly => points(&[
            ("Week 1", 8100, 8000),
            ("Week 2", 7900, 8000),
            ("Week 3", 8300, 8000),
            ("Week 4", 7800, 8000),
        ]),
        UsageGranularity::Monthly => points(&[
            ("Jan", 32000, 31000),
            ("Feb", 28000, 28000),
            ("Mar", 31000, 30000),
            ("Apr", 33000, 32000),
            ("May", 35000, 34000),
            ("Jun", 37000, 36000),
        ]),
    };

    UsageSeries {
        granularity,
        points,
    }
}

// ============================================================================
// Dashboard
// ============================================================================

fn card(title: &str, value: &str, description: &str, footer: &str, accent: CardAccent) -> DashboardCard {
    DashboardCard {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        footer: Some(footer.to_string()),
        accent,
    }
}

pub fn dashboard_cards() -> Vec<DashboardCard> {
    vec![
        card("Current Water Usage", "1,240 gal", "Today's consumption",
            "3% less than yesterday", CardAccent::Blue),
        card("Soil Moisture", "62%", "Average across all fields",
            "Optimal range: 55-65%", CardAccent::Green),
        card("Next Irrigation", "Tomorrow", "8:00 AM - All Fields",
            "Based on weather forecast and soil data", CardAccent::Brown),
        card("Active Crops", "4", "Corn, Wheat, Soy, Alfalfa",
            "All crops growing as expected", CardAccent::Leaf),
    ]
}
