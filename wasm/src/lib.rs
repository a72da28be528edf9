//! WebAssembly module for the AquaFarm irrigation planner
//!
//! Runs the same search, form validation, and chart shaping as the server so
//! the browser can filter and validate without a round trip.

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

use shared::models::{Crop, Farm, IrrigationAdvice, MoistureLevel, ScheduleForm, UsageSeries};
use shared::{category_options, validate_schedule_form, CategoryFilter, ChartType};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"aquafarm-wasm loaded".into());
}

/// Filter a farm list by name, location, or crop
///
/// Returns the serialized search results with the empty-state message.
#[wasm_bindgen]
pub fn search_farms(farms_json: &str, query: &str) -> Result<String, JsValue> {
    farm_search(farms_json, query).map_err(|e| JsValue::from_str(&e))
}

/// Filter a crop list by name and category ("All" for every category)
#[wasm_bindgen]
pub fn search_crops(crops_json: &str, query: &str, category: &str) -> Result<String, JsValue> {
    crop_search(crops_json, query, category).map_err(|e| JsValue::from_str(&e))
}

/// First validation error of a schedule form, if any
#[wasm_bindgen]
pub fn schedule_form_error(form_json: &str) -> Option<String> {
    let form: ScheduleForm = match serde_json::from_str(form_json) {
        Ok(form) => form,
        Err(e) => return Some(format!("Invalid form: {}", e)),
    };

    // The date only fills in the accepted value, never the error
    validate_schedule_form(&form, NaiveDate::default())
        .err()
        .map(|e| e.message)
}

/// Shape a usage series into chart tracks
#[wasm_bindgen]
pub fn render_usage_chart(series_json: &str, chart_type: &str) -> Result<String, JsValue> {
    usage_chart(series_json, chart_type).map_err(|e| JsValue::from_str(&e))
}

/// Irrigation advice line for a forecast precipitation chance
#[wasm_bindgen]
pub fn precipitation_advice(precipitation_percent: i32) -> String {
    IrrigationAdvice::from_precipitation(precipitation_percent)
        .message()
        .to_string()
}

/// "Low" or "Good" for a soil moisture percentage
#[wasm_bindgen]
pub fn moisture_level(moisture_percent: i32) -> String {
    MoistureLevel::from_percent(moisture_percent).to_string()
}

/// Crop category selector values, "All" first
#[wasm_bindgen]
pub fn crop_categories() -> js_sys::Array {
    category_options().into_iter().map(JsValue::from).collect()
}

fn farm_search(farms_json: &str, query: &str) -> Result<String, String> {
    let farms: Vec<Farm> =
        serde_json::from_str(farms_json).map_err(|e| format!("Invalid farms JSON: {}", e))?;
    let results = shared::search_farms(&farms, query);
    serde_json::to_string(&results).map_err(|e| e.to_string())
}

fn crop_search(crops_json: &str, query: &str, category: &str) -> Result<String, String> {
    let crops: Vec<Crop> =
        serde_json::from_str(crops_json).map_err(|e| format!("Invalid crops JSON: {}", e))?;
    let filter = CategoryFilter::from_param(Some(category))?;
    let results = shared::search_crops(&crops, query, filter);
    serde_json::to_string(&results).map_err(|e| e.to_string())
}

fn usage_chart(series_json: &str, chart_type: &str) -> Result<String, String> {
    let series: UsageSeries =
        serde_json::from_str(series_json).map_err(|e| format!("Invalid series JSON: {}", e))?;
    let chart_type: ChartType = chart_type.parse()?;
    serde_json::to_string(&series.render(chart_type)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use shared::seed;
    use shared::UsageGranularity;

    #[test]
    fn test_farm_search_round_trip() {
        let farms = serde_json::to_string(&seed::farms()).unwrap();
        let results: Value = serde_json::from_str(&farm_search(&farms, "valley").unwrap()).unwrap();

        assert_eq!(results["items"].as_array().unwrap().len(), 1);
        assert_eq!(results["items"][0]["name"], "North Valley");
    }

    #[test]
    fn test_crop_search_category() {
        let crops = serde_json::to_string(&seed::crops()).unwrap();
        let results: Value = serde_json::from_str(&crop_search(&crops, "o", "Vegetable").unwrap()).unwrap();

        let names: Vec<_> = results["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Tomato", "Potato"]);
        assert!(crop_search(&crops, "", "Fruit").is_err());
    }

    #[test]
    fn test_schedule_form_error() {
        assert_eq!(
            schedule_form_error(r#"{"farm_name":"Main Field"}"#).as_deref(),
            Some("Please fill in all required fields")
        );
        assert!(schedule_form_error(r#"{"farm_name":"Main Field","duration":"2","amount":"1"}"#).is_none());
        assert!(schedule_form_error("not json").is_some());
    }

    #[test]
    fn test_usage_chart_bar() {
        let series = serde_json::to_string(&seed::usage_series(UsageGranularity::Weekly)).unwrap();
        let chart: Value = serde_json::from_str(&usage_chart(&series, "bar").unwrap()).unwrap();

        assert_eq!(chart["chart_type"], "bar");
        assert_eq!(chart["labels"].as_array().unwrap().len(), 4);
        assert!(usage_chart(&series, "pie").is_err());
    }

    #[test]
    fn test_advice_and_moisture() {
        assert_eq!(precipitation_advice(80), "Consider adjusting your irrigation schedule.");
        assert_eq!(precipitation_advice(0), "No precipitation expected. Ensure adequate irrigation.");
        assert_eq!(moisture_level(42), "Low");
        assert_eq!(moisture_level(58), "Good");
    }
}
