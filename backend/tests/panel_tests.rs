//! Weather and usage panel tests
//!
//! Covers:
//! - Toggling chart type or granularity never mutates the stored series
//! - Toggling the weather view never mutates the snapshot
//! - Irrigation advice thresholds on forecast precipitation

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::models::{IrrigationAdvice, WeatherView};
use shared::{seed, ChartType, ForecastGranularity, UsageGranularity};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 18).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_advice_thresholds() {
        assert_eq!(IrrigationAdvice::from_precipitation(60), IrrigationAdvice::AdjustSchedule);
        assert_eq!(IrrigationAdvice::from_precipitation(21), IrrigationAdvice::AdjustSchedule);
        assert_eq!(IrrigationAdvice::from_precipitation(20), IrrigationAdvice::Monitor);
        assert_eq!(IrrigationAdvice::from_precipitation(10), IrrigationAdvice::Monitor);
        assert_eq!(IrrigationAdvice::from_precipitation(0), IrrigationAdvice::EnsureIrrigation);
    }

    #[test]
    fn test_daily_advice_messages() {
        let panel = seed::weather()
            .render("Midwest Region", WeatherView::default(), today())
            .unwrap();

        let messages: Vec<_> = panel
            .entries
            .iter()
            .map(|e| e.advice_message.as_deref().unwrap())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Light chance of precipitation. Monitor conditions.",
                "Consider adjusting your irrigation schedule.",
                "Consider adjusting your irrigation schedule.",
                "No precipitation expected. Ensure adequate irrigation.",
                "No precipitation expected. Ensure adequate irrigation.",
            ]
        );
    }

    #[test]
    fn test_chart_toggle_round_trip() {
        assert_eq!(ChartType::Area.toggled(), ChartType::Bar);
        assert_eq!(ChartType::Area.toggled().toggled(), ChartType::Area);
    }

    #[test]
    fn test_usage_tracks_follow_points() {
        let series = seed::usage_series(UsageGranularity::Daily);
        let chart = series.render(ChartType::Area);

        assert_eq!(chart.labels.first().map(String::as_str), Some("Mon"));
        assert_eq!(chart.tracks[0].name, "Actual Usage");
        assert_eq!(chart.tracks[0].color, "#2196F3");
        assert_eq!(chart.tracks[1].name, "Recommended Usage");
        assert_eq!(chart.tracks[0].values.len(), series.points.len());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn granularity_strategy() -> impl Strategy<Value = UsageGranularity> {
        prop::sample::select(UsageGranularity::ALL.to_vec())
    }

    fn chart_strategy() -> impl Strategy<Value = ChartType> {
        prop_oneof![Just(ChartType::Area), Just(ChartType::Bar)]
    }

    fn view_strategy() -> impl Strategy<Value = WeatherView> {
        (any::<bool>(), any::<bool>()).prop_map(|(hourly, expanded)| WeatherView {
            granularity: if hourly {
                ForecastGranularity::Hourly
            } else {
                ForecastGranularity::Daily
            },
            expanded,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any sequence of chart toggles leaves every series untouched
        #[test]
        fn prop_usage_toggles_do_not_mutate(
            toggles in prop::collection::vec((granularity_strategy(), chart_strategy()), 1..20)
        ) {
            let series: Vec<_> = UsageGranularity::ALL.into_iter().map(seed::usage_series).collect();
            let before = series.clone();

            for (granularity, chart_type) in toggles {
                let chosen = series.iter().find(|s| s.granularity == granularity).unwrap();
                let chart = chosen.render(chart_type);
                prop_assert_eq!(chart.chart_type, chart_type);
                prop_assert_eq!(chart.labels.len(), chosen.points.len());
            }

            prop_assert_eq!(series, before);
        }

        /// Rendering any view leaves the weather snapshot untouched
        #[test]
        fn prop_weather_toggles_do_not_mutate(views in prop::collection::vec(view_strategy(), 1..10)) {
            let snapshot = seed::weather();
            let before = snapshot.clone();

            for view in views {
                let panel = snapshot.render("East Region", view, today()).unwrap();
                prop_assert_eq!(panel.details.is_some(), view.expanded);
                let expected = match view.granularity {
                    ForecastGranularity::Daily => snapshot.forecast.len(),
                    ForecastGranularity::Hourly => snapshot.hourly.len(),
                };
                prop_assert_eq!(panel.entries.len(), expected);
            }

            prop_assert_eq!(snapshot, before);
        }
    }
}
