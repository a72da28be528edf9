//! Farm registry and crop catalog search tests
//!
//! Covers:
//! - Filtering is idempotent for every query
//! - A category filter other than "All" only returns crops of that category
//! - Named search scenarios against the sample catalog

use proptest::prelude::*;
use shared::models::CropCategory;
use shared::{filter_crops, filter_farms, search_crops, search_farms, seed, CategoryFilter};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_valley_matches_only_north_valley() {
        let results = search_farms(&seed::farms(), "valley");
        let names: Vec<_> = results.items.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["North Valley"]);
        assert!(results.empty_message.is_none());
    }

    #[test]
    fn test_farm_search_matches_crop_names() {
        let results = search_farms(&seed::farms(), "SOYBEAN");
        let names: Vec<_> = results.items.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["North Valley", "Highland Farm"]);
    }

    #[test]
    fn test_farm_search_matches_location() {
        let results = search_farms(&seed::farms(), "southern");
        assert_eq!(results.items.len(), 1);
        assert_eq!(results.items[0].name, "South Grove");
    }

    #[test]
    fn test_legume_only_soybean() {
        let crops = filter_crops(&seed::crops(), "", CategoryFilter::Category(CropCategory::Legume));
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].name, "Soybean");
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(filter_farms(&seed::farms(), "").len(), seed::farms().len());
        assert_eq!(
            filter_crops(&seed::crops(), "", CategoryFilter::All).len(),
            seed::crops().len()
        );
    }

    #[test]
    fn test_no_match_message() {
        let results = search_crops(&seed::crops(), "quinoa", CategoryFilter::All);
        assert!(results.items.is_empty());
        assert_eq!(
            results.empty_message.as_deref(),
            Some("No crops found matching \"quinoa\"")
        );

        let results = search_farms(&seed::farms(), "quinoa");
        assert_eq!(
            results.empty_message.as_deref(),
            Some("No farms found matching \"quinoa\"")
        );
    }

    #[test]
    fn test_category_param_parsing() {
        assert_eq!(CategoryFilter::from_param(None), Ok(CategoryFilter::All));
        assert_eq!(CategoryFilter::from_param(Some("All")), Ok(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_param(Some("Fiber")),
            Ok(CategoryFilter::Category(CropCategory::Fiber))
        );
        assert!(CategoryFilter::from_param(Some("Fruit")).is_err());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn query_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z ]{0,6}",
            prop::sample::select(vec![
                "corn".to_string(),
                "Field".to_string(),
                "region".to_string(),
                "an".to_string(),
            ]),
        ]
    }

    fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            prop::sample::select(CropCategory::ALL.to_vec()).prop_map(CategoryFilter::Category),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Filtering the filtered farm list again changes nothing
        #[test]
        fn prop_farm_filter_idempotent(query in query_strategy()) {
            let once = filter_farms(&seed::farms(), &query);
            let twice = filter_farms(&once, &query);
            prop_assert_eq!(once, twice);
        }

        /// Filtering the filtered crop list again changes nothing
        #[test]
        fn prop_crop_filter_idempotent(query in query_strategy(), category in category_strategy()) {
            let once = filter_crops(&seed::crops(), &query, category);
            let twice = filter_crops(&once, &query, category);
            prop_assert_eq!(once, twice);
        }

        /// Every returned crop has the selected category and contains the query
        #[test]
        fn prop_category_filter_exact(
            query in query_strategy(),
            category in prop::sample::select(CropCategory::ALL.to_vec())
        ) {
            let crops = filter_crops(&seed::crops(), &query, CategoryFilter::Category(category));
            for crop in &crops {
                prop_assert_eq!(crop.category, category);
                prop_assert!(crop.name.to_lowercase().contains(&query.to_lowercase()));
            }
        }

        /// Filtering keeps catalog order and never invents records
        #[test]
        fn prop_farm_filter_is_subsequence(query in query_strategy()) {
            let all = seed::farms();
            let filtered = filter_farms(&all, &query);
            let mut remaining = all.iter();
            for farm in &filtered {
                prop_assert!(remaining.any(|f| f.id == farm.id));
            }
        }
    }
}
