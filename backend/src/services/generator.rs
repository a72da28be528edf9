//! AI irrigation schedule generator
//!
//! Only one generation runs at a time. The in-flight flag is released when
//! the request settles, successful or not.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{validate_generator_form, GenerateScheduleForm};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::TextGenerationClient;

/// Generated schedule text returned to the planner
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSchedule {
    pub request_id: Uuid,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

pub struct ScheduleGenerator {
    client: TextGenerationClient,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Natural-language prompt embedding all six generator inputs
pub fn build_prompt(form: &GenerateScheduleForm) -> String {
    format!(
        "Create a detailed irrigation schedule for the farm \"{farm}\" growing {crop}.\n\
         Soil type: {soil}\n\
         Current soil moisture: {moisture}%\n\
         Irrigation method: {method}\n\
         Irrigation system efficiency: {efficiency}%\n\
         Recommend watering days, start times, durations, and water amounts for the next 7 days, \
         and explain how to adjust the schedule for rainfall.",
        farm = form.farm.trim(),
        crop = form.crop.trim(),
        soil = form.soil_type.trim(),
        moisture = form.moisture.trim(),
        method = form.method.trim(),
        efficiency = form.efficiency.trim(),
    )
}

impl ScheduleGenerator {
    pub fn new(client: TextGenerationClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate the form and request one schedule from the text-generation endpoint
    pub async fn generate(&self, form: &GenerateScheduleForm) -> AppResult<GeneratedSchedule> {
        validate_generator_form(form)?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::GenerationInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, farm = %form.farm, crop = %form.crop, "Generating irrigation schedule");

        let prompt = build_prompt(form);
        match self.client.generate(&prompt).await {
            Ok(text) => {
                tracing::info!(%request_id, chars = text.len(), "Irrigation schedule generated");
                Ok(GeneratedSchedule {
                    request_id,
                    text,
                    generated_at: Utc::now(),
                })
            }
            Err(e) => {
                tracing::warn!(%request_id, error = %e, "Irrigation schedule generation failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    fn form() -> GenerateScheduleForm {
        GenerateScheduleForm {
            farm: "Main Field".to_string(),
            crop: "Corn".to_string(),
            soil_type: "Loam".to_string(),
            moisture: "55".to_string(),
            method: "Drip Irrigation".to_string(),
            efficiency: "85".to_string(),
        }
    }

    fn generator(api_key: &str) -> ScheduleGenerator {
        let config = GenerationConfig {
            endpoint: "http://127.0.0.1:9/unused".to_string(),
            api_key: api_key.to_string(),
            ..GenerationConfig::default()
        };
        ScheduleGenerator::new(TextGenerationClient::new(&config).unwrap())
    }

    #[test]
    fn test_prompt_embeds_all_inputs() {
        let prompt = build_prompt(&form());
        for value in ["Main Field", "Corn", "Loam", "55%", "Drip Irrigation", "85%"] {
            assert!(prompt.contains(value), "prompt missing {}", value);
        }
    }

    #[tokio::test]
    async fn test_blank_field_rejected_before_request() {
        let mut incomplete = form();
        incomplete.efficiency = " ".to_string();

        let err = generator("key").generate(&incomplete).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "efficiency"));
    }

    #[tokio::test]
    async fn test_flag_cleared_after_failure() {
        let generator = generator("");
        let err = generator.generate(&form()).await.unwrap_err();

        assert!(matches!(err, AppError::Configuration(_)));
        assert!(!generator.is_generating());
    }
}
