//! Planner page: schedule board, generator form, and the farm handoff

use std::sync::Arc;

use serde::Serialize;
use shared::models::{IrrigationMethod, ScheduleBoard};
use shared::{FarmFilter, GenerateScheduleForm};

use crate::repository::Catalog;
use crate::services::schedule::SharedScheduleStore;

pub const SOIL_TYPES: [&str; 4] = ["Loam", "Clay", "Sandy", "Silt"];

const IRRIGATION_METHODS: [IrrigationMethod; 4] = [
    IrrigationMethod::Drip,
    IrrigationMethod::Sprinkler,
    IrrigationMethod::Furrow,
    IrrigationMethod::CenterPivot,
];

/// Selector values of the generator form
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorOptions {
    pub farms: Vec<String>,
    pub crops: Vec<String>,
    pub soil_types: Vec<String>,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannerView {
    /// Farm forwarded from a farm detail, if it names a known farm
    pub selected_farm: Option<String>,
    pub farm_options: Vec<String>,
    pub board: ScheduleBoard,
    pub generator_form: GenerateScheduleForm,
    pub generator_options: GeneratorOptions,
}

#[derive(Clone)]
pub struct PlannerService {
    catalog: Arc<dyn Catalog>,
    schedules: SharedScheduleStore,
}

impl PlannerService {
    pub fn new(catalog: Arc<dyn Catalog>, schedules: SharedScheduleStore) -> Self {
        Self { catalog, schedules }
    }

    /// Build the planner page, preselecting the handed-off farm
    pub async fn view(&self, farm: Option<&str>) -> PlannerView {
        let farm_options = self.catalog.farm_names();
        let selected_farm = farm
            .filter(|name| farm_options.iter().any(|f| f.as_str() == *name))
            .map(str::to_string);

        if let (Some(requested), None) = (farm, &selected_farm) {
            tracing::debug!(farm = requested, "Ignoring handoff for unknown farm");
        }

        let filter = FarmFilter::from_param(selected_farm.as_deref());
        let board = self.schedules.read().await.board(filter);

        let generator_form = GenerateScheduleForm {
            farm: selected_farm.clone().unwrap_or_default(),
            ..GenerateScheduleForm::default()
        };

        let generator_options = GeneratorOptions {
            farms: farm_options.clone(),
            crops: self.catalog.crops().iter().map(|c| c.name.clone()).collect(),
            soil_types: SOIL_TYPES.iter().map(|s| s.to_string()).collect(),
            methods: IRRIGATION_METHODS.iter().map(|m| m.to_string()).collect(),
        };

        PlannerView {
            selected_farm,
            farm_options,
            board,
            generator_form,
            generator_options,
        }
    }
}
