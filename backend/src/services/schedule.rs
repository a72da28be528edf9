//! Irrigation schedule store and service
//!
//! One store per server. Every mutation takes the write lock, so each
//! create/edit/delete completes before the next one starts.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{ScheduleBoard, ScheduleEntry, ScheduleForm, ScheduleStatus};
use shared::{validate_schedule_form, FarmFilter, ValidScheduleForm};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

pub type SharedScheduleStore = Arc<RwLock<ScheduleStore>>;

/// In-memory irrigation schedule records
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
    next_id: u32,
}

impl ScheduleStore {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { entries, next_id }
    }

    pub fn shared(entries: Vec<ScheduleEntry>) -> SharedScheduleStore {
        Arc::new(RwLock::new(Self::new(entries)))
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn board(&self, filter: FarmFilter) -> ScheduleBoard {
        ScheduleBoard::build(&self.entries, filter)
    }

    /// Form prefilled from an existing entry
    pub fn form_for(&self, id: u32) -> AppResult<ScheduleForm> {
        self.get(id)
            .map(ScheduleForm::from)
            .ok_or_else(|| AppError::NotFound("Schedule".to_string()))
    }

    /// Validate and append a new scheduled entry
    pub fn create(&mut self, form: &ScheduleForm, today: NaiveDate) -> AppResult<ScheduleEntry> {
        let valid = validate_schedule_form(form, today)?;

        let entry = ScheduleEntry {
            id: self.next_id,
            farm_name: valid.farm_name,
            date: valid.date,
            time: valid.time,
            duration_hours: valid.duration_hours,
            amount_inches: valid.amount_inches,
            status: ScheduleStatus::Scheduled,
        };
        self.next_id += 1;
        self.entries.push(entry.clone());

        Ok(entry)
    }

    /// Replace the editable fields of one entry, keeping its id and status
    pub fn update(&mut self, id: u32, form: &ScheduleForm, today: NaiveDate) -> AppResult<ScheduleEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Schedule".to_string()))?;

        let ValidScheduleForm {
            farm_name,
            date,
            time,
            duration_hours,
            amount_inches,
        } = validate_schedule_form(form, today)?;

        entry.farm_name = farm_name;
        entry.date = date;
        entry.time = time;
        entry.duration_hours = duration_hours;
        entry.amount_inches = amount_inches;

        Ok(entry.clone())
    }

    /// Remove one entry; refused unless `confirmed`
    pub fn delete(&mut self, id: u32, confirmed: bool) -> AppResult<ScheduleEntry> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Schedule".to_string()))?;

        if !confirmed {
            return Err(AppError::ConfirmationRequired(
                "Are you sure you want to delete this schedule?".to_string(),
            ));
        }

        Ok(self.entries.remove(position))
    }
}

/// Async facade over the shared schedule store
#[derive(Clone)]
pub struct ScheduleService {
    store: SharedScheduleStore,
}

impl ScheduleService {
    pub fn new(store: SharedScheduleStore) -> Self {
        Self { store }
    }

    pub async fn board(&self, filter: FarmFilter) -> ScheduleBoard {
        self.store.read().await.board(filter)
    }

    pub async fn get(&self, id: u32) -> AppResult<ScheduleEntry> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Schedule".to_string()))
    }

    pub async fn form_for(&self, id: u32) -> AppResult<ScheduleForm> {
        self.store.read().await.form_for(id)
    }

    pub async fn create(&self, form: ScheduleForm, today: NaiveDate) -> AppResult<ScheduleEntry> {
        let entry = self.store.write().await.create(&form, today)?;
        tracing::info!(id = entry.id, farm = %entry.farm_name, date = %entry.date, "Irrigation scheduled");
        Ok(entry)
    }

    pub async fn update(&self, id: u32, form: ScheduleForm, today: NaiveDate) -> AppResult<ScheduleEntry> {
        let entry = self.store.write().await.update(id, &form, today)?;
        tracing::info!(id, farm = %entry.farm_name, "Irrigation schedule updated");
        Ok(entry)
    }

    pub async fn delete(&self, id: u32, confirmed: bool) -> AppResult<ScheduleEntry> {
        let entry = self.store.write().await.delete(id, confirmed)?;
        tracing::info!(id, farm = %entry.farm_name, "Irrigation schedule deleted");
        Ok(entry)
    }
}
