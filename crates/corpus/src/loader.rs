use campusqa_common::{AppConfig, CampusQaError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

use crate::records::{AcademicScheduleRow, FacultyRow, PlacementData, Record};

/// The three upstream documents, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct SourceDocuments {
    pub academic: Vec<AcademicScheduleRow>,
    pub placement: PlacementData,
    pub faculty: Vec<FacultyRow>,
}

impl SourceDocuments {
    /// Load the three JSON documents from the configured data directory.
    ///
    /// A missing or unparseable file is a startup error; dirty rows inside
    /// a file are handled later, at normalization.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let academic: Vec<AcademicScheduleRow> = read_json(&config.academic_schedule_path())?;
        let placement: PlacementData = read_json(&config.placement_data_path())?;
        let faculty: Vec<FacultyRow> = read_json(&config.faculty_directory_path())?;

        info!(
            "Source documents loaded: {} academic rows, {} companies, {} faculty rows",
            academic.len(),
            placement.companies.len(),
            faculty.len()
        );

        Ok(Self {
            academic,
            placement,
            faculty,
        })
    }

    /// Normalize all rows into records, silently dropping rows that are
    /// missing a required field.
    pub fn records(&self) -> Vec<Record> {
        let mut records = Vec::new();

        for row in &self.academic {
            match row.normalized() {
                Some(record) => records.push(record),
                None => debug!("Skipping academic row with missing field: {:?}", row),
            }
        }
        for row in &self.placement.companies {
            match row.normalized() {
                Some(record) => records.push(record),
                None => debug!("Skipping company row with missing field: {:?}", row),
            }
        }
        for row in &self.faculty {
            match row.normalized() {
                Some(record) => records.push(record),
                None => debug!("Skipping faculty row with missing field: {:?}", row),
            }
        }

        records
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        CampusQaError::corpus(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&data).map_err(|e| {
        CampusQaError::corpus(format!("Failed to parse {}: {}", path.display(), e))
    })
}
