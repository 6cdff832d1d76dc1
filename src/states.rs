//! Sensor state snapshot: fetch, decode, lookup.
//!
//! One authenticated `GET {base_url}/api/states` returns a flat JSON list
//! of entity states. The list is decoded once into a [`StateSnapshot`] and
//! held read-only for the remainder of the render pass. There is no
//! pagination, no streaming, no retry: a transport failure aborts the run.
//!
//! Records carry many host-defined fields (`attributes`, `last_changed`,
//! ...); only `entity_id` and `state` matter here and serde ignores the
//! rest.

use serde::Deserialize;
use tracing::info;

use crate::config::DashboardConfig;
use crate::error::DashboardError;

/// One sensor state as reported by Home Assistant.
///
/// `entity_id` is the stable identity key; `state` is the current value,
/// always transported as a string (numeric sensors included).
#[derive(Debug, Clone, Deserialize)]
pub struct SensorRecord {
    /// Stable identifier, e.g. `sensor.givtcp_load_power`.
    pub entity_id: String,
    /// Current reported value, as a string.
    pub state: String,
}

/// Immutable snapshot of all sensor states, fetched once per render pass.
#[derive(Debug)]
pub struct StateSnapshot {
    records: Vec<SensorRecord>,
}

impl StateSnapshot {
    /// Wrap an already-decoded record list.
    pub fn from_records(records: Vec<SensorRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve an entity id to its raw state string.
    ///
    /// Absence is a fatal lookup failure; there is no item-level fallback.
    /// The snapshot holds a few hundred records at most and each render
    /// pass performs a couple dozen lookups, so a linear scan is fine.
    pub fn state(&self, entity_id: &str) -> Result<&str, DashboardError> {
        self.records
            .iter()
            .find(|record| record.entity_id == entity_id)
            .map(|record| record.state.as_str())
            .ok_or_else(|| DashboardError::Lookup {
                entity_id: entity_id.to_owned(),
            })
    }

    /// Resolve an entity id and parse its state as a float.
    ///
    /// A missing entity is fatal. A present but non-numeric state parses to
    /// NaN, which flows through threshold comparisons and matches none of
    /// them.
    pub fn numeric(&self, entity_id: &str) -> Result<f32, DashboardError> {
        let raw = self.state(entity_id)?;
        Ok(raw.trim().parse::<f32>().unwrap_or(f32::NAN))
    }
}

/// Decode a states response body into a snapshot.
///
/// Split from the transport so the decode path is testable without a
/// server.
pub fn decode_states(body: &str) -> Result<StateSnapshot, DashboardError> {
    let records: Vec<SensorRecord> = serde_json::from_str(body)?;
    Ok(StateSnapshot::from_records(records))
}

/// Fetch the full sensor state list from Home Assistant.
///
/// One blocking request, no timeout policy beyond the transport default,
/// no retry. Failure aborts the whole render.
pub fn fetch_states(config: &DashboardConfig) -> Result<StateSnapshot, DashboardError> {
    let url = format!("{}/api/states", config.base_url);
    let bearer = format!("Bearer {}", config.access_token);

    let response = ureq::get(&url)
        .set("Authorization", &bearer)
        .set("content-type", "application/json")
        .call()
        .map_err(Box::new)?;

    let body = response.into_string()?;
    let snapshot = decode_states(&body)?;
    info!(records = snapshot.len(), "fetched sensor states");
    Ok(snapshot)
}

// =============================================================================
// Unit Tests
// =============================================================================
