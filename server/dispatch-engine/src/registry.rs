//! Incident registry: in-memory store of active incidents keyed by call id.
//!
//! Owned by a coordinator instance, never global. Entries are kept for the
//! life of the process; there is no eviction.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};

use crate::types::{
  ActiveIncident, EmergencyIncident, IncidentAssessment, ResourceAllocation, STATUS_DISPATCHED,
};

#[derive(Debug, Default)]
pub struct IncidentRegistry {
  entries: HashMap<String, ActiveIncident>,
}

impl IncidentRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or overwrite the entry for the incident's call id with status
  /// DISPATCHED and a fresh timestamp. Last write wins; re-processing a
  /// call id silently replaces the previous entry.
  pub fn record(
    &mut self,
    incident: EmergencyIncident,
    assessment: IncidentAssessment,
    allocation: ResourceAllocation,
  ) {
    let call_id = incident.call_id.clone();
    let replaced = self
      .entries
      .insert(
        call_id.clone(),
        ActiveIncident {
          incident,
          assessment,
          allocation,
          status: STATUS_DISPATCHED.to_string(),
          updated_at: Utc::now(),
        },
      )
      .is_some();
    if replaced {
      debug!(call_id = %call_id, "re-recorded incident, previous entry replaced");
    }
  }

  /// Look up an entry. Absent is a normal outcome, not an error.
  pub fn get(&self, call_id: &str) -> Option<&ActiveIncident> {
    self.entries.get(call_id)
  }

  /// Set the status of an existing entry. The value is accepted unchecked;
  /// validating against a closed status set is the caller's job. Returns
  /// false for unknown call ids, leaving the registry untouched.
  pub fn update_status(&mut self, call_id: &str, status: &str) -> bool {
    match self.entries.get_mut(call_id) {
      Some(entry) => {
        entry.status = status.to_string();
        entry.updated_at = Utc::now();
        info!(call_id, status, "incident status updated");
        true
      }
      None => {
        debug!(call_id, "status update for unknown call id ignored");
        false
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
