//! Allocation engine: turn an assessment into a resource plan.

use crate::config::Config;
use crate::types::{IncidentAssessment, IncidentType, ResourceAllocation};

/// Allocate resources for an assessment. Total and pure.
pub fn allocate(config: &Config, assessment: &IncidentAssessment) -> ResourceAllocation {
  let (ambulances, fire_trucks, personnel) =
    unit_counts(assessment.incident_type, assessment.severity_score);

  let estimated_cost = ambulances * config.ambulance_cost
    + fire_trucks * config.fire_truck_cost
    + personnel * config.personnel_cost;

  // Placeholder labels, not real unit identities; one per vehicle.
  let dispatch_order = (0..ambulances + fire_trucks)
    .map(|i| format!("Unit-{}", i))
    .collect();

  ResourceAllocation {
    allocation_id: format!("ALLOC-{}", assessment.incident_id),
    ambulances_required: ambulances,
    fire_trucks_required: fire_trucks,
    personnel_required: personnel,
    estimated_cost,
    dispatch_order,
  }
}

/// Unit-count table by incident type and severity threshold:
/// (ambulances, fire_trucks, personnel).
fn unit_counts(incident_type: IncidentType, severity: u8) -> (u32, u32, u32) {
  match incident_type {
    IncidentType::Cardiac => (2, 0, 6),
    IncidentType::Trauma => (
      if severity >= 7 { 2 } else { 1 },
      if severity >= 8 { 1 } else { 0 },
      if severity >= 8 { 8 } else { 4 },
    ),
    IncidentType::Fire => (2, if severity >= 8 { 3 } else { 2 }, 12),
    IncidentType::Medical => (1, 0, 2),
  }
}
