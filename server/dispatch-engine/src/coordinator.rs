//! Coordinator: runs assess -> allocate -> record for each call and exposes
//! the status query/update surface.

use tracing::info;

use crate::allocate::allocate;
use crate::assess::assess;
use crate::config::Config;
use crate::registry::IncidentRegistry;
use crate::types::{ActiveIncident, CallResponse, EmergencyIncident, STATUS_DISPATCHED};

/// One coordinator per service/session; each owns its registry, so tests can
/// run independent instances side by side.
pub struct Coordinator {
  config: Config,
  registry: IncidentRegistry,
}

impl Coordinator {
  pub fn new(config: Config) -> Self {
    Self {
      config,
      registry: IncidentRegistry::new(),
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Process one emergency call: assess, allocate, record, respond.
  ///
  /// Infallible for any constructed EmergencyIncident — validation happened
  /// at intake, and both engines are total. The three steps run in sequence
  /// with no suspension points, so the registry write is atomic from the
  /// caller's point of view.
  pub fn process_emergency_call(&mut self, incident: EmergencyIncident) -> CallResponse {
    info!(call_id = %incident.call_id, "processing emergency call");

    let assessment = assess(&self.config, &incident);
    info!(
      call_id = %incident.call_id,
      incident_type = %assessment.incident_type,
      severity = assessment.severity_score,
      "assessment complete"
    );

    let allocation = allocate(&self.config, &assessment);
    info!(
      call_id = %incident.call_id,
      ambulances = allocation.ambulances_required,
      fire_trucks = allocation.fire_trucks_required,
      "resources allocated"
    );

    let response = CallResponse {
      call_id: incident.call_id.clone(),
      incident_type: assessment.incident_type,
      severity: assessment.severity_score,
      priority: assessment.medical_priority,
      dispatch_plan: allocation.dispatch_order.clone(),
      estimated_arrival: assessment.estimated_arrival_time.clone(),
      status: STATUS_DISPATCHED.to_string(),
    };

    self.registry.record(incident, assessment, allocation);
    response
  }

  pub fn get_incident_status(&self, call_id: &str) -> Option<&ActiveIncident> {
    self.registry.get(call_id)
  }

  pub fn update_incident_status(&mut self, call_id: &str, status: &str) -> bool {
    self.registry.update_status(call_id, status)
  }

  pub fn registry(&self) -> &IncidentRegistry {
    &self.registry
  }
}
