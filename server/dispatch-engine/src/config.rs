//! Engine configuration: classification rules and cost weights.

use crate::types::IncidentType;

/// One entry in the ordered classification list. The first rule whose
/// keywords match the lowercased description wins, regardless of where the
/// keyword appears in the text.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
  pub incident_type: IncidentType,
  pub keywords: Vec<String>,
  /// Base severity before indicator boost (1-10 scale).
  pub base_severity: u8,
}

impl ClassificationRule {
  fn new(incident_type: IncidentType, keywords: &[&str], base_severity: u8) -> Self {
    Self {
      incident_type,
      keywords: keywords.iter().map(|k| k.to_string()).collect(),
      base_severity,
    }
  }
}

/// Tunable rules and weights for assessment and allocation.
#[derive(Debug, Clone)]
pub struct Config {
  /// Ordered classification rules, highest priority first.
  pub classification: Vec<ClassificationRule>,
  /// Category used when no rule matches.
  pub fallback_type: IncidentType,
  pub fallback_severity: u8,
  /// Severity boost per reported indicator.
  pub indicator_weight: f64,
  /// Per-unit cost weights for the estimated cost sum.
  pub ambulance_cost: u32,
  pub fire_truck_cost: u32,
  pub personnel_cost: u32,
  /// Fixed arrival band; not computed from location.
  pub arrival_band: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      classification: vec![
        ClassificationRule::new(IncidentType::Cardiac, &["cardiac", "heart", "chest pain"], 8),
        ClassificationRule::new(IncidentType::Trauma, &["trauma", "accident", "hit", "crash"], 7),
        ClassificationRule::new(IncidentType::Fire, &["fire", "smoke", "burn"], 8),
      ],
      fallback_type: IncidentType::Medical,
      fallback_severity: 5,
      indicator_weight: 0.5,
      ambulance_cost: 500,
      fire_truck_cost: 1000,
      personnel_cost: 100,
      arrival_band: "5-8 minutes".to_string(),
    }
  }
}
