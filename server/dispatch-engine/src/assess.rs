//! Assessment engine: classify an incident and score its severity.

use crate::config::{ClassificationRule, Config};
use crate::types::{EmergencyIncident, IncidentAssessment, IncidentType, Priority};

/// Assess an incident. Total and pure: every incident gets an assessment,
/// unknown descriptions fall back to the MEDICAL category.
pub fn assess(config: &Config, incident: &EmergencyIncident) -> IncidentAssessment {
  let (incident_type, base_severity) = classify(config, &incident.description);

  let raw_severity =
    base_severity as f64 + incident.severity_indicators.len() as f64 * config.indicator_weight;
  let severity_score = truncate_severity(raw_severity);
  let medical_priority = Priority::from_severity(severity_score);

  IncidentAssessment {
    incident_id: incident.call_id.clone(),
    incident_type,
    severity_score,
    medical_priority,
    recommended_response: format!("Deploy specialized {} response team", incident_type),
    estimated_arrival_time: config.arrival_band.clone(),
  }
}

/// First-match-wins over the ordered rule list. Rule order decides the
/// category when keywords from several categories appear in one description;
/// keyword position in the text never matters.
fn classify(config: &Config, description: &str) -> (IncidentType, u8) {
  let text = description.to_lowercase();
  config
    .classification
    .iter()
    .find(|rule| rule_matches(rule, &text))
    .map(|rule| (rule.incident_type, rule.base_severity))
    .unwrap_or((config.fallback_type, config.fallback_severity))
}

fn rule_matches(rule: &ClassificationRule, text: &str) -> bool {
  rule.keywords.iter().any(|kw| text.contains(kw.as_str()))
}

/// Clamp a raw severity to [1, 10] and truncate toward zero.
///
/// Truncation (floor, not round) is the normative rule and silently decides
/// priority-band boundaries: 7.5 stores as 7 (HIGH), not 8 (CRITICAL).
pub fn truncate_severity(raw: f64) -> u8 {
  raw.clamp(1.0, 10.0).floor() as u8
}
