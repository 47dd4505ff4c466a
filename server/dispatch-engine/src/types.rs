//! Core types for the dispatch engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status assigned to every newly recorded incident. Later status values are
/// caller-supplied free text (EN_ROUTE, ON_SCENE, RESOLVED, CANCELLED, ...).
pub const STATUS_DISPATCHED: &str = "DISPATCHED";

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One inbound emergency call from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundCall {
  pub call_id: String,
  /// RFC3339 call time; omitted means "now".
  #[serde(default)]
  pub timestamp: Option<String>,
  #[serde(default)]
  pub location: String,
  pub description: String,
  #[serde(default)]
  pub severity_indicators: Vec<String>,
  #[serde(default)]
  pub caller_contact: Option<String>,
}

/// One inbound command line for the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
  Call { call: InboundCall },
  Status { call_id: String },
  Update { call_id: String, status: String },
}

// ---------------------------------------------------------------------------
// Incident type / priority enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentType {
  Cardiac,
  Trauma,
  Fire,
  Medical,
}

impl IncidentType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Cardiac => "CARDIAC",
      Self::Trauma => "TRAUMA",
      Self::Fire => "FIRE",
      Self::Medical => "MEDICAL",
    }
  }
}

impl fmt::Display for IncidentType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Coarse triage band, a total function of the truncated severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
  Critical,
  High,
  Medium,
  Low,
}

impl Priority {
  /// Band thresholds: >=8 CRITICAL, >=6 HIGH, >=4 MEDIUM, else LOW.
  /// Input is the *truncated* integer score; truncation happens upstream.
  pub fn from_severity(score: u8) -> Self {
    if score >= 8 {
      Self::Critical
    } else if score >= 6 {
      Self::High
    } else if score >= 4 {
      Self::Medium
    } else {
      Self::Low
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Critical => "CRITICAL",
      Self::High => "HIGH",
      Self::Medium => "MEDIUM",
      Self::Low => "LOW",
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Internal canonical models
// ---------------------------------------------------------------------------

/// Canonical emergency call after intake validation. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyIncident {
  pub call_id: String,
  pub timestamp: DateTime<Utc>,
  pub location: String,
  pub description: String,
  pub severity_indicators: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caller_contact: Option<String>,
}

/// Assessment produced once per incident by the assessment engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentAssessment {
  pub incident_id: String,
  pub incident_type: IncidentType,
  /// Truncated integer severity, always within [1, 10].
  pub severity_score: u8,
  pub medical_priority: Priority,
  pub recommended_response: String,
  pub estimated_arrival_time: String,
}

/// Resource plan produced once per incident by the allocation engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceAllocation {
  /// Always `ALLOC-<call_id>`; the two ids are mutually derivable.
  pub allocation_id: String,
  pub ambulances_required: u32,
  pub fire_trucks_required: u32,
  pub personnel_required: u32,
  pub estimated_cost: u32,
  /// `Unit-0 .. Unit-(ambulances + fire_trucks - 1)` placeholder labels.
  pub dispatch_order: Vec<String>,
}

// ---------------------------------------------------------------------------
// Registry entry
// ---------------------------------------------------------------------------

/// Composed record tracked per call id for the life of the process.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveIncident {
  pub incident: EmergencyIncident,
  pub assessment: IncidentAssessment,
  pub allocation: ResourceAllocation,
  pub status: String,
  pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Response projection returned for every processed call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallResponse {
  pub call_id: String,
  pub incident_type: IncidentType,
  pub severity: u8,
  pub priority: Priority,
  pub dispatch_plan: Vec<String>,
  pub estimated_arrival: String,
  pub status: String,
}

/// Output line for a status query. Absent is a normal outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct StatusOutput {
  pub found: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub incident: Option<ActiveIncident>,
}

/// Output line for a status update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOutput {
  pub updated: bool,
}

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn priority_band_boundaries() {
    assert_eq!(Priority::from_severity(10), Priority::Critical);
    assert_eq!(Priority::from_severity(8), Priority::Critical);
    assert_eq!(Priority::from_severity(7), Priority::High);
    assert_eq!(Priority::from_severity(6), Priority::High);
    assert_eq!(Priority::from_severity(5), Priority::Medium);
    assert_eq!(Priority::from_severity(4), Priority::Medium);
    assert_eq!(Priority::from_severity(3), Priority::Low);
    assert_eq!(Priority::from_severity(1), Priority::Low);
  }

  #[test]
  fn enums_serialize_screaming_snake() {
    assert_eq!(
      serde_json::to_string(&IncidentType::Cardiac).unwrap(),
      "\"CARDIAC\""
    );
    assert_eq!(
      serde_json::to_string(&Priority::Critical).unwrap(),
      "\"CRITICAL\""
    );
  }

  #[test]
  fn command_lines_parse() {
    let call: Command = serde_json::from_str(
      r#"{"op":"call","call":{"call_id":"911-1","description":"chest pain"}}"#,
    )
    .unwrap();
    assert!(matches!(call, Command::Call { .. }));

    let status: Command =
      serde_json::from_str(r#"{"op":"status","call_id":"911-1"}"#).unwrap();
    assert!(matches!(status, Command::Status { .. }));

    let update: Command =
      serde_json::from_str(r#"{"op":"update","call_id":"911-1","status":"RESOLVED"}"#).unwrap();
    assert!(matches!(update, Command::Update { .. }));
  }
}
