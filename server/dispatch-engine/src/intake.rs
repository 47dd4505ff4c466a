//! Validate inbound calls into canonical EmergencyIncident records.
//!
//! Everything past this boundary is total: a constructed incident is always
//! assessable and allocatable.

use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::types::{EmergencyIncident, InboundCall};

/// Parse and validate an InboundCall into a canonical EmergencyIncident.
///
/// Rejects blank call ids and descriptions. A missing timestamp is set to
/// the current time (call-intake time is creation time).
pub fn intake(raw: &InboundCall) -> Result<EmergencyIncident, EngineError> {
  if raw.call_id.trim().is_empty() {
    return Err(EngineError::validation("call_id", "must not be empty"));
  }
  if raw.description.trim().is_empty() {
    return Err(EngineError::validation("description", "must not be empty"));
  }

  let timestamp: DateTime<Utc> = match &raw.timestamp {
    Some(t) => DateTime::parse_from_rfc3339(t)
      .map_err(|e| EngineError::validation("timestamp", &format!("invalid RFC3339: {}", e)))?
      .with_timezone(&Utc),
    None => Utc::now(),
  };

  Ok(EmergencyIncident {
    call_id: raw.call_id.clone(),
    timestamp,
    location: raw.location.clone(),
    description: raw.description.clone(),
    severity_indicators: raw.severity_indicators.clone(),
    caller_contact: raw.caller_contact.clone(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_raw() -> InboundCall {
    InboundCall {
      call_id: "911-2024-001".into(),
      timestamp: Some("2024-06-01T12:00:00Z".into()),
      location: "123 Main St".into(),
      description: "Patient experiencing severe chest pain".into(),
      severity_indicators: vec!["unresponsive".into()],
      caller_contact: Some("555-0123".into()),
    }
  }

  #[test]
  fn valid_call_passes_through() {
    let incident = intake(&make_raw()).unwrap();
    assert_eq!(incident.call_id, "911-2024-001");
    assert_eq!(incident.timestamp.to_rfc3339(), "2024-06-01T12:00:00+00:00");
    assert_eq!(incident.severity_indicators.len(), 1);
  }

  #[test]
  fn blank_call_id_is_rejected() {
    let mut raw = make_raw();
    raw.call_id = "  ".into();
    let err = intake(&raw).unwrap_err();
    assert!(err.to_string().contains("call_id"));
  }

  #[test]
  fn empty_description_is_rejected() {
    let mut raw = make_raw();
    raw.description = String::new();
    let err = intake(&raw).unwrap_err();
    assert!(err.to_string().contains("description"));
  }

  #[test]
  fn bad_timestamp_is_rejected() {
    let mut raw = make_raw();
    raw.timestamp = Some("yesterday".into());
    let err = intake(&raw).unwrap_err();
    assert!(err.to_string().contains("timestamp"));
  }

  #[test]
  fn missing_timestamp_defaults_to_now() {
    let mut raw = make_raw();
    raw.timestamp = None;
    let before = Utc::now();
    let incident = intake(&raw).unwrap();
    assert!(incident.timestamp >= before);
  }
}
