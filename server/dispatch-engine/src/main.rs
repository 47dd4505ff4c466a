//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a tagged Command:
//! - {"op":"call","call":{...}}                  -> CallResponse
//! - {"op":"status","call_id":"..."}             -> StatusOutput
//! - {"op":"update","call_id":"...","status":".."} -> UpdateOutput
//!
//! Invalid lines produce an ErrorOutput line. Logs go to stderr via tracing.

use dispatch_engine::types::{Command, ErrorOutput, StatusOutput, UpdateOutput};
use dispatch_engine::{intake, Coordinator, EngineError};
use std::io::{self, BufRead, Write};

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let mut coordinator = Coordinator::with_defaults();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "dispatch-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let command: Command = match serde_json::from_str(trimmed) {
      Ok(c) => c,
      Err(e) => {
        emit(&mut out, &ErrorOutput::new(format!("json parse: {}", e)));
        continue;
      }
    };

    match command {
      Command::Call { call } => match intake::intake(&call) {
        Ok(incident) => {
          let response = coordinator.process_emergency_call(incident);
          emit(&mut out, &response);
        }
        Err(e) => {
          let err = match &e {
            EngineError::Validation { field, reason } => {
              ErrorOutput::new(reason.clone()).with_field(field.clone())
            }
            _ => ErrorOutput::new(e.to_string()),
          };
          emit(&mut out, &err);
        }
      },
      Command::Status { call_id } => {
        let incident = coordinator.get_incident_status(&call_id).cloned();
        emit(
          &mut out,
          &StatusOutput {
            found: incident.is_some(),
            incident,
          },
        );
      }
      Command::Update { call_id, status } => {
        let updated = coordinator.update_incident_status(&call_id, &status);
        emit(&mut out, &UpdateOutput { updated });
      }
    }
  }

  let _ = out.flush();
}

fn emit<W: Write, T: serde::Serialize>(out: &mut W, value: &T) {
  let _ = serde_json::to_writer(&mut *out, value);
  let _ = writeln!(out);
}
