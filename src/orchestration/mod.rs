//! Structured event log for the variant engine.
//!
//! Every operator-visible outcome (suggestion provenance, saves,
//! report requests) is appended to a JSONL file in the workspace so
//! support can reconstruct what the console did and why.

use crate::catalog::{CatalogManager, WorkspacePaths};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    WorkspaceInitialized,
    VariantsSuggested,
    VariantsFallback,
    ExampleSaved,
    ReportRequested,
}

/// General-purpose orchestration event stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationEvent {
    pub event_id: Uuid,
    pub example_id: Option<Uuid>,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

pub struct OrchestrationLog {
    events_path: PathBuf,
}

impl OrchestrationLog {
    pub fn for_workspace(paths: &WorkspacePaths) -> Self {
        Self {
            events_path: paths.events_file(),
        }
    }

    pub fn append_event(&self, event: &OrchestrationEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Read the full event history, oldest first.
    pub fn read_events(&self) -> Result<Vec<OrchestrationEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines() {
            if line.trim().is_empty() {
                continue;
            }
            events.push(serde_json::from_str(line)?);
        }
        Ok(events)
    }
}

pub fn log_event(
    manager: &CatalogManager,
    example_id: Option<Uuid>,
    event_type: EventType,
    details: serde_json::Value,
) -> Result<()> {
    let event = OrchestrationEvent {
        event_id: Uuid::new_v4(),
        example_id,
        event_type,
        timestamp: Utc::now(),
        details,
    };
    let log = OrchestrationLog::for_workspace(&manager.paths);
    log.append_event(&event)
}
