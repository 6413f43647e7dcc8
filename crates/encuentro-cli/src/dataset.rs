//! # Dataset File
//!
//! The CLI operates on a local JSON dataset file holding the
//! administrative directory and the registration set — the same records
//! the dashboards fetch from the external data store. Commands load the
//! file, run the kernel, and (for mutations) write it back.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use encuentro_core::{EventDirectory, Registration};

/// Everything a command needs: the directory plus the registration set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Events, pricing configurations, jurisdictions, and roles.
    pub directory: EventDirectory,
    /// All registrations across events.
    pub registrations: Vec<Registration>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse dataset {}", path.display()))
    }

    /// Write the dataset back to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write dataset {}", path.display()))
    }

    /// Registrations belonging to one event.
    pub fn registrations_for(
        &self,
        event: encuentro_core::EventId,
    ) -> Vec<Registration> {
        self.registrations
            .iter()
            .filter(|r| r.event_id == event)
            .cloned()
            .collect()
    }
}
