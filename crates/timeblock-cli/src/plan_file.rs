//! On-disk plan inputs.
//!
//! A plan file is a JSON document bundling everything one scheduling run
//! needs: tasks, fixed events and an optional profile. The engine itself
//! never touches the filesystem; this module is the caller-side boundary.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use timeblock_core::{FixedEvent, Profile, Task};

/// Inputs for a scheduling run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub events: Vec<FixedEvent>,
    #[serde(default)]
    pub profile: Profile,
}

impl PlanFile {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)?;
        let plan: Self = serde_json::from_str(&raw)?;
        Ok(plan)
    }
}
