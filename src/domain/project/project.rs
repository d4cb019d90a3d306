//! Project module.
//!
//! This module contains the project record exchanged with the
//! backend service. Plain data transfer, no behavior.

use serde::{Deserialize, Serialize};

/// Represents a project fetched from the backend service.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "project_id")]
    pub id: u64,
    pub name: String,
}
