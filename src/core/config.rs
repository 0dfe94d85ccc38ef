//! Configuration for the map-view zoom facade
//!
//! The numeric core takes no configuration; these options only decide how the
//! facade treats suspicious input before it reaches the math.

use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// How the facade treats non-finite input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Pass every value through; NaN and infinity propagate into the region
    #[default]
    Propagate,
    /// Reject non-finite coordinates and zoom levels, and views without a drawable size
    RejectNonFinite,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewOptions {
    pub input_policy: InputPolicy,
}

impl MapViewOptions {
    /// Options matching the reference behaviour: nothing is rejected
    pub fn lenient() -> Self {
        Self {
            input_policy: InputPolicy::Propagate,
        }
    }

    pub fn strict() -> Self {
        Self {
            input_policy: InputPolicy::RejectNonFinite,
        }
    }

    pub fn with_input_policy(mut self, input_policy: InputPolicy) -> Self {
        self.input_policy = input_policy;
        self
    }

    /// Parses options from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(MapError::from)
    }

    pub fn is_strict(&self) -> bool {
        self.input_policy == InputPolicy::RejectNonFinite
    }
}
