//! Structural polygon identifiers.
//!
//! A `PolyId` names a pane inside a frame or sash by its position in the
//! split tree: `idx` is the root polygon and `pos` the branch taken at each
//! split. Two ids are equal when both parts are equal, so the id itself is
//! the map key.

use fenestra_core::PersistenceError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolyId {
    pub idx: u32,
    #[serde(default)]
    pub pos: Vec<u32>,
}

impl PolyId {
    pub fn new(idx: u32) -> Self {
        Self {
            idx,
            pos: Vec::new(),
        }
    }

    pub fn with_pos(idx: u32, pos: Vec<u32>) -> Self {
        Self { idx, pos }
    }

    /// Id of one side of a split: `0` for the left piece, `1` for the right.
    pub fn child(&self, branch: u32) -> PolyId {
        let mut pos = self.pos.clone();
        pos.push(branch);
        PolyId { idx: self.idx, pos }
    }

    /// Whether `self` was derived from `other` by splitting.
    pub fn is_descendant_of(&self, other: &PolyId) -> bool {
        self.idx == other.idx
            && self.pos.len() > other.pos.len()
            && self.pos.starts_with(&other.pos)
    }

    pub fn to_json(&self) -> String {
        let pos: Vec<String> = self.pos.iter().map(u32::to_string).collect();
        format!("{{\"idx\":{},\"pos\":[{}]}}", self.idx, pos.join(","))
    }

    pub fn deserialize(json: &str) -> Result<PolyId, PersistenceError> {
        serde_json::from_str(json).map_err(|e| PersistenceError::InvalidPolyId {
            json: json.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn equal_to(&self, other: &PolyId) -> bool {
        self == other
    }
}

impl fmt::Display for PolyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}
