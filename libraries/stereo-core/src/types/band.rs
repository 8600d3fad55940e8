//! Band types

use serde::{Deserialize, Serialize};

pub type BandId = i64;

/// A band (or solo artist) in the collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Band {
    pub id: BandId,
    pub name: String,
}

impl Band {
    /// Create a band
    pub fn new(id: BandId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
