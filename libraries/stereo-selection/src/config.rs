//! Selection settings

use serde::{Deserialize, Serialize};

/// Batch sizes used by the song providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Songs per batch in full-shuffle mode
    #[serde(default = "default_shuffle_batch_size")]
    pub shuffle_batch_size: usize,

    /// Songs per batch when locked to a year or decade
    #[serde(default = "default_era_batch_size")]
    pub era_batch_size: usize,

    /// Length of each block in block-party mode (one band block, then one random block)
    #[serde(default = "default_block_party_size")]
    pub block_party_size: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            shuffle_batch_size: default_shuffle_batch_size(),
            era_batch_size: default_era_batch_size(),
            block_party_size: default_block_party_size(),
        }
    }
}

fn default_shuffle_batch_size() -> usize {
    10
}

fn default_era_batch_size() -> usize {
    10
}

fn default_block_party_size() -> usize {
    5
}
