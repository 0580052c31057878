use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::state::{error::MalformedStateError, price_history::PriceHistory};

pub const STATE_VERSION: u32 = 1;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Everything carried from one tick to the next through `traderData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderState {
    /// Blobs written before the field existed are read as version 1.
    #[serde(default = "unversioned")]
    pub version: u32,

    #[serde(default)]
    pub prices: BTreeMap<String, PriceHistory>,
}

fn unversioned() -> u32 {
    1
}

impl Default for TraderState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            prices: BTreeMap::new(),
        }
    }
}

impl TraderState {
    /// Missing or blank blobs are the empty state, not an error.
    pub fn decode(blob: Option<&str>) -> Result<Self, MalformedStateError> {
        let raw = match blob.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(raw) => raw,
        };

        let state: TraderState = serde_json::from_str(raw)?;
        if state.version != STATE_VERSION {
            return Err(MalformedStateError::UnsupportedVersion {
                found: state.version,
                supported: STATE_VERSION,
            });
        }

        Ok(state)
    }

    /// Deterministic: products are written in sorted order.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn history(&self, product: &str) -> Option<&PriceHistory> {
        self.prices.get(product)
    }

    pub fn record(&mut self, product: &str, timestamp: i64, price: f64) {
        if !price.is_finite() {
            return;
        }

        self.prices
            .entry(product.to_string())
            .or_default()
            .push(timestamp, price);
    }

    pub fn truncate(&mut self, capacity: usize) {
        for history in self.prices.values_mut() {
            history.truncate_to(capacity);
        }
    }
}
