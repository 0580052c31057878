use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A mid-price observed at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub timestamp: i64,
    pub price: f64,
}

/// Chronological mid-price record for one product, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceHistory {
    observations: VecDeque<PriceObservation>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, timestamp: i64, price: f64) {
        self.observations
            .push_back(PriceObservation { timestamp, price });
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn latest(&self) -> Option<&PriceObservation> {
        self.observations.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceObservation> {
        self.observations.iter()
    }

    /// The last `count` recorded prices, oldest first, or `None` while fewer
    /// than `count` have been recorded.
    pub fn recent_prices(&self, count: usize) -> Option<Vec<f64>> {
        if count == 0 || self.observations.len() < count {
            return None;
        }

        let skip = self.observations.len() - count;
        Some(
            self.observations
                .iter()
                .skip(skip)
                .map(|observation| observation.price)
                .collect(),
        )
    }

    /// Evicts from the front until at most `capacity` observations remain.
    pub fn truncate_to(&mut self, capacity: usize) {
        while self.observations.len() > capacity {
            self.observations.pop_front();
        }
    }
}
