use serde::{Deserialize, Serialize};

/// Integer price level as quoted by the exchange.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const fn new(value: i64) -> Self {
        Price(value)
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Midpoint between two levels; may fall between ticks.
    pub fn midpoint(self, other: Price) -> f64 {
        (self.as_f64() + other.as_f64()) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_can_land_between_ticks() {
        assert_eq!(Price::new(9).midpoint(Price::new(12)), 10.5);
        assert_eq!(Price::new(10).midpoint(Price::new(10)), 10.0);
    }

    #[test]
    fn price_keys_serialize_as_json_object_keys() {
        let mut levels = std::collections::BTreeMap::new();
        levels.insert(Price::new(101), 4_i64);

        let raw = serde_json::to_string(&levels).unwrap();
        assert_eq!(raw, r#"{"101":4}"#);

        let parsed: std::collections::BTreeMap<Price, i64> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, levels);
    }
}
