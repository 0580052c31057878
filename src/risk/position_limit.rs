pub const DEFAULT_POSITION_LIMIT: i64 = 50;

/// Absolute cap on a product's inventory, long or short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionLimit {
    limit: i64,
}

impl PositionLimit {
    pub fn new(limit: i64) -> Self {
        Self {
            limit: limit.saturating_abs(),
        }
    }

    /// Units that can still be bought from `position`; negative when already over.
    pub fn buy_capacity(&self, position: i64) -> i64 {
        self.limit.saturating_sub(position)
    }

    /// Units that can still be sold from `position`; negative when already over.
    pub fn sell_capacity(&self, position: i64) -> i64 {
        self.limit.saturating_add(position)
    }
}
