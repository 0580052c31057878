use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    risk::position_limit::DEFAULT_POSITION_LIMIT,
    scenario::strategies::{StrategyKind, StrategyParams},
    state::trader_state::DEFAULT_HISTORY_CAPACITY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Absolute cap on inventory, long or short.
    pub position_limit: i64,

    pub strategy: StrategyParams,
}

impl ProductConfig {
    pub fn new(kind: StrategyKind, position_limit: i64) -> Self {
        Self {
            position_limit,
            strategy: StrategyParams::defaults_for(kind),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.position_limit <= 0 {
            bail!("position_limit must be > 0");
        }
        self.strategy.validate()
    }
}

/// Products the engine trades and how each one is priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderConfig {
    /// Recorded mids kept per product between ticks.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    pub products: BTreeMap<String, ProductConfig>,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for TraderConfig {
    fn default() -> Self {
        let products = [
            ("RAINFOREST_RESIN", StrategyKind::Midpoint),
            ("KELP", StrategyKind::MovingAverage),
            ("SQUID_INK", StrategyKind::Momentum),
        ]
        .into_iter()
        .map(|(product, kind)| {
            (
                product.to_string(),
                ProductConfig::new(kind, DEFAULT_POSITION_LIMIT),
            )
        })
        .collect();

        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            products,
        }
    }
}

impl TraderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read trader config {}", path.display()))?;

        Self::from_yaml(&raw)
            .with_context(|| format!("failed to load trader config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let config: TraderConfig =
            serde_yaml::from_str(raw).context("failed to parse trader config")?;

        config
            .validate()
            .context("trader config validation failed")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            bail!("history_capacity must be > 0");
        }
        if self.products.is_empty() {
            bail!("products must not be empty");
        }
        for (product, config) in &self.products {
            config
                .validate()
                .with_context(|| format!("invalid config for product {product}"))?;
        }
        Ok(())
    }
}
