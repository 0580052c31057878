use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::strategy::strategies::{
    midpoint::DEFAULT_FAIR_VALUE,
    momentum::{DEFAULT_BIAS, DEFAULT_LOOKBACK},
    moving_average::DEFAULT_WINDOW,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Midpoint,
    MovingAverage,
    Momentum,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Midpoint => write!(f, "midpoint"),
            Self::MovingAverage => write!(f, "moving-average"),
            Self::Momentum => write!(f, "momentum"),
        }
    }
}

/// Strategy selection and tuning for one product, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StrategyParams {
    Midpoint {
        #[serde(default = "default_fair_value")]
        default_fair_value: f64,
    },
    MovingAverage {
        #[serde(default = "default_window")]
        window: usize,
        #[serde(default = "default_fair_value")]
        default_fair_value: f64,
    },
    Momentum {
        #[serde(default = "default_lookback")]
        lookback: usize,
        #[serde(default = "default_bias")]
        bias: f64,
        #[serde(default = "default_fair_value")]
        default_fair_value: f64,
    },
}

fn default_fair_value() -> f64 {
    DEFAULT_FAIR_VALUE
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_lookback() -> usize {
    DEFAULT_LOOKBACK
}

fn default_bias() -> f64 {
    DEFAULT_BIAS
}

impl StrategyParams {
    pub fn defaults_for(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Midpoint => Self::Midpoint {
                default_fair_value: DEFAULT_FAIR_VALUE,
            },
            StrategyKind::MovingAverage => Self::MovingAverage {
                window: DEFAULT_WINDOW,
                default_fair_value: DEFAULT_FAIR_VALUE,
            },
            StrategyKind::Momentum => Self::Momentum {
                lookback: DEFAULT_LOOKBACK,
                bias: DEFAULT_BIAS,
                default_fair_value: DEFAULT_FAIR_VALUE,
            },
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Midpoint { .. } => StrategyKind::Midpoint,
            Self::MovingAverage { .. } => StrategyKind::MovingAverage,
            Self::Momentum { .. } => StrategyKind::Momentum,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let default_fair_value = match self {
            Self::Midpoint { default_fair_value } => *default_fair_value,
            Self::MovingAverage {
                window,
                default_fair_value,
            } => {
                if *window == 0 {
                    bail!("window must be > 0");
                }
                *default_fair_value
            }
            Self::Momentum {
                lookback,
                bias,
                default_fair_value,
            } => {
                if *lookback < 2 {
                    bail!("lookback must be >= 2");
                }
                if !(0.0..1.0).contains(bias) {
                    bail!("bias must be in [0, 1)");
                }
                *default_fair_value
            }
        };

        if !default_fair_value.is_finite() {
            bail!("default_fair_value must be finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_displays_as_its_config_tag() {
        for kind in [
            StrategyKind::Midpoint,
            StrategyKind::MovingAverage,
            StrategyKind::Momentum,
        ] {
            let params: StrategyParams =
                serde_yaml::from_str(&format!("kind: {kind}")).unwrap();
            assert_eq!(params.kind(), kind);
        }
    }

    #[test]
    fn omitted_params_take_defaults() {
        let params: StrategyParams = serde_yaml::from_str("kind: momentum").unwrap();

        assert_eq!(params, StrategyParams::defaults_for(StrategyKind::Momentum));
        assert_eq!(params.kind(), StrategyKind::Momentum);
    }

    #[test]
    fn validation_rejects_degenerate_windows() {
        let params = StrategyParams::MovingAverage {
            window: 0,
            default_fair_value: 10.0,
        };
        assert!(params.validate().is_err());

        let params = StrategyParams::Momentum {
            lookback: 3,
            bias: 1.5,
            default_fair_value: 10.0,
        };
        assert!(params.validate().is_err());
    }
}
